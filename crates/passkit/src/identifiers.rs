//! # 識別子生成
//!
//! シリアル番号と各種トークンをリクエストごとに新規生成する。
//! いずれもOS乱数（`OsRng`）由来で、再利用・キャッシュは行わない。

use rand::rngs::OsRng;
use rand::RngCore;

/// シリアル番号を生成する。形式 `HW-<エポックミリ秒>-<3バイト大文字16進>`。
pub fn new_serial_number() -> String {
    let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let mut suffix = [0u8; 3];
    OsRng.fill_bytes(&mut suffix);
    format!("HW-{}-{}", millis, hex::encode_upper(suffix))
}

/// Walletアプリ更新用の認証トークンを生成する（32バイト小文字16進）。
pub fn new_authentication_token() -> String {
    let mut raw = [0u8; 32];
    OsRng.fill_bytes(&mut raw);
    hex::encode(raw)
}

/// QRコード埋め込み用の不透明トークンを生成する（`hw_` + 16バイト小文字16進）。
pub fn new_qr_token() -> String {
    let mut raw = [0u8; 16];
    OsRng.fill_bytes(&mut raw);
    format!("hw_{}", hex::encode(raw))
}
