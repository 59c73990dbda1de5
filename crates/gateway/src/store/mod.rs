//! # パスストア
//!
//! 発行済みパスレコードの保存・照合の抽象インターフェース。
//! 検証ハンドラはこのトレイト経由でのみレコードに触れる。
//! 既定のバックエンドはインメモリ実装（`memory`サブモジュール）。

pub mod memory;

pub use memory::MemoryPassStore;

use hushh_types::{PassRecord, VerificationEvent};

use crate::error::GatewayError;

/// パスレコードストアの抽象インターフェース。
///
/// 主キーはシリアル番号、副照合キーはQRトークン。`find_by_token`の計算量は
/// バックエンドに委ねる（インメモリ実装は副インデックスでO(1)）。
#[async_trait::async_trait]
pub trait PassStore: Send + Sync {
    /// 発行済みレコードを保存する。
    async fn save(&self, record: PassRecord) -> Result<(), GatewayError>;

    /// シリアル番号でレコードを引く。
    async fn find_by_serial(&self, serial: &str) -> Result<Option<PassRecord>, GatewayError>;

    /// QRトークンでレコードを引く。
    async fn find_by_token(&self, token: &str) -> Result<Option<PassRecord>, GatewayError>;

    /// レコードを失効させる。該当があればtrueを返す。
    async fn revoke(&self, serial: &str) -> Result<bool, GatewayError>;

    /// 検証成功を追記専用ログに記録する。
    async fn record_verification(&self, event: VerificationEvent) -> Result<(), GatewayError>;
}
