//! # Hushh Wallet 共有型定義
//!
//! パス発行・検証フローで使用されるデータ構造をRust構造体として提供する。
//!
//! ## エンコーディング規則
//! - 識別子: 16進数文字列（シリアル番号は大文字、トークンは小文字）
//! - 日時: UNIX秒（内部保持）、RFC 3339文字列（APIレスポンス・pass.json）
//! - APIボディ・pass.json: camelCase

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// パスレコード
// ---------------------------------------------------------------------------

/// 発行済みパスのステータス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassStatus {
    /// 有効。検証は成功する。
    Active,
    /// 失効済み。検証は410で拒否される。
    Revoked,
}

/// 発行済みパス1件のレコード。パスストアに保存される。
///
/// `serial_number`と`qr_token`はリクエストごとに新規生成され、再利用されない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassRecord {
    /// シリアル番号。形式 `HW-<エポックミリ秒>-<3バイト大文字16進>`
    pub serial_number: String,
    /// Walletアプリの更新用認証トークン（32バイト小文字16進）
    pub authentication_token: String,
    /// QRコードに埋め込まれる不透明トークン（`hw_` + 16バイト小文字16進）
    pub qr_token: String,
    /// 氏名（必須、トリム後に非空）
    pub full_name: String,
    /// ハンドル（Optional）。パス上では `@handle` 表示
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// 外部ユーザー参照ID（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// 発行日時（UNIX秒）
    pub issued_at: i64,
    /// ステータス
    pub status: PassStatus,
}

/// 検証ログの1エントリ。検証成功のたびに追記される。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEvent {
    /// 照合に使われたQRトークン
    pub qr_token: String,
    /// 該当パスのシリアル番号
    pub serial_number: String,
    /// 検証日時（UNIX秒）
    pub verified_at: i64,
}

// ---------------------------------------------------------------------------
// API リクエスト/レスポンス
// ---------------------------------------------------------------------------

/// POST /api/wallet/apple リクエストボディ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePassRequest {
    /// 氏名（必須、非空）
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// ハンドル（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// 外部ユーザー参照ID（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// GET /api/wallet/pass クエリパラメータ。
#[derive(Debug, Clone, Deserialize)]
pub struct PassQuery {
    /// 氏名（必須、非空）
    pub name: Option<String>,
    /// Hushh ID。レコードの`uid`に対応する
    pub hushh_id: Option<String>,
}

/// GET /api/wallet/apple ヘルスチェックレスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 常に "ok"
    pub status: String,
    /// サービス識別子
    pub service: String,
    /// Cargoパッケージバージョン
    pub version: String,
}

/// GET /api/wallet/verify クエリパラメータ。
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyQuery {
    /// QRコードから読み取った不透明トークン
    pub token: Option<String>,
}

/// GET /api/wallet/verify 成功レスポンス。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifySuccessResponse {
    /// 常にtrue
    pub valid: bool,
    /// 氏名
    pub name: String,
    /// ハンドル（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// シリアル番号
    pub serial: String,
    /// 発行日時（RFC 3339）
    #[serde(rename = "issuedAt")]
    pub issued_at: String,
    /// 人間向けメッセージ
    pub message: String,
}

// ---------------------------------------------------------------------------
// pass.json ワイヤ構造
// ---------------------------------------------------------------------------

/// `.pkpass` アーカイブ内の pass.json 本体。
///
/// フィールド名はApple Wallet仕様のcamelCaseに合わせる。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassDefinition {
    /// 常に1
    pub format_version: u32,
    /// パスタイプ識別子（例: "pass.ai.hushh.wallet"）
    pub pass_type_identifier: String,
    /// シリアル番号
    pub serial_number: String,
    /// Apple Developerチーム識別子
    pub team_identifier: String,
    /// 発行組織名
    pub organization_name: String,
    /// パスの説明文
    pub description: String,
    /// ロゴ横のテキスト（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_text: Option<String>,
    /// 前景色（Optional、CSS rgb()形式）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<String>,
    /// 背景色（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// ラベル色（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    /// Wallet更新用WebサービスURL（Optional）
    #[serde(rename = "webServiceURL", skip_serializing_if = "Option::is_none")]
    pub web_service_url: Option<String>,
    /// Wallet更新用認証トークン（Optional、webServiceURLとペア）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_token: Option<String>,
    /// バーコード一覧（iOS 9以降）
    pub barcodes: Vec<Barcode>,
    /// 汎用パスのフィールド群
    pub generic: PassStructure,
}

/// pass.json のバーコード定義。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    /// バーコード形式（QRは "PKBarcodeFormatQR"）
    pub format: String,
    /// ペイロード。検証URLを埋め込む
    pub message: String,
    /// メッセージエンコーディング（"iso-8859-1"）
    pub message_encoding: String,
    /// 代替テキスト（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// 汎用パスのフィールド群。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStructure {
    /// 主要フィールド（氏名）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_fields: Vec<PassField>,
    /// 副次フィールド
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_fields: Vec<PassField>,
    /// 補助フィールド（ハンドル、会員種別、発行日）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_fields: Vec<PassField>,
    /// 裏面フィールド（プライバシー通知、サポート連絡先、Webサイト）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub back_fields: Vec<PassField>,
}

/// パスの表示フィールド1件。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassField {
    /// フィールドキー（パス内で一意）
    pub key: String,
    /// 表示ラベル（Optional）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// 表示値
    pub value: String,
    /// 日付表示スタイル（Optional、例: "PKDateStyleMedium"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_style: Option<String>,
}

impl PassField {
    /// ラベル付きテキストフィールドを作る。
    pub fn text(key: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            label: Some(label.to_string()),
            value: value.into(),
            date_style: None,
        }
    }

    /// 日付フィールドを作る。値はRFC 3339文字列。
    pub fn date(key: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            label: Some(label.to_string()),
            value: value.into(),
            date_style: Some("PKDateStyleMedium".to_string()),
        }
    }
}
