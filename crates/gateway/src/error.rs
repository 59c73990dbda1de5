//! # Gateway エラー型
//!
//! 全エンドポイント共通のエラー型。ハンドラ境界ですべての失敗をJSON
//! ボディに変換する。部分的な成功はなく、自動リトライも行わない。
//!
//! 検証系の失敗（MissingToken/NotFound/Revoked）は `{valid:false, reason}`、
//! それ以外は `{error, message}` の形で返す。

use axum::http::StatusCode;
use axum::Json;

use hushh_passkit::PasskitError;

/// Gatewayエラー型。
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// 必須入力の欠落・空文字（400）
    #[error("入力が不正です: {0}")]
    Validation(String),
    /// 検証リクエストにtokenパラメータがない（400）
    #[error("tokenパラメータがありません")]
    MissingToken,
    /// トークンに対応するパスレコードがない（404）
    #[error("パスが見つかりません")]
    NotFound,
    /// パスが失効済み（410）
    #[error("パスは失効しています")]
    Revoked,
    /// 署名資材・テンプレートの不備（500、致命的、リトライ不可）
    #[error("設定が不正です: {0}")]
    Configuration(String),
    /// パス署名・アーカイブ構築の失敗（500、メッセージをそのまま返す）
    #[error("署名処理に失敗: {0}")]
    Signing(String),
    /// その他の内部エラー（500）
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<PasskitError> for GatewayError {
    fn from(err: PasskitError) -> Self {
        match err {
            PasskitError::Configuration(msg) => GatewayError::Configuration(msg),
            PasskitError::Signing(msg) | PasskitError::Archive(msg) => GatewayError::Signing(msg),
            PasskitError::Internal(msg) => GatewayError::Internal(msg),
        }
    }
}

impl axum::response::IntoResponse for GatewayError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            GatewayError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({"error": "validation_error", "message": self.to_string()}),
            ),
            GatewayError::MissingToken => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({"valid": false, "reason": "missing_token"}),
            ),
            GatewayError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({"valid": false, "reason": "not_found"}),
            ),
            GatewayError::Revoked => (
                StatusCode::GONE,
                serde_json::json!({"valid": false, "reason": "revoked"}),
            ),
            GatewayError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({"error": "configuration_error", "message": self.to_string()}),
            ),
            GatewayError::Signing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({"error": "signing_error", "message": self.to_string()}),
            ),
            GatewayError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({"error": "internal_error", "message": self.to_string()}),
            ),
        };
        (status, Json(body)).into_response()
    }
}
