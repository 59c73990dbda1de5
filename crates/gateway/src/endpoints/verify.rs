//! # GET /api/wallet/verify — パス検証
//!
//! QRコードから読み取ったトークンをパスストアで照合する。
//!
//! ## 応答
//! - token欠落 → 400 `{valid:false, reason:"missing_token"}`
//! - 該当なし → 404 `{valid:false, reason:"not_found"}`
//! - 失効済み → 410 `{valid:false, reason:"revoked"}`
//! - 有効 → 200 `{valid:true, ...}` + 検証ログに追記

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use hushh_types::{PassStatus, VerificationEvent, VerifyQuery, VerifySuccessResponse};

use crate::config::AppState;
use crate::error::GatewayError;

/// パス検証ハンドラ。
pub async fn handle_verify(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyQuery>,
) -> Result<Json<VerifySuccessResponse>, GatewayError> {
    let token = query
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(GatewayError::MissingToken)?;

    let record = state
        .store
        .find_by_token(token)
        .await?
        .ok_or(GatewayError::NotFound)?;

    if record.status == PassStatus::Revoked {
        return Err(GatewayError::Revoked);
    }

    // 検証成功を追記専用ログに記録する
    state
        .store
        .record_verification(VerificationEvent {
            qr_token: token.to_string(),
            serial_number: record.serial_number.clone(),
            verified_at: OffsetDateTime::now_utc().unix_timestamp(),
        })
        .await?;

    tracing::info!(serial = %record.serial_number, "パスを検証しました");

    let issued_at = OffsetDateTime::from_unix_timestamp(record.issued_at)
        .map_err(|e| GatewayError::Internal(format!("発行日時が不正です: {e}")))?
        .format(&Rfc3339)
        .map_err(|e| GatewayError::Internal(format!("発行日時のフォーマットに失敗: {e}")))?;

    Ok(Json(VerifySuccessResponse {
        valid: true,
        name: record.full_name,
        handle: record.handle,
        serial: record.serial_number,
        issued_at,
        message: "This pass is valid and active.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::test_state;
    use crate::store::PassStore;
    use hushh_types::PassRecord;

    fn seeded_record() -> PassRecord {
        PassRecord {
            serial_number: "HW-1700000000000-A1B2C3".to_string(),
            authentication_token: "aa".repeat(32),
            qr_token: "hw_0123456789abcdef0123456789abcdef".to_string(),
            full_name: "Ada Lovelace".to_string(),
            handle: Some("ada".to_string()),
            uid: None,
            issued_at: 1_700_000_000,
            status: PassStatus::Active,
        }
    }

    fn query(token: Option<&str>) -> Query<VerifyQuery> {
        Query(VerifyQuery {
            token: token.map(str::to_string),
        })
    }

    /// tokenなし・空文字が400 missing_tokenになることを確認
    #[tokio::test]
    async fn test_missing_token() {
        let (state, _store) = test_state();

        let result = handle_verify(State(state.clone()), query(None)).await;
        assert!(matches!(result, Err(GatewayError::MissingToken)));

        let result = handle_verify(State(state), query(Some("  "))).await;
        assert!(matches!(result, Err(GatewayError::MissingToken)));
    }

    /// 未知のトークンがnot_foundになることを確認
    #[tokio::test]
    async fn test_unknown_token() {
        let (state, store) = test_state();

        let result = handle_verify(State(state), query(Some("hw_deadbeef"))).await;
        assert!(matches!(result, Err(GatewayError::NotFound)));
        assert_eq!(store.verification_count().await, 0);
    }

    /// 有効なパスの検証成功とログ追記を確認
    #[tokio::test]
    async fn test_valid_pass() {
        let (state, store) = test_state();
        let record = seeded_record();
        store.save(record.clone()).await.unwrap();

        let response = handle_verify(State(state), query(Some(&record.qr_token)))
            .await
            .unwrap()
            .0;

        assert!(response.valid);
        assert_eq!(response.name, "Ada Lovelace");
        assert_eq!(response.handle.as_deref(), Some("ada"));
        assert_eq!(response.serial, record.serial_number);
        assert!(response.issued_at.starts_with("2023-11-14T"));
        assert_eq!(store.verification_count().await, 1);
    }

    /// 失効済みパスがrevokedで拒否され、ログに残らないことを確認
    #[tokio::test]
    async fn test_revoked_pass() {
        let (state, store) = test_state();
        let record = seeded_record();
        store.save(record.clone()).await.unwrap();
        store.revoke(&record.serial_number).await.unwrap();

        let result = handle_verify(State(state), query(Some(&record.qr_token))).await;
        assert!(matches!(result, Err(GatewayError::Revoked)));
        assert_eq!(store.verification_count().await, 0);
    }
}
