//! # パス発行エンドポイント
//!
//! - `POST /api/wallet/apple` — JSONボディ `{fullName, handle?, uid?}`
//! - `GET /api/wallet/pass?hushh_id=&name=` — クエリ駆動の別経路
//!
//! どちらも同じ発行処理に合流する: 入力検証 → パスビルダー → レコード保存 →
//! `.pkpass` バイナリをattachmentとして返却。

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;

use hushh_passkit::{build_pass, PassRequest};
use hushh_types::{IssuePassRequest, PassQuery, PassRecord, PassStatus};

use crate::config::AppState;
use crate::error::GatewayError;

/// POST /api/wallet/apple — パス発行。
pub async fn handle_issue_pass(
    State(state): State<Arc<AppState>>,
    Json(body): Json<IssuePassRequest>,
) -> Result<Response, GatewayError> {
    issue_pass(
        &state,
        PassRequest {
            full_name: body.full_name,
            handle: body.handle,
            uid: body.uid,
        },
    )
    .await
}

/// GET /api/wallet/pass?hushh_id=&name= — クエリ駆動のパス発行。
/// `hushh_id` はレコードの外部ユーザー参照IDになる。
pub async fn handle_issue_pass_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PassQuery>,
) -> Result<Response, GatewayError> {
    issue_pass(
        &state,
        PassRequest {
            full_name: query.name.unwrap_or_default(),
            handle: None,
            uid: query.hushh_id,
        },
    )
    .await
}

/// 発行の共通処理。入力検証はビルダー呼び出しより前に行う。
async fn issue_pass(state: &AppState, request: PassRequest) -> Result<Response, GatewayError> {
    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return Err(GatewayError::Validation("fullNameは必須です".to_string()));
    }

    let request = PassRequest {
        full_name,
        handle: request.handle,
        uid: request.uid,
    };

    let built = build_pass(&state.credentials, &state.template, &state.pass_config, &request)?;

    let record = PassRecord {
        serial_number: built.serial_number.clone(),
        authentication_token: built.authentication_token.clone(),
        qr_token: built.qr_token.clone(),
        full_name: request.full_name,
        handle: request.handle,
        uid: request.uid,
        issued_at: built.issued_at,
        status: PassStatus::Active,
    };
    state.store.save(record).await?;

    tracing::info!(serial = %built.serial_number, "パスを発行しました");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/vnd.apple.pkpass")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"hushh-{}.pkpass\"", built.serial_number),
        )
        .body(Body::from(built.pass_buffer))
        .map_err(|e| GatewayError::Internal(format!("レスポンス構築に失敗: {e}")))
}
