//! # GET /api/wallet/apple — ヘルスチェック

use axum::Json;

use hushh_types::HealthResponse;

use crate::config::SERVICE_NAME;

/// ヘルスチェック。サービス識別子とバージョンを返す。
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
