//! # Hushh Wallet Gateway
//!
//! Apple Wallet向けメンバーパスの発行・検証サーバー。
//!
//! ## APIエンドポイント
//! - `POST /api/wallet/apple` — パス発行（`.pkpass` バイナリ返却）
//! - `GET /api/wallet/apple` — ヘルスチェック
//! - `GET /api/wallet/pass?hushh_id=&name=` — クエリ駆動のパス発行
//! - `GET /api/wallet/verify?token=` — 発行済みパスの検証
//!
//! ## 起動シーケンス
//! 1. 環境変数から設定を読み込む
//! 2. 署名資材（証明書・鍵・WWDR）とテンプレートアセットを検証する
//! 3. リスナーをバインドし、リクエストの受付を開始する
//!
//! 設定の検証はすべて起動時に済ませ、リクエスト処理中に設定起因の失敗が
//! 起きないようにする。

mod config;
mod endpoints;
mod error;
mod store;

use std::sync::Arc;

use hushh_passkit::{PassTemplate, SigningCredentials};

use crate::config::{AppState, GatewayConfig};
use crate::store::MemoryPassStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env()?;

    // 署名資材・テンプレートの事前検証
    let credentials = SigningCredentials::from_base64_pem(
        &config.signer_cert_b64,
        &config.signer_key_b64,
        &config.wwdr_cert_b64,
    )?;
    let template = PassTemplate::load_from_dir(&config.assets_dir)?;
    tracing::info!(
        assets_dir = %config.assets_dir.display(),
        pass_type = %config.pass_config.pass_type_identifier,
        "署名資材とテンプレートを検証しました"
    );

    let state = Arc::new(AppState {
        pass_config: config.pass_config,
        credentials,
        template,
        store: Arc::new(MemoryPassStore::new()),
    });

    let app = axum::Router::new()
        .route(
            "/api/wallet/apple",
            axum::routing::post(endpoints::handle_issue_pass).get(endpoints::handle_health),
        )
        .route(
            "/api/wallet/pass",
            axum::routing::get(endpoints::handle_issue_pass_query),
        )
        .route(
            "/api/wallet/verify",
            axum::routing::get(endpoints::handle_verify),
        )
        .with_state(state);

    tracing::info!("Gatewayを {} で起動します", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
