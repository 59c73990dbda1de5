//! # Gateway設定・共有状態
//!
//! 環境変数からの設定読み込みと共有状態の定義。
//! 署名資材・テンプレートの検証は起動時に1回だけ行い、リクエスト処理中に
//! 設定エラーが出ないようにする。

use std::path::PathBuf;
use std::sync::Arc;

use hushh_passkit::{PassConfig, PassTemplate, SigningCredentials};

use crate::store::PassStore;

/// サービス識別子。ヘルスチェックレスポンスに載る。
pub const SERVICE_NAME: &str = "hushh-wallet-gateway";

/// 環境変数から解決される起動設定。
pub struct GatewayConfig {
    /// リッスンアドレス
    pub bind_addr: String,
    /// パス発行の固定設定
    pub pass_config: PassConfig,
    /// テンプレートアセットのディレクトリ
    pub assets_dir: PathBuf,
    /// Base64エンコード済みPEM: パスタイプ証明書
    pub signer_cert_b64: String,
    /// Base64エンコード済みPEM: 署名鍵
    pub signer_key_b64: String,
    /// Base64エンコード済みPEM: Apple WWDR中間証明書
    pub wwdr_cert_b64: String,
}

impl GatewayConfig {
    /// 環境変数から構築する。署名資材3点は必須。
    pub fn from_env() -> anyhow::Result<Self> {
        let require = |name: &str| {
            std::env::var(name).map_err(|_| anyhow::anyhow!("{name}が未設定です"))
        };

        let pass_config = PassConfig {
            pass_type_identifier: std::env::var("HUSHH_PASS_TYPE_ID")
                .unwrap_or_else(|_| "pass.ai.hushh.wallet".to_string()),
            team_identifier: require("HUSHH_TEAM_ID")?,
            organization_name: std::env::var("HUSHH_ORG_NAME")
                .unwrap_or_else(|_| "Hushh.ai".to_string()),
            description: std::env::var("HUSHH_PASS_DESCRIPTION")
                .unwrap_or_else(|_| "Hushh Member Pass".to_string()),
            verify_base_url: std::env::var("HUSHH_VERIFY_BASE_URL")
                .unwrap_or_else(|_| "https://hushh.ai".to_string()),
            web_service_url: std::env::var("HUSHH_WEB_SERVICE_URL").ok(),
        };

        Ok(Self {
            bind_addr: std::env::var("HUSHH_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            pass_config,
            assets_dir: PathBuf::from(
                std::env::var("HUSHH_ASSETS_DIR").unwrap_or_else(|_| "./assets".to_string()),
            ),
            signer_cert_b64: require("HUSHH_SIGNER_CERT_B64")?,
            signer_key_b64: require("HUSHH_SIGNER_KEY_B64")?,
            wwdr_cert_b64: require("HUSHH_WWDR_CERT_B64")?,
        })
    }
}

/// Gatewayの共有状態。`Arc`で全ハンドラに配られる。
pub struct AppState {
    /// パス発行の固定設定
    pub pass_config: PassConfig,
    /// 検証済みの署名資材
    pub credentials: SigningCredentials,
    /// 読み込み済みテンプレートアセット
    pub template: PassTemplate,
    /// パスレコードストア
    pub store: Arc<dyn PassStore>,
}
