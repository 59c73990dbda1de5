//! # Hushh Wallet パス構築コア
//!
//! `.pkpass` アーカイブの構築パイプラインを実装する。
//!
//! ## パイプライン
//! | 段階 | モジュール |
//! |------|-----------|
//! | 識別子生成（シリアル番号・トークン） | `identifiers` |
//! | 署名資材のデコード・検証 | `credentials` |
//! | テンプレート画像アセットの読み込み | `template` |
//! | pass.json組み立て + 全段統合 | `builder` |
//! | SHA-1マニフェスト | `manifest` |
//! | CMS(PKCS#7)デタッチド署名 | `signer` |
//! | ZIPアーカイブ | `archive` |

pub mod archive;
pub mod builder;
pub mod credentials;
pub mod identifiers;
pub mod manifest;
pub mod signer;
pub mod template;

#[cfg(test)]
pub(crate) mod testutil;

pub use archive::ArchiveFile;
pub use builder::{build_pass, BuiltPass, PassConfig, PassRequest};
pub use credentials::SigningCredentials;
pub use template::PassTemplate;

/// パス構築のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum PasskitError {
    /// 署名資材・テンプレートの不備（致命的、リトライ不可）
    #[error("設定が不正です: {0}")]
    Configuration(String),
    /// CMS署名の構築に失敗
    #[error("署名処理に失敗: {0}")]
    Signing(String),
    /// ZIPアーカイブの構築に失敗
    #[error("アーカイブ構築に失敗: {0}")]
    Archive(String),
    /// JSONシリアライズ等の内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}
