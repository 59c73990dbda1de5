//! # パステンプレート
//!
//! パスに同梱する画像アセット（アイコン・ロゴ）の読み込み。
//! 起動時に1回だけディレクトリから読み込み、以降のリクエストで共有する。
//! icon.pngはWalletの表示要件上必須で、欠落は致命的エラー。

use std::path::Path;

use crate::archive::ArchiveFile;
use crate::PasskitError;

/// 必須アセット
const REQUIRED_ASSET: &str = "icon.png";
/// 任意アセット
const OPTIONAL_ASSETS: &[&str] = &["icon@2x.png", "logo.png", "logo@2x.png"];

/// 読み込み済みのテンプレートアセット一式。
#[derive(Debug)]
pub struct PassTemplate {
    assets: Vec<ArchiveFile>,
}

impl PassTemplate {
    /// ディレクトリからアセットを読み込む。icon.png欠落は即エラー。
    pub fn load_from_dir(dir: &Path) -> Result<Self, PasskitError> {
        let required = dir.join(REQUIRED_ASSET);
        let icon = std::fs::read(&required).map_err(|e| {
            PasskitError::Configuration(format!(
                "テンプレートアセット {} の読み込みに失敗: {e}",
                required.display()
            ))
        })?;

        let mut assets = vec![ArchiveFile::new(REQUIRED_ASSET, icon)];
        for name in OPTIONAL_ASSETS {
            let path = dir.join(name);
            if path.is_file() {
                let data = std::fs::read(&path).map_err(|e| {
                    PasskitError::Configuration(format!(
                        "テンプレートアセット {} の読み込みに失敗: {e}",
                        path.display()
                    ))
                })?;
                assets.push(ArchiveFile::new(*name, data));
            }
        }

        Self::from_assets(assets)
    }

    /// メモリ上のアセット一式から構築する。icon.pngを含まない場合はエラー。
    pub fn from_assets(assets: Vec<ArchiveFile>) -> Result<Self, PasskitError> {
        if !assets.iter().any(|a| a.name == REQUIRED_ASSET) {
            return Err(PasskitError::Configuration(format!(
                "テンプレートに必須アセット {REQUIRED_ASSET} が含まれていません"
            )));
        }
        Ok(Self { assets })
    }

    /// アーカイブに同梱するアセット一覧。
    pub fn assets(&self) -> &[ArchiveFile] {
        &self.assets
    }
}
