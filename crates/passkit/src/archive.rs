//! # ZIPアーカイブ構築
//!
//! `.pkpass` は単なるZIPアーカイブ。pass.json・manifest.json・signature・
//! 画像アセットを格納して1つのバッファにまとめる。

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::PasskitError;

/// アーカイブに格納するファイル1件。
#[derive(Debug, Clone)]
pub struct ArchiveFile {
    /// アーカイブ内のファイル名（例: "pass.json", "icon.png"）
    pub name: String,
    /// ファイル内容
    pub data: Vec<u8>,
}

impl ArchiveFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// ファイル一式から `.pkpass` バイナリを構築する。
pub fn build_pkpass(files: &[ArchiveFile]) -> Result<Vec<u8>, PasskitError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for file in files {
        writer
            .start_file(file.name.as_str(), options)
            .map_err(|e| PasskitError::Archive(format!("{} の書き込み開始に失敗: {e}", file.name)))?;
        writer
            .write_all(&file.data)
            .map_err(|e| PasskitError::Archive(format!("{} の書き込みに失敗: {e}", file.name)))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| PasskitError::Archive(format!("アーカイブの確定に失敗: {e}")))?;

    Ok(cursor.into_inner())
}
