//! # マニフェスト構築
//!
//! `.pkpass` のmanifest.json: アーカイブ内の各ファイル（signature自身と
//! manifest.jsonを除く）について、ファイル名 → SHA-1ダイジェスト（小文字
//! 16進）のJSONオブジェクトを作る。ダイジェストアルゴリズムはフォーマット
//! 側の指定でSHA-1固定。

use std::collections::BTreeMap;

use sha1::{Digest, Sha1};

use crate::archive::ArchiveFile;
use crate::PasskitError;

/// ファイル一式からmanifest.jsonのバイト列を構築する。
///
/// キー順が安定するようBTreeMapでまとめる。
pub fn build_manifest(files: &[ArchiveFile]) -> Result<Vec<u8>, PasskitError> {
    let mut entries: BTreeMap<&str, String> = BTreeMap::new();
    for file in files {
        let digest = Sha1::digest(&file.data);
        entries.insert(file.name.as_str(), hex::encode(digest));
    }

    serde_json::to_vec(&entries)
        .map_err(|e| PasskitError::Internal(format!("manifest.jsonのシリアライズに失敗: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 既知入力のSHA-1ダイジェストが一致することを確認
    #[test]
    fn test_manifest_known_digest() {
        let files = vec![ArchiveFile::new("pass.json", b"abc".to_vec())];
        let manifest = build_manifest(&files).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&manifest).unwrap();
        // SHA-1("abc")
        assert_eq!(value["pass.json"], "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    /// 同一入力から同一マニフェストが得られることを確認（キー順の安定性）
    #[test]
    fn test_manifest_deterministic() {
        let files = vec![
            ArchiveFile::new("logo.png", vec![1, 2, 3]),
            ArchiveFile::new("icon.png", vec![4, 5, 6]),
            ArchiveFile::new("pass.json", b"{}".to_vec()),
        ];
        assert_eq!(build_manifest(&files).unwrap(), build_manifest(&files).unwrap());

        let value: serde_json::Value =
            serde_json::from_slice(&build_manifest(&files).unwrap()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 3);
    }
}
