//! # CMS署名
//!
//! manifest.jsonに対するデタッチドCMS(PKCS#7) SignedDataを構築する。
//!
//! ## 構成
//! - ダイジェスト: SHA-256（署名属性messageDigestに外部ダイジェストを渡す）
//! - 署名: RSA PKCS#1 v1.5
//! - 証明書: パスタイプ証明書 + Apple WWDR中間証明書を同梱
//! - コンテンツ: デタッチド（econtentなし）

use cms::builder::{SignedDataBuilder, SignerInfoBuilder};
use cms::cert::{CertificateChoices, IssuerAndSerialNumber};
use cms::signed_data::{EncapsulatedContentInfo, SignerIdentifier};
use const_oid::db::rfc5911::ID_DATA;
use const_oid::db::rfc5912::ID_SHA_256;
use der::Encode;
use rsa::pkcs1v15::SigningKey;
use sha2::{Digest, Sha256};
use x509_cert::spki::AlgorithmIdentifierOwned;

use crate::credentials::SigningCredentials;
use crate::PasskitError;

/// manifest.jsonのバイト列に署名し、DERエンコードされたSignedDataを返す。
/// 出力がアーカイブ内の `signature` ファイルになる。
pub fn sign_manifest(
    credentials: &SigningCredentials,
    manifest: &[u8],
) -> Result<Vec<u8>, PasskitError> {
    let signing_key = SigningKey::<Sha256>::new(credentials.signer_key.clone());

    // デタッチド署名: econtentは持たず、外部ダイジェストのみ渡す
    let digest = Sha256::digest(manifest);
    let encap = EncapsulatedContentInfo {
        econtent_type: ID_DATA,
        econtent: None,
    };

    let digest_algorithm = AlgorithmIdentifierOwned {
        oid: ID_SHA_256,
        parameters: None,
    };

    let sid = SignerIdentifier::IssuerAndSerialNumber(IssuerAndSerialNumber {
        issuer: credentials.signer_certificate.tbs_certificate.issuer.clone(),
        serial_number: credentials
            .signer_certificate
            .tbs_certificate
            .serial_number
            .clone(),
    });

    let signer_info = SignerInfoBuilder::new(
        &signing_key,
        sid,
        digest_algorithm.clone(),
        &encap,
        Some(digest.as_slice()),
    )
    .map_err(|e| PasskitError::Signing(format!("SignerInfoの構築に失敗: {e}")))?;

    let mut builder = SignedDataBuilder::new(&encap);
    builder
        .add_digest_algorithm(digest_algorithm)
        .map_err(|e| PasskitError::Signing(format!("ダイジェストアルゴリズムの追加に失敗: {e}")))?;
    builder
        .add_certificate(CertificateChoices::Certificate(
            credentials.signer_certificate.clone(),
        ))
        .map_err(|e| PasskitError::Signing(format!("署名証明書の追加に失敗: {e}")))?;
    builder
        .add_certificate(CertificateChoices::Certificate(
            credentials.wwdr_certificate.clone(),
        ))
        .map_err(|e| PasskitError::Signing(format!("WWDR証明書の追加に失敗: {e}")))?;
    builder
        .add_signer_info::<SigningKey<Sha256>, rsa::pkcs1v15::Signature>(signer_info)
        .map_err(|e| PasskitError::Signing(format!("署名の生成に失敗: {e}")))?;

    let content_info = builder
        .build()
        .map_err(|e| PasskitError::Signing(format!("SignedDataの構築に失敗: {e}")))?;

    content_info
        .to_der()
        .map_err(|e| PasskitError::Signing(format!("SignedDataのDERエンコードに失敗: {e}")))
}
