//! # テスト用共通ヘルパー
//!
//! 自己署名RSA証明書による署名資材と、最小のテンプレートアセットを提供する。

use std::time::Duration;

use rsa::pkcs8::EncodePublicKey;
use x509_cert::builder::{Builder, CertificateBuilder, Profile};
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::SubjectPublicKeyInfoOwned;
use x509_cert::time::Validity;

use crate::archive::ArchiveFile;
use crate::credentials::SigningCredentials;
use crate::template::PassTemplate;

/// テスト用の自己署名RSA証明書と鍵から署名資材を構築する。
/// WWDRの位置には別の自己署名証明書を使う（証明書SETは重複を許さないため）。
pub(crate) fn test_credentials() -> SigningCredentials {
    let mut rng = rand::rngs::OsRng;
    let signer_key = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let signing_key = rsa::pkcs1v15::SigningKey::<sha2::Sha256>::new(signer_key.clone());

    let public_key_der = signer_key.to_public_key().to_public_key_der().unwrap();
    let spki = SubjectPublicKeyInfoOwned::try_from(public_key_der.as_bytes()).unwrap();

    let subject: Name = "CN=Hushh Test Pass Signer,O=Hushh Test".parse().unwrap();
    let builder = CertificateBuilder::new(
        Profile::Root,
        SerialNumber::from(1u32),
        Validity::from_now(Duration::from_secs(3600)).unwrap(),
        subject,
        spki.clone(),
        &signing_key,
    )
    .unwrap();
    let certificate = builder.build::<rsa::pkcs1v15::Signature>().unwrap();

    let wwdr_subject: Name = "CN=Hushh Test WWDR,O=Hushh Test".parse().unwrap();
    let wwdr_builder = CertificateBuilder::new(
        Profile::Root,
        SerialNumber::from(2u32),
        Validity::from_now(Duration::from_secs(3600)).unwrap(),
        wwdr_subject,
        spki,
        &signing_key,
    )
    .unwrap();
    let wwdr_certificate = wwdr_builder.build::<rsa::pkcs1v15::Signature>().unwrap();

    SigningCredentials {
        signer_certificate: certificate,
        signer_key,
        wwdr_certificate,
    }
}

/// 最小のテンプレート（icon.pngのみ、中身はダミーバイト）を構築する。
pub(crate) fn test_template() -> PassTemplate {
    PassTemplate::from_assets(vec![ArchiveFile::new(
        "icon.png",
        vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
    )])
    .unwrap()
}
