//! # パスビルダー
//!
//! 発行リクエスト1件から署名済み `.pkpass` バイナリを構築する。
//! 永続化などの副作用は持たない一発処理で、途中で失敗した場合に
//! 部分的なバイナリを返すことはない。

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use hushh_types::{Barcode, PassDefinition, PassField, PassStructure};

use crate::archive::{build_pkpass, ArchiveFile};
use crate::credentials::SigningCredentials;
use crate::identifiers::{new_authentication_token, new_qr_token, new_serial_number};
use crate::manifest::build_manifest;
use crate::signer::sign_manifest;
use crate::template::PassTemplate;
use crate::PasskitError;

/// パス発行に使う固定設定。プロセス起動時に1回解決される。
#[derive(Debug, Clone)]
pub struct PassConfig {
    /// パスタイプ識別子（例: "pass.ai.hushh.wallet"）
    pub pass_type_identifier: String,
    /// Apple Developerチーム識別子
    pub team_identifier: String,
    /// 発行組織名
    pub organization_name: String,
    /// パスの説明文
    pub description: String,
    /// 検証URLのベース（例: "https://hushh.ai"）
    pub verify_base_url: String,
    /// Wallet更新用WebサービスURL（Optional）
    pub web_service_url: Option<String>,
}

/// パス発行リクエスト1件。
#[derive(Debug, Clone)]
pub struct PassRequest {
    /// 氏名（呼び出し側で非空検証済み）
    pub full_name: String,
    /// ハンドル（Optional）
    pub handle: Option<String>,
    /// 外部ユーザー参照ID（Optional）。パスには表示せず、レコードにのみ残る
    pub uid: Option<String>,
}

/// 構築結果。
pub struct BuiltPass {
    /// 署名済み `.pkpass` バイナリ
    pub pass_buffer: Vec<u8>,
    /// シリアル番号
    pub serial_number: String,
    /// Wallet更新用認証トークン
    pub authentication_token: String,
    /// QRコード埋め込みトークン
    pub qr_token: String,
    /// QRコードに埋め込んだ検証URL
    pub verify_url: String,
    /// 発行日時（UNIX秒）
    pub issued_at: i64,
}

/// 署名済みパスを構築する。
pub fn build_pass(
    credentials: &SigningCredentials,
    template: &PassTemplate,
    config: &PassConfig,
    request: &PassRequest,
) -> Result<BuiltPass, PasskitError> {
    // Step 1. 識別子の新規生成
    let serial_number = new_serial_number();
    let authentication_token = new_authentication_token();
    let qr_token = new_qr_token();

    let issued = OffsetDateTime::now_utc();
    let issued_rfc3339 = issued
        .format(&Rfc3339)
        .map_err(|e| PasskitError::Internal(format!("発行日時のフォーマットに失敗: {e}")))?;

    // Step 2. 検証URL（QRペイロード）
    let verify_url = format!(
        "{}/api/wallet/verify?token={}",
        config.verify_base_url.trim_end_matches('/'),
        qr_token
    );

    // Step 3. pass.json組み立て
    let pass = assemble_pass_definition(
        config,
        request,
        &serial_number,
        &authentication_token,
        &verify_url,
        &issued_rfc3339,
    );
    let pass_json = serde_json::to_vec(&pass)
        .map_err(|e| PasskitError::Internal(format!("pass.jsonのシリアライズに失敗: {e}")))?;

    // Step 4. マニフェスト対象 = pass.json + テンプレートアセット
    let mut files = vec![ArchiveFile::new("pass.json", pass_json)];
    files.extend(template.assets().iter().cloned());

    let manifest = build_manifest(&files)?;

    // Step 5. マニフェストへのCMS署名
    let signature = sign_manifest(credentials, &manifest)?;

    // Step 6. ZIPアーカイブ確定
    files.push(ArchiveFile::new("manifest.json", manifest));
    files.push(ArchiveFile::new("signature", signature));
    let pass_buffer = build_pkpass(&files)?;

    Ok(BuiltPass {
        pass_buffer,
        serial_number,
        authentication_token,
        qr_token,
        verify_url,
        issued_at: issued.unix_timestamp(),
    })
}

/// 表示フィールドを含むpass.json本体を組み立てる。
fn assemble_pass_definition(
    config: &PassConfig,
    request: &PassRequest,
    serial_number: &str,
    authentication_token: &str,
    verify_url: &str,
    issued_rfc3339: &str,
) -> PassDefinition {
    let mut auxiliary_fields = Vec::new();
    if let Some(handle) = &request.handle {
        let handle = handle.trim().trim_start_matches('@');
        if !handle.is_empty() {
            auxiliary_fields.push(PassField::text("handle", "Handle", format!("@{handle}")));
        }
    }
    auxiliary_fields.push(PassField::text("membership", "Membership", "Hushh Member"));
    auxiliary_fields.push(PassField::date("issued", "Issued", issued_rfc3339));

    let back_fields = vec![
        PassField::text(
            "privacy",
            "Privacy",
            "Your data stays yours. This pass carries only the details shown here \
             and is used solely to verify your Hushh membership.",
        ),
        PassField::text("support", "Support", "support@hushh.ai"),
        PassField::text("website", "Website", config.verify_base_url.clone()),
    ];

    PassDefinition {
        format_version: 1,
        pass_type_identifier: config.pass_type_identifier.clone(),
        serial_number: serial_number.to_string(),
        team_identifier: config.team_identifier.clone(),
        organization_name: config.organization_name.clone(),
        description: config.description.clone(),
        logo_text: Some(config.organization_name.clone()),
        foreground_color: Some("rgb(255, 255, 255)".to_string()),
        background_color: Some("rgb(18, 18, 18)".to_string()),
        label_color: Some("rgb(160, 160, 160)".to_string()),
        web_service_url: config.web_service_url.clone(),
        authentication_token: config
            .web_service_url
            .is_some()
            .then(|| authentication_token.to_string()),
        barcodes: vec![Barcode {
            format: "PKBarcodeFormatQR".to_string(),
            message: verify_url.to_string(),
            message_encoding: "iso-8859-1".to_string(),
            alt_text: Some(serial_number.to_string()),
        }],
        generic: PassStructure {
            primary_fields: vec![PassField::text("name", "Name", request.full_name.clone())],
            auxiliary_fields,
            back_fields,
            ..Default::default()
        },
    }
}
