//! # インメモリ パスストア
//!
//! シリアル番号をキーとする主マップと、QRトークン → シリアル番号の
//! 副インデックスを持つ。トークン照合はO(1)。検証ログは追記専用のVec。

use std::collections::HashMap;

use tokio::sync::RwLock;

use hushh_types::{PassRecord, PassStatus, VerificationEvent};

use crate::error::GatewayError;
use crate::store::PassStore;

#[derive(Default)]
struct Inner {
    by_serial: HashMap<String, PassRecord>,
    token_index: HashMap<String, String>,
    verifications: Vec<VerificationEvent>,
}

/// インメモリ実装。プロセス再起動で消える。
#[derive(Default)]
pub struct MemoryPassStore {
    inner: RwLock<Inner>,
}

impl MemoryPassStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みレコード数。
    pub async fn pass_count(&self) -> usize {
        self.inner.read().await.by_serial.len()
    }

    /// 記録済み検証イベント数。
    pub async fn verification_count(&self) -> usize {
        self.inner.read().await.verifications.len()
    }
}

#[async_trait::async_trait]
impl PassStore for MemoryPassStore {
    async fn save(&self, record: PassRecord) -> Result<(), GatewayError> {
        let mut inner = self.inner.write().await;
        inner
            .token_index
            .insert(record.qr_token.clone(), record.serial_number.clone());
        inner.by_serial.insert(record.serial_number.clone(), record);
        Ok(())
    }

    async fn find_by_serial(&self, serial: &str) -> Result<Option<PassRecord>, GatewayError> {
        Ok(self.inner.read().await.by_serial.get(serial).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<PassRecord>, GatewayError> {
        let inner = self.inner.read().await;
        let Some(serial) = inner.token_index.get(token) else {
            return Ok(None);
        };
        Ok(inner.by_serial.get(serial).cloned())
    }

    async fn revoke(&self, serial: &str) -> Result<bool, GatewayError> {
        let mut inner = self.inner.write().await;
        match inner.by_serial.get_mut(serial) {
            Some(record) => {
                record.status = PassStatus::Revoked;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_verification(&self, event: VerificationEvent) -> Result<(), GatewayError> {
        self.inner.write().await.verifications.push(event);
        Ok(())
    }
}
