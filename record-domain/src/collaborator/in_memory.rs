//! InMemoryCollaborator - 基于 HashMap 的协作者，用于测试与原型。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::trace;

use super::PersistenceCollaborator;
use crate::error::{RecordError, RecordResult};
use crate::generic_record::GenericRecord;

/// 存储键为 `"collection:identity"`；克隆后共享同一份存储。
#[derive(Clone, Default)]
pub struct InMemoryCollaborator {
    storage: Arc<RwLock<HashMap<String, GenericRecord>>>,
}

impl InMemoryCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(collection: &str, identity: &str) -> String {
        format!("{}:{}", collection, identity)
    }

    fn poisoned() -> RecordError {
        RecordError::Storage {
            reason: "lock poisoned".into(),
        }
    }

    /// 当前存储的记录数（跨集合）
    pub fn len(&self) -> RecordResult<usize> {
        Ok(self.storage.read().map_err(|_| Self::poisoned())?.len())
    }

    pub fn is_empty(&self) -> RecordResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn contains(&self, collection: &str, identity: &str) -> RecordResult<bool> {
        let storage = self.storage.read().map_err(|_| Self::poisoned())?;
        Ok(storage.contains_key(&Self::make_key(collection, identity)))
    }
}

#[async_trait]
impl PersistenceCollaborator for InMemoryCollaborator {
    async fn fetch_by_identity(
        &self,
        query: &GenericRecord,
        collection: &str,
    ) -> RecordResult<Option<GenericRecord>> {
        let key = Self::make_key(collection, query.require_identity()?);
        let storage = self.storage.read().map_err(|_| Self::poisoned())?;
        Ok(storage.get(&key).cloned())
    }

    async fn upsert(&self, mut record: GenericRecord, collection: &str) -> RecordResult<()> {
        let key = Self::make_key(collection, record.require_identity()?);
        let mut storage = self.storage.write().map_err(|_| Self::poisoned())?;

        let current = storage
            .get(&key)
            .and_then(GenericRecord::version)
            .or_else(|| record.version())
            .unwrap_or(0);
        let new_version = current.checked_add(1).ok_or_else(|| RecordError::Storage {
            reason: format!("version overflow for {}", key),
        })?;
        record.set_version(new_version);
        trace!(key = %key, version = new_version, "upsert");

        storage.insert(key, record);
        Ok(())
    }
}
