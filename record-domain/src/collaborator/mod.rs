//! 持久化协作者（collaborator）
//!
//! 记录只依赖两个操作：按标识查找与按标识写入（upsert）。
//! 具体存储后端由上层实现并注入；`in-memory` 特性提供一个基于 HashMap 的实现。
//!
use crate::{error::RecordResult, generic_record::GenericRecord};
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(feature = "in-memory")]
mod in_memory;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryCollaborator;

#[async_trait]
pub trait PersistenceCollaborator: Send + Sync {
    /// 按 `query` 中携带的标识在 `collection` 内查找，未找到返回 `None`
    async fn fetch_by_identity(
        &self,
        query: &GenericRecord,
        collection: &str,
    ) -> RecordResult<Option<GenericRecord>>;

    /// 以标识为键创建或覆盖；成功时由协作者递增版本
    async fn upsert(&self, record: GenericRecord, collection: &str) -> RecordResult<()>;
}

#[async_trait]
impl<T> PersistenceCollaborator for Arc<T>
where
    T: PersistenceCollaborator + ?Sized,
{
    async fn fetch_by_identity(
        &self,
        query: &GenericRecord,
        collection: &str,
    ) -> RecordResult<Option<GenericRecord>> {
        (**self).fetch_by_identity(query, collection).await
    }

    async fn upsert(&self, record: GenericRecord, collection: &str) -> RecordResult<()> {
        (**self).upsert(record, collection).await
    }
}
