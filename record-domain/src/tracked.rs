//! 记录与协作者的绑定（Tracked）
//!
//! `Tracked<R>` 持有记录本身、编解码器，以及指向协作者的非拥有引用（`Weak`）。
//! 两种状态：
//! - Detached：没有引用，或协作者已被释放；`refresh`/`update` 返回 `false` 且无副作用；
//! - Attached：`refresh` 拉取最新状态，`update` 先写入再拉取。
//!
use crate::{
    codec::{JsonCodec, RecordCodec},
    collaborator::PersistenceCollaborator,
    error::RecordResult,
    generic_record::GenericRecord,
    record::Record,
};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// `refresh` 的三态结果；`refresh` 本身只返回其布尔投影
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// 未绑定协作者（或协作者已释放），未做任何事
    Detached,
    /// 协作者中不存在该标识，记录保持不变
    NotFound,
    /// 已用协作者返回的状态覆盖本地字段
    Refreshed,
}

impl RefreshOutcome {
    pub fn succeeded(self) -> bool {
        !matches!(self, RefreshOutcome::Detached)
    }
}

pub struct Tracked<R: Record> {
    record: R,
    collaborator: Option<Weak<dyn PersistenceCollaborator>>,
    codec: Arc<dyn RecordCodec<R>>,
}

impl<R: Record> Tracked<R> {
    /// 以默认 JSON 编解码器包装，初始为 Detached
    pub fn new(record: R) -> Self {
        Self::with_codec(record, Arc::new(JsonCodec))
    }

    pub fn with_codec(record: R, codec: Arc<dyn RecordCodec<R>>) -> Self {
        Self {
            record,
            collaborator: None,
            codec,
        }
    }

    /// 包装并立即绑定协作者
    pub fn attached<C>(record: R, collaborator: &Arc<C>) -> Self
    where
        C: PersistenceCollaborator + 'static,
    {
        let mut tracked = Self::new(record);
        tracked.attach(collaborator);
        tracked
    }

    /// 绑定具体类型的协作者；记录不持有其生命周期
    pub fn attach<C>(&mut self, collaborator: &Arc<C>)
    where
        C: PersistenceCollaborator + 'static,
    {
        let shared: Arc<dyn PersistenceCollaborator> = collaborator.clone();
        self.attach_to(&shared);
    }

    /// 绑定类型擦除的协作者，直接对调用方持有的 `Arc` 取弱引用
    pub fn attach_to(&mut self, collaborator: &Arc<dyn PersistenceCollaborator>) {
        self.collaborator = Some(Arc::downgrade(collaborator));
    }

    pub fn is_attached(&self) -> bool {
        self.collaborator().is_some()
    }

    /// 从协作者按标识加载（默认 JSON 编解码器），找到时返回已绑定的记录
    pub async fn load<C>(collaborator: &Arc<C>, identity: &str) -> RecordResult<Option<Self>>
    where
        C: PersistenceCollaborator + 'static,
    {
        let shared: Arc<dyn PersistenceCollaborator> = collaborator.clone();
        Self::load_with_codec(&shared, identity, Arc::new(JsonCodec)).await
    }

    /// 以指定编解码器加载；返回的记录后续 refresh/update 继续使用该编解码器
    pub async fn load_with_codec(
        collaborator: &Arc<dyn PersistenceCollaborator>,
        identity: &str,
        codec: Arc<dyn RecordCodec<R>>,
    ) -> RecordResult<Option<Self>> {
        debug!(identity, collection = R::COLLECTION, "loading record");
        let query = GenericRecord::identity_query(identity);
        let Some(generic) = collaborator.fetch_by_identity(&query, R::COLLECTION).await? else {
            return Ok(None);
        };

        let mut record = R::new();
        codec.deserialize(&mut record, generic)?;
        let mut tracked = Self::with_codec(record, codec);
        tracked.attach_to(collaborator);
        Ok(Some(tracked))
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn into_inner(self) -> R {
        self.record
    }

    /// 用协作者中的状态刷新本地记录；Detached 时返回 `false`
    ///
    /// 未找到同样返回 `true`，需要区分时使用 [`Tracked::refresh_outcome`]。
    pub async fn refresh(&mut self) -> RecordResult<bool> {
        Ok(self.refresh_outcome().await?.succeeded())
    }

    pub async fn refresh_outcome(&mut self) -> RecordResult<RefreshOutcome> {
        debug!(
            identity = self.record.identity(),
            collection = R::COLLECTION,
            "refreshing record from collaborator"
        );
        let Some(collaborator) = self.collaborator() else {
            return Ok(RefreshOutcome::Detached);
        };

        let query = self.codec.serialize(&self.record)?;
        match collaborator.fetch_by_identity(&query, R::COLLECTION).await? {
            Some(generic) => {
                self.codec.deserialize(&mut self.record, generic)?;
                Ok(RefreshOutcome::Refreshed)
            }
            None => {
                trace!(identity = self.record.identity(), "record not found, keeping local state");
                Ok(RefreshOutcome::NotFound)
            }
        }
    }

    /// 写入当前状态后再刷新，以取回协作者分配的字段（如版本）
    ///
    /// 两次往返：一次 upsert，随后一次 fetch。Detached 时返回 `false` 且不调用协作者。
    pub async fn update(&mut self) -> RecordResult<bool> {
        debug!(
            identity = self.record.identity(),
            collection = R::COLLECTION,
            "updating record through collaborator"
        );
        let Some(collaborator) = self.collaborator() else {
            return Ok(false);
        };

        let generic = self.codec.serialize(&self.record)?;
        collaborator.upsert(generic, R::COLLECTION).await?;
        self.refresh().await?;
        Ok(true)
    }

    fn collaborator(&self) -> Option<Arc<dyn PersistenceCollaborator>> {
        self.collaborator.as_ref().and_then(Weak::upgrade)
    }
}

impl<R: Record> Default for Tracked<R> {
    fn default() -> Self {
        Self::new(R::new())
    }
}

impl<R: Record> Deref for Tracked<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.record
    }
}

impl<R: Record> DerefMut for Tracked<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.record
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for Tracked<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("record", &self.record)
            .field("attached", &self.is_attached())
            .finish()
    }
}
