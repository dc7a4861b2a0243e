//! 记录基础字段（BaseRecord）
//!
//! 每个持久化实体通过组合（而非继承）持有一个 `BaseRecord`：
//! - `identity`：构造时生成的不透明唯一标识，永不为空；
//! - `version`：从 0 开始，仅由协作者在写入后递增，记录本身从不自增；
//! - `type_tag`：具体变体的类型标签，用于从通用表示还原。
//!
use crate::error::{RecordError, RecordResult};
use bon::bon;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// 所有持久化记录共享的标识、版本与类型标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRecord {
    identity: String,
    version: u64,
    type_tag: String,
}

#[bon]
impl BaseRecord {
    /// 由已知字段重建（协作者与测试使用），空标识报错：
    /// `BaseRecord::builder().identity(..).type_tag(..).build()?`
    #[builder]
    pub fn new(
        #[builder(into)] identity: String,
        #[builder(default)] version: u64,
        #[builder(into)] type_tag: String,
    ) -> RecordResult<Self> {
        if identity.is_empty() {
            return Err(RecordError::InvalidIdentity {
                reason: "identity is empty".into(),
            });
        }
        Ok(Self {
            identity,
            version,
            type_tag,
        })
    }
}

impl BaseRecord {
    /// 以新生成的标识创建，版本为 0
    pub fn generate(type_tag: impl Into<String>) -> Self {
        Self {
            identity: generate_identity(),
            version: 0,
            type_tag: type_tag.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }
}

/// 生成紧凑格式（32 位十六进制，无连字符）的 UUID v4 标识
pub fn generate_identity() -> String {
    debug!("generate record identity");
    Uuid::new_v4().simple().to_string()
}
