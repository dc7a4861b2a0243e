//! 记录（Record）抽象
//!
//! 约束一个持久化变体必须提供：
//! - 所属集合名（`COLLECTION`），没有基础默认值，遗漏即编译失败；
//! - 类型标签（`TYPE_TAG`），通常为结构体名；
//! - 零参数构造与对 `BaseRecord` 的访问。
//!
//! 一般通过 `#[record(collection = "...")]` 宏实现本 trait。
//!
use crate::base_record::BaseRecord;
use serde::{Serialize, de::DeserializeOwned};

/// 基础类型使用的占位集合名，真实变体不得使用
pub const UNSET_COLLECTION: &str = "object";

/// 持久化记录接口
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// 逻辑集合/表名
    const COLLECTION: &'static str;
    /// 具体变体的类型标签
    const TYPE_TAG: &'static str;

    /// 以新标识、版本 0 创建记录，其余字段取默认值
    fn new() -> Self;

    fn base(&self) -> &BaseRecord;

    fn identity(&self) -> &str {
        self.base().identity()
    }

    fn version(&self) -> u64 {
        self.base().version()
    }

    fn type_tag(&self) -> &str {
        self.base().type_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Policy {
        #[serde(flatten)]
        base: BaseRecord,
        label: String,
    }

    impl Record for Policy {
        const COLLECTION: &'static str = "policies";
        const TYPE_TAG: &'static str = "Policy";

        fn new() -> Self {
            Self {
                base: BaseRecord::generate(Self::TYPE_TAG),
                label: String::new(),
            }
        }

        fn base(&self) -> &BaseRecord {
            &self.base
        }
    }

    #[test]
    fn new_record_carries_variant_tag() {
        let policy = Policy::new();
        assert_eq!(policy.type_tag(), "Policy");
        assert_eq!(policy.version(), 0);
        assert!(!policy.identity().is_empty());
        assert_ne!(Policy::COLLECTION, UNSET_COLLECTION);
    }

    #[test]
    fn two_records_never_share_identity() {
        assert_ne!(Policy::new().identity(), Policy::new().identity());
    }
}
