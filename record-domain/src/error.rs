//! 记录层统一错误定义
//!
//! 脱离协作者（detached）不是错误，以 `Ok(false)` 表达；
//! 这里只收录序列化、类型校验与协作者（存储）失败。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecordError {
    // --- 序列化/通用表示 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("generic record must be an object, found {found}")]
    NotAnObject { found: String },
    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    // --- 类型标签 ---
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },
    #[error("unknown type tag: {tag}")]
    UnknownTypeTag { tag: String },

    // --- 不变量 ---
    #[error("invalid identity: {reason}")]
    InvalidIdentity { reason: String },

    // --- 协作者/存储 ---
    #[error("storage error: {reason}")]
    Storage { reason: String },
    #[error("collaborator error: {reason}")]
    Collaborator { reason: String },
}

/// 统一 Result 类型别名
pub type RecordResult<T> = Result<T, RecordError>;
