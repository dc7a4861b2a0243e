//! 持久化记录基础库（record-domain）
//!
//! 为每个持久化领域实体提供统一的基础形态与行为：
//! - 标识、版本与类型标签（`base_record`、`record`）；
//! - 记录与通用键值表示之间的编解码（`generic_record`、`codec`）；
//! - 面向抽象持久化协作者的加载/保存协议（`collaborator`、`tracked`）；
//! - 基于类型标签的显式注册表，用于多态重建（`registry`）。
//!
//! 本 crate 不包含具体存储后端，仅定义记录层调用的接口；
//! `in-memory` 特性提供一个 HashMap 实现以便测试与原型。
//!
//! 典型用法：
//! 1. 用 `#[record(collection = "...")]` 定义变体；
//! 2. 用 `Tracked::attached` 或 `Tracked::load` 绑定协作者；
//! 3. 本地修改后调用 `update`，或调用 `refresh` 拉取最新状态。
//!
pub mod base_record;
pub mod codec;
pub mod collaborator;
pub mod error;
pub mod generic_record;
pub mod record;
pub mod registry;
pub mod tracked;

pub use base_record::BaseRecord;
pub use codec::{JsonCodec, RecordCodec};
pub use collaborator::PersistenceCollaborator;
pub use error::{RecordError, RecordResult};
pub use generic_record::GenericRecord;
pub use record::{Record, UNSET_COLLECTION};
pub use registry::RecordRegistry;
pub use tracked::{RefreshOutcome, Tracked};

#[cfg(feature = "in-memory")]
pub use collaborator::InMemoryCollaborator;

// 允许在本 crate 内部通过 ::record_domain 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::record_domain 路径。
extern crate self as record_domain;
