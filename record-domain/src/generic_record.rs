//! 通用记录表示（GenericRecord）
//!
//! 跨越序列化边界传递实体状态的无类型映射（字段名 → JSON 值），
//! 具体形状由各变体的序列化/反序列化决定。
//!
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const IDENTITY_KEY: &str = "identity";
pub const VERSION_KEY: &str = "version";
pub const TYPE_TAG_KEY: &str = "type_tag";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenericRecord(Map<String, Value>);

impl GenericRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// 仅包含标识的查询表示
    pub fn identity_query(identity: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(IDENTITY_KEY.to_string(), Value::String(identity.into()));
        Self(fields)
    }

    pub fn identity(&self) -> Option<&str> {
        self.0.get(IDENTITY_KEY).and_then(Value::as_str)
    }

    /// 取标识，缺失或为空时报错
    pub fn require_identity(&self) -> RecordResult<&str> {
        match self.identity() {
            Some(id) if !id.is_empty() => Ok(id),
            Some(_) => Err(RecordError::InvalidIdentity {
                reason: "identity is empty".into(),
            }),
            None => Err(RecordError::MissingField {
                field: IDENTITY_KEY,
            }),
        }
    }

    pub fn version(&self) -> Option<u64> {
        self.0.get(VERSION_KEY).and_then(Value::as_u64)
    }

    pub fn set_version(&mut self, version: u64) {
        self.0.insert(VERSION_KEY.to_string(), Value::from(version));
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.0.get(TYPE_TAG_KEY).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for GenericRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for GenericRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> RecordResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(RecordError::NotAnObject {
                found: kind_of(&other).to_string(),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
