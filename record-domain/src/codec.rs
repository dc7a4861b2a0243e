//! 序列化能力（记录 ↔ 通用表示）
//!
//! `Tracked` 以显式字段持有编解码器，便于在测试中替换。
//!
use crate::{
    error::{RecordError, RecordResult},
    generic_record::GenericRecord,
    record::Record,
};

/// 记录编解码器
pub trait RecordCodec<R: Record>: Send + Sync {
    /// 将记录全部持久化字段导出为通用表示（携带类型标签）
    fn serialize(&self, record: &R) -> RecordResult<GenericRecord>;

    /// 用通用表示原地覆盖记录字段
    fn deserialize(&self, record: &mut R, generic: GenericRecord) -> RecordResult<()>;
}

/// 基于 serde_json 的默认编解码器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// 解码为一个新的记录实例，并校验类型标签与标识
    pub fn decode<R: Record>(generic: GenericRecord) -> RecordResult<R> {
        match generic.type_tag() {
            Some(tag) if tag == R::TYPE_TAG => {}
            Some(tag) => {
                return Err(RecordError::TypeMismatch {
                    expected: R::TYPE_TAG.to_string(),
                    found: tag.to_string(),
                });
            }
            None => {
                return Err(RecordError::MissingField {
                    field: crate::generic_record::TYPE_TAG_KEY,
                });
            }
        }
        generic.require_identity()?;

        let record = serde_json::from_value(generic.into_value())?;
        Ok(record)
    }

    pub fn encode<R: Record>(record: &R) -> RecordResult<GenericRecord> {
        GenericRecord::try_from(serde_json::to_value(record)?)
    }
}

impl<R: Record> RecordCodec<R> for JsonCodec {
    fn serialize(&self, record: &R) -> RecordResult<GenericRecord> {
        Self::encode(record)
    }

    fn deserialize(&self, record: &mut R, generic: GenericRecord) -> RecordResult<()> {
        *record = Self::decode(generic)?;
        Ok(())
    }
}
