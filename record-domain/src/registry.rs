//! 类型标签注册表
//!
//! 以显式注册的“类型标签 → 解码函数”映射，把通用表示还原为封闭枚举 `V` 的某个变体，
//! 在协作者边界完成多态重建。
//!
//! 解码函数固定使用 `JsonCodec`，即假定存储中的表示是默认 JSON 形状；
//! 使用自定义编解码器的变体应通过 `Tracked::load_with_codec` 加载。
//!
use crate::{
    codec::JsonCodec,
    collaborator::PersistenceCollaborator,
    error::{RecordError, RecordResult},
    generic_record::{GenericRecord, TYPE_TAG_KEY},
    record::Record,
};
use std::collections::HashMap;

type DecodeFn<V> = fn(GenericRecord) -> RecordResult<V>;

pub struct RecordRegistry<V> {
    decoders: HashMap<&'static str, DecodeFn<V>>,
}

impl<V> Default for RecordRegistry<V> {
    fn default() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }
}

impl<V> RecordRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个变体（按 `JsonCodec` 解码）；重复注册同一标签时后者覆盖前者
    pub fn register<R>(mut self) -> Self
    where
        R: Record,
        V: From<R>,
    {
        self.decoders.insert(R::TYPE_TAG, decode_as::<R, V>);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decoders.keys().copied()
    }

    /// 按通用表示中的类型标签选择解码函数
    pub fn decode(&self, generic: GenericRecord) -> RecordResult<V> {
        let tag = generic.type_tag().ok_or(RecordError::MissingField {
            field: TYPE_TAG_KEY,
        })?;
        let decode = self
            .decoders
            .get(tag)
            .ok_or_else(|| RecordError::UnknownTypeTag {
                tag: tag.to_string(),
            })?;
        decode(generic)
    }

    /// 从协作者按标识取出并还原为具体变体
    pub async fn fetch<C>(
        &self,
        collaborator: &C,
        collection: &str,
        identity: &str,
    ) -> RecordResult<Option<V>>
    where
        C: PersistenceCollaborator + ?Sized,
    {
        let query = GenericRecord::identity_query(identity);
        match collaborator.fetch_by_identity(&query, collection).await? {
            Some(generic) => self.decode(generic).map(Some),
            None => Ok(None),
        }
    }
}

fn decode_as<R, V>(generic: GenericRecord) -> RecordResult<V>
where
    R: Record,
    V: From<R>,
{
    JsonCodec::decode::<R>(generic).map(V::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_record::BaseRecord;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Tag {
        #[serde(flatten)]
        base: BaseRecord,
        rule: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Image {
        #[serde(flatten)]
        base: BaseRecord,
        path: String,
    }

    impl Record for Tag {
        const COLLECTION: &'static str = "tags";
        const TYPE_TAG: &'static str = "Tag";

        fn new() -> Self {
            Self {
                base: BaseRecord::generate(Self::TYPE_TAG),
                rule: String::new(),
            }
        }

        fn base(&self) -> &BaseRecord {
            &self.base
        }
    }

    impl Record for Image {
        const COLLECTION: &'static str = "images";
        const TYPE_TAG: &'static str = "Image";

        fn new() -> Self {
            Self {
                base: BaseRecord::generate(Self::TYPE_TAG),
                path: String::new(),
            }
        }

        fn base(&self) -> &BaseRecord {
            &self.base
        }
    }

    #[derive(Debug, PartialEq)]
    enum Stored {
        Tag(Tag),
        Image(Image),
    }

    impl From<Tag> for Stored {
        fn from(t: Tag) -> Self {
            Stored::Tag(t)
        }
    }

    impl From<Image> for Stored {
        fn from(i: Image) -> Self {
            Stored::Image(i)
        }
    }

    fn registry() -> RecordRegistry<Stored> {
        RecordRegistry::new().register::<Tag>().register::<Image>()
    }

    #[test]
    fn decodes_registered_variant() {
        let mut image = Image::new();
        image.path = "/srv/esxi.iso".into();
        let generic = JsonCodec::encode(&image).unwrap();

        let decoded = registry().decode(generic).unwrap();
        assert_eq!(decoded, Stored::Image(image));
    }

    #[test]
    fn rejects_unknown_tag() {
        let generic = GenericRecord::try_from(json!({
            "identity": "p-1",
            "version": 0,
            "type_tag": "Policy"
        }))
        .unwrap();
        match registry().decode(generic) {
            Err(RecordError::UnknownTypeTag { tag }) => assert_eq!(tag, "Policy"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_untagged_record() {
        let generic = GenericRecord::identity_query("p-1");
        assert!(matches!(
            registry().decode(generic),
            Err(RecordError::MissingField { field: "type_tag" })
        ));
    }

    #[test]
    fn lists_registered_tags() {
        let registry = registry();
        let mut tags: Vec<_> = registry.tags().collect();
        tags.sort();
        assert_eq!(tags, vec!["Image", "Tag"]);
        assert!(registry.contains("Tag"));
        assert!(!registry.contains("Node"));
    }
}
