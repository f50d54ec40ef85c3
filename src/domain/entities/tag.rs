//! 태그 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 태그 엔티티
///
/// `tags` 컬렉션의 문서를 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 태그 이름 (unique)
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl Tag {
    /// 새 태그 레코드를 생성합니다. 생성/수정 시각은 동일한 값으로 설정됩니다.
    pub fn new(name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tag_stamps_equal_timestamps() {
        let tag = Tag::new("rust".to_string());

        assert!(tag.id.is_none());
        assert_eq!(tag.created_at, tag.updated_at);
    }
}
