//! 태그 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::format_datetime;
use crate::domain::entities::tag::Tag;

/// 태그 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: tag.name,
            created_at: format_datetime(tag.created_at),
            updated_at: format_datetime(tag.updated_at),
        }
    }
}

/// 태그 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListTagResponse {
    pub tags: Vec<TagResponse>,
}

/// 태그 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 50, message = "태그 이름은 1-50자 사이여야 합니다"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_tag_response_from_entity() {
        let mut tag = Tag::new("rust".to_string());
        let id = ObjectId::new();
        tag.id = Some(id);

        let response = TagResponse::from(tag);

        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.name, "rust");
        assert_eq!(response.created_at, response.updated_at);
    }
}
