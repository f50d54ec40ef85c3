//! 게시글 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 게시글 엔티티
///
/// `posts` 컬렉션의 문서를 표현합니다. 슬러그는 제목에서 파생되어
/// 컬렉션 내에서 유일하며, 태그는 `tag_ids` 배열과 `post_tags`
/// 조인 컬렉션 양쪽에 기록됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 제목
    pub title: String,
    /// 본문
    pub body: String,
    /// URL 슬러그 (unique)
    pub slug: String,
    /// 발행 여부
    pub is_published: bool,
    /// 작성자 ID
    pub user_id: ObjectId,
    /// 연결된 태그 ID 목록
    #[serde(default)]
    pub tag_ids: Vec<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl Post {
    /// 새 게시글 레코드를 생성합니다. 생성/수정 시각은 동일한 값으로 설정됩니다.
    pub fn new(
        title: String,
        body: String,
        slug: String,
        is_published: bool,
        user_id: ObjectId,
        tag_ids: Vec<ObjectId>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            body,
            slug,
            is_published,
            user_id,
            tag_ids,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_stamps_equal_timestamps() {
        let post = Post::new(
            "첫 글".to_string(),
            "본문".to_string(),
            "first-post".to_string(),
            true,
            ObjectId::new(),
            vec![],
        );

        assert!(post.id.is_none());
        assert_eq!(post.created_at, post.updated_at);
        assert!(post.deleted_at.is_none());
    }
}
