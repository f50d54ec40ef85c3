//! 댓글 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 댓글 엔티티
///
/// `comments` 컬렉션의 문서를 표현합니다.
/// `parent_comment_id`가 있으면 대댓글입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 댓글 내용
    pub content: String,
    /// 대상 게시글 ID
    pub post_id: ObjectId,
    /// 작성자 ID
    pub user_id: ObjectId,
    /// 부모 댓글 ID (대댓글인 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl Comment {
    /// 새 댓글 레코드를 생성합니다. 생성/수정 시각은 동일한 값으로 설정됩니다.
    pub fn new(
        content: String,
        post_id: ObjectId,
        user_id: ObjectId,
        parent_comment_id: Option<ObjectId>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            content,
            post_id,
            user_id,
            parent_comment_id,
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
    fn test_new_comment_stamps_equal_timestamps() {
        let comment = Comment::new(
            "좋은 글이네요".to_string(),
            ObjectId::new(),
            ObjectId::new(),
            None,
        );

        assert!(comment.id.is_none());
        assert_eq!(comment.created_at, comment.updated_at);
        assert!(comment.parent_comment_id.is_none());
    }
}
