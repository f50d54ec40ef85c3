//! 댓글 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::format_datetime;
use super::post::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use crate::domain::entities::comment::Comment;

/// 댓글 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub post_id: String,
    pub user_id: String,
    pub parent_comment_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.map(|id| id.to_hex()).unwrap_or_default(),
            content: comment.content,
            post_id: comment.post_id.to_hex(),
            user_id: comment.user_id.to_hex(),
            parent_comment_id: comment.parent_comment_id.map(|id| id.to_hex()),
            created_at: format_datetime(comment.created_at),
            updated_at: format_datetime(comment.updated_at),
        }
    }
}

/// 댓글 목록 조회 쿼리 DTO
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct ListCommentRequest {
    /// 대상 게시글 ID
    pub post_id: String,
    /// 페이지 번호 (1부터 시작)
    pub page: Option<u64>,
    /// 페이지 크기 (기본 20, 최대 100)
    pub limit: Option<i64>,
}

impl ListCommentRequest {
    /// 정규화된 페이지 번호 (최소 1)
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    /// 정규화된 페이지 크기 (1..=100)
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    /// find에 적용할 skip 값
    pub fn skip(&self) -> u64 {
        (self.page() - 1) * self.limit() as u64
    }
}

/// 댓글 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListCommentResponse {
    pub comments: Vec<CommentResponse>,
    pub total: i64,
    pub page: u64,
    pub limit: i64,
}

/// 댓글 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    /// 대상 게시글 ID
    #[validate(length(min = 1, message = "게시글 ID는 필수입니다"))]
    pub post_id: String,

    #[validate(length(min = 1, max = 2000, message = "댓글은 1-2000자 사이여야 합니다"))]
    pub content: String,

    /// 부모 댓글 ID (대댓글인 경우)
    pub parent_comment_id: Option<String>,
}

/// 댓글 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "댓글은 1-2000자 사이여야 합니다"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_list_comment_request_normalization() {
        let request = ListCommentRequest {
            post_id: "507f1f77bcf86cd799439011".to_string(),
            page: None,
            limit: None,
        };
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), DEFAULT_PAGE_LIMIT);

        let request = ListCommentRequest {
            post_id: "507f1f77bcf86cd799439011".to_string(),
            page: Some(2),
            limit: Some(50),
        };
        assert_eq!(request.skip(), 50);
    }

    #[test]
    fn test_comment_response_maps_parent() {
        let parent_id = ObjectId::new();
        let comment = Comment::new(
            "답글".to_string(),
            ObjectId::new(),
            ObjectId::new(),
            Some(parent_id),
        );

        let response = CommentResponse::from(comment);

        assert_eq!(response.parent_comment_id, Some(parent_id.to_hex()));
    }
}
