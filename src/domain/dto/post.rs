//! 게시글 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::format_datetime;
use super::tag::TagResponse;
use crate::domain::entities::post::Post;
use crate::domain::entities::tag::Tag;

/// 목록 조회 기본 페이지 크기
pub const DEFAULT_PAGE_LIMIT: i64 = 20;
/// 목록 조회 최대 페이지 크기
pub const MAX_PAGE_LIMIT: i64 = 100;

/// 게시글 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub slug: String,
    pub is_published: bool,
    pub user_id: String,
    pub tags: Vec<TagResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl PostResponse {
    /// 태그 정보 없이 게시글만으로 응답을 만듭니다.
    pub fn from_post(post: Post) -> Self {
        Self::with_tags(post, Vec::new())
    }

    /// 태그 엔티티 목록을 함께 포함하여 응답을 만듭니다.
    pub fn with_tags(post: Post, tags: Vec<Tag>) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: post.title,
            body: post.body,
            slug: post.slug,
            is_published: post.is_published,
            user_id: post.user_id.to_hex(),
            tags: tags.into_iter().map(TagResponse::from).collect(),
            created_at: format_datetime(post.created_at),
            updated_at: format_datetime(post.updated_at),
        }
    }
}

/// 게시글 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPostResponse {
    pub posts: Vec<PostResponse>,
}

/// 게시글 목록 조회 쿼리 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct ListPostRequest {
    /// 페이지 번호 (1부터 시작)
    pub page: Option<u64>,
    /// 페이지 크기 (기본 20, 최대 100)
    pub limit: Option<i64>,
    /// 작성자 ID 필터
    pub user_id: Option<String>,
    /// 태그 ID 필터
    pub tag_id: Option<String>,
    /// 발행 여부 필터
    pub is_published: Option<bool>,
}

impl ListPostRequest {
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

/// 게시글 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[validate(length(min = 1, message = "본문은 필수입니다"))]
    pub body: String,

    #[serde(default)]
    pub is_published: bool,

    /// 연결할 태그 ID 목록
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

/// 게시글 수정 요청 DTO
///
/// 제공된 필드만 수정됩니다. 슬러그는 변경되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "본문은 비울 수 없습니다"))]
    pub body: Option<String>,

    pub is_published: Option<bool>,

    /// 전달되면 태그 연결을 통째로 교체합니다.
    pub tag_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_list_post_request_normalization() {
        let request = ListPostRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(request.skip(), 0);

        let request = ListPostRequest {
            page: Some(0),
            limit: Some(1000),
            ..Default::default()
        };
        assert_eq!(request.page(), 1);
        assert_eq!(request.limit(), MAX_PAGE_LIMIT);

        let request = ListPostRequest {
            page: Some(3),
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(request.skip(), 20);
    }

    #[test]
    fn test_post_response_with_tags() {
        let user_id = ObjectId::new();
        let post = Post::new(
            "제목".to_string(),
            "본문".to_string(),
            "slug".to_string(),
            true,
            user_id,
            vec![],
        );

        let response = PostResponse::with_tags(post, vec![Tag::new("rust".to_string())]);

        assert_eq!(response.user_id, user_id.to_hex());
        assert_eq!(response.tags.len(), 1);
        assert_eq!(response.tags[0].name, "rust");
    }
}
