//! 태그 서비스 구현
//!
//! 태그 생성/삭제/목록과 태그별 게시글 조회를 담당합니다.
//! 게시글이 참조 중인 태그는 삭제할 수 없습니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::post::ListPostResponse;
use crate::domain::dto::tag::{ListTagResponse, TagResponse};
use crate::domain::entities::tag::Tag;
use crate::domain::parse_object_id;
use crate::register_service;
use crate::repositories::tags::TagRepository;
use crate::services::posts::PostService;
use crate::utils::string_utils::validate_required_string;

/// 태그 비즈니스 로직 서비스
pub struct TagService {
    /// 태그 데이터 액세스 리포지토리
    tag_repo: Arc<TagRepository>,
    /// 게시글 응답 구성 서비스
    post_service: Arc<PostService>,
}

register_service!(TagService { name: "tag" });

impl TagService {
    fn construct() -> Self {
        Self {
            tag_repo: TagRepository::instance(),
            post_service: PostService::instance(),
        }
    }

    /// 새 태그를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 동일한 이름의 태그가 이미 있는 경우
    pub async fn create(&self, name: &str) -> AppResult<TagResponse> {
        let name = validate_required_string(name, "태그 이름")?;

        if self.tag_repo.read_by_name(&name).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 존재하는 태그입니다".to_string(),
            ));
        }

        let created = self.tag_repo.insert(Tag::new(name)).await?;

        Ok(TagResponse::from(created))
    }

    /// 태그를 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 태그를 참조하는 게시글이 있는 경우
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let tag_id = parse_object_id(id, "태그")?;

        // 존재 확인
        self.tag_repo.read(tag_id).await?;

        if self.tag_repo.has_posts(tag_id).await? {
            return Err(AppError::ConflictError(
                "게시글이 연결된 태그는 삭제할 수 없습니다".to_string(),
            ));
        }

        self.tag_repo.delete(tag_id).await
    }

    /// 전체 태그 목록을 조회합니다.
    pub async fn list(&self) -> AppResult<ListTagResponse> {
        let tags = self.tag_repo.select_all().await?;

        Ok(ListTagResponse {
            tags: tags.into_iter().map(TagResponse::from).collect(),
        })
    }

    /// 태그가 연결된 게시글 목록을 조회합니다.
    pub async fn list_posts(&self, id: &str) -> AppResult<ListPostResponse> {
        let tag_id = parse_object_id(id, "태그")?;

        // 존재 확인
        self.tag_repo.read(tag_id).await?;

        let posts = self.tag_repo.select_posts(tag_id).await?;

        self.post_service.to_list_response(posts).await
    }
}
