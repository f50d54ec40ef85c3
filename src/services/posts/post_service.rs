//! 게시글 서비스 구현
//!
//! 게시글 CRUD 비즈니스 로직을 담당합니다.
//! 슬러그는 제목에서 파생되며 `-N` 접미사로 컬렉션 내 유일성을 보장합니다.
//! 수정/삭제는 작성자 본인만 가능합니다.

use std::collections::HashMap;
use std::sync::Arc;

use mongodb::bson::{oid::ObjectId, Document};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::post::{
    CreatePostRequest, ListPostRequest, ListPostResponse, PostResponse, UpdatePostRequest,
};
use crate::domain::entities::post::Post;
use crate::domain::entities::tag::Tag;
use crate::domain::parse_object_id;
use crate::register_service;
use crate::repositories::posts::PostRepository;
use crate::repositories::tags::TagRepository;
use crate::utils::string_utils::{next_available_slug, slugify};

/// 게시글 비즈니스 로직 서비스
pub struct PostService {
    /// 게시글 데이터 액세스 리포지토리
    post_repo: Arc<PostRepository>,
    /// 태그 데이터 액세스 리포지토리 (목록 응답 구성용)
    tag_repo: Arc<TagRepository>,
}

register_service!(PostService { name: "post" });

impl PostService {
    fn construct() -> Self {
        Self {
            post_repo: PostRepository::instance(),
            tag_repo: TagRepository::instance(),
        }
    }

    /// ID로 게시글을 조회합니다. 연결된 태그 정보를 포함합니다.
    pub async fn get_by_id(&self, id: &str) -> AppResult<PostResponse> {
        let post_id = parse_object_id(id, "게시글")?;
        let post = self.post_repo.read(post_id).await?;

        self.to_response(post).await
    }

    /// 조건에 맞는 게시글 목록을 조회합니다.
    pub async fn list(&self, request: &ListPostRequest) -> AppResult<ListPostResponse> {
        let posts = self.post_repo.select(request).await?;

        self.to_list_response(posts).await
    }

    /// 새 게시글을 생성합니다.
    ///
    /// 제목에서 슬러그를 만들고, 동일 슬러그가 있으면 `-2`, `-3` 접미사를 붙입니다.
    /// 태그는 존재 여부를 확인한 뒤 `tag_ids` 배열과 조인 컬렉션에 기록됩니다.
    pub async fn create(
        &self,
        request: CreatePostRequest,
        user_id: &str,
    ) -> AppResult<PostResponse> {
        let author_id = parse_object_id(user_id, "사용자")?;
        let tag_ids = self.resolve_tag_ids(&request.tag_ids).await?;

        let base_slug = slugify(&request.title);
        let existing = self.post_repo.find_slugs_like(&base_slug).await?;
        let slug = next_available_slug(&base_slug, &existing);

        let post = Post::new(
            request.title,
            request.body,
            slug,
            request.is_published,
            author_id,
            tag_ids.clone(),
        );

        let created = self.post_repo.insert(post).await?;
        let post_id = created.id.ok_or_else(|| {
            AppError::InternalError("생성된 게시글에 ID가 없습니다".to_string())
        })?;
        self.post_repo.add_post_tags(post_id, &tag_ids).await?;

        self.to_response(created).await
    }

    /// 게시글을 수정합니다. 작성자 본인만 가능하며 슬러그는 변경되지 않습니다.
    pub async fn update(
        &self,
        id: &str,
        user_id: &str,
        request: UpdatePostRequest,
    ) -> AppResult<PostResponse> {
        let post_id = parse_object_id(id, "게시글")?;
        let post = self.post_repo.read(post_id).await?;
        self.ensure_owner(&post, user_id)?;

        let mut updates = Document::new();
        if let Some(title) = request.title {
            updates.insert("title", title);
        }
        if let Some(body) = request.body {
            updates.insert("body", body);
        }
        if let Some(is_published) = request.is_published {
            updates.insert("is_published", is_published);
        }

        if let Some(raw_tag_ids) = request.tag_ids {
            let tag_ids = self.resolve_tag_ids(&raw_tag_ids).await?;
            self.post_repo.replace_post_tags(post_id, &tag_ids).await?;
            updates.insert("tag_ids", tag_ids);
        }

        let updated = self.post_repo.update(post_id, updates).await?;

        self.to_response(updated).await
    }

    /// 게시글을 삭제합니다. 작성자 본인만 가능합니다.
    pub async fn delete(&self, id: &str, user_id: &str) -> AppResult<()> {
        let post_id = parse_object_id(id, "게시글")?;
        let post = self.post_repo.read(post_id).await?;
        self.ensure_owner(&post, user_id)?;

        self.post_repo.delete(post_id).await
    }

    /// 게시글 하나를 태그 정보와 함께 응답으로 변환합니다.
    pub async fn to_response(&self, post: Post) -> AppResult<PostResponse> {
        let tags = match post.id {
            Some(post_id) => self.post_repo.get_tags(post_id).await?,
            None => Vec::new(),
        };

        Ok(PostResponse::with_tags(post, tags))
    }

    /// 게시글 목록을 태그 정보와 함께 응답으로 변환합니다.
    ///
    /// 태그 연결과 태그 본문을 각각 한 번의 배치 조회로 가져옵니다.
    pub async fn to_list_response(&self, posts: Vec<Post>) -> AppResult<ListPostResponse> {
        let post_ids: Vec<ObjectId> = posts.iter().filter_map(|post| post.id).collect();
        let post_tags = self.tag_repo.select_post_tags(&post_ids).await?;

        let mut tag_ids: Vec<ObjectId> = post_tags.iter().map(|record| record.tag_id).collect();
        tag_ids.sort();
        tag_ids.dedup();

        let tags_by_id: HashMap<ObjectId, Tag> = self
            .tag_repo
            .select(&tag_ids)
            .await?
            .into_iter()
            .filter_map(|tag| tag.id.map(|id| (id, tag)))
            .collect();

        let responses = posts
            .into_iter()
            .map(|post| {
                let tags = post
                    .id
                    .map(|post_id| {
                        post_tags
                            .iter()
                            .filter(|record| record.post_id == post_id)
                            .filter_map(|record| tags_by_id.get(&record.tag_id).cloned())
                            .collect()
                    })
                    .unwrap_or_default();

                PostResponse::with_tags(post, tags)
            })
            .collect();

        Ok(ListPostResponse { posts: responses })
    }

    /// 요청의 태그 ID 문자열들을 검증하고 ObjectId 목록으로 변환합니다.
    async fn resolve_tag_ids(&self, raw_ids: &[String]) -> AppResult<Vec<ObjectId>> {
        let mut tag_ids = Vec::with_capacity(raw_ids.len());
        for raw in raw_ids {
            tag_ids.push(parse_object_id(raw, "태그")?);
        }
        tag_ids.sort();
        tag_ids.dedup();

        let found = self.tag_repo.select(&tag_ids).await?;
        if found.len() != tag_ids.len() {
            return Err(AppError::NotFound(
                "존재하지 않는 태그가 포함되어 있습니다".to_string(),
            ));
        }

        Ok(tag_ids)
    }

    fn ensure_owner(&self, post: &Post, user_id: &str) -> AppResult<()> {
        if post.user_id.to_hex() != user_id {
            return Err(AppError::AuthorizationError(
                "본인의 게시글만 수정하거나 삭제할 수 있습니다".to_string(),
            ));
        }
        Ok(())
    }
}
