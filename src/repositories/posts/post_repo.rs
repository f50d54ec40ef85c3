//! # 게시글 리포지토리 구현
//!
//! `posts` 컬렉션과 `post_tags` 조인 컬렉션에 대한 데이터 액세스 계층입니다.
//! 태그 연결은 게시글 문서의 `tag_ids` 배열과 조인 컬렉션 양쪽에 기록됩니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{self, collections, Database};
use crate::domain::dto::post::ListPostRequest;
use crate::domain::entities::post::Post;
use crate::domain::entities::post_tag::PostTag;
use crate::domain::entities::tag::Tag;
use crate::domain::parse_object_id;
use crate::register_repository;

/// 게시글 데이터 액세스 리포지토리
pub struct PostRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

register_repository!(PostRepository { name: "post", collection: "posts" });

impl PostRepository {
    fn construct() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> AppResult<Collection<T>> {
        Ok(self.db.get_database()?.collection(name))
    }

    /// ID로 게시글을 조회합니다.
    pub async fn read(&self, id: ObjectId) -> AppResult<Post> {
        self.read_by_condition(doc! { "_id": id }).await
    }

    /// 임의의 필터로 게시글 하나를 조회합니다.
    ///
    /// 소유자 확인(`user_id` 포함 필터)이나 슬러그 조회에 사용됩니다.
    pub async fn read_by_condition(&self, filter: Document) -> AppResult<Post> {
        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 새 게시글을 저장합니다.
    pub async fn insert(&self, mut post: Post) -> AppResult<Post> {
        crate::repositories::stamp_for_insert(&mut post.id, &mut post.created_at, &mut post.updated_at);

        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async {
            collection
                .insert_one(&post)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await?;

        Ok(post)
    }

    /// 조건에 맞는 게시글 목록을 최신순으로 조회합니다.
    ///
    /// 작성자, 태그, 발행 여부 필터와 페이지네이션을 지원합니다.
    pub async fn select(&self, request: &ListPostRequest) -> AppResult<Vec<Post>> {
        let mut filter = doc! {};

        if let Some(user_id) = &request.user_id {
            filter.insert("user_id", parse_object_id(user_id, "사용자")?);
        }
        if let Some(tag_id) = &request.tag_id {
            // 배열 멤버십 매칭
            filter.insert("tag_ids", parse_object_id(tag_id, "태그")?);
        }
        if let Some(is_published) = request.is_published {
            filter.insert("is_published", is_published);
        }

        let skip = request.skip();
        let limit = request.limit();
        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            let cursor = collection
                .find(filter)
                .sort(doc! { "created_at": -1 })
                .skip(skip)
                .limit(limit)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<Post>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 게시글을 부분 수정하고 수정 후 문서를 반환합니다.
    pub async fn update(&self, id: ObjectId, updates: Document) -> AppResult<Post> {
        let updates = crate::repositories::with_updated_at(updates);
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            collection
                .find_one_and_update(doc! { "_id": id }, doc! { "$set": updates })
                .with_options(options)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("게시글을 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 게시글과 해당 게시글의 태그 연결을 삭제합니다.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let posts = self.collection::<Post>(collections::POSTS)?;
        let post_tags = self.collection::<PostTag>(collections::POST_TAGS)?;

        db::with_op_timeout(async move {
            let result = posts
                .delete_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if result.deleted_count == 0 {
                return Err(AppError::NotFound("게시글을 찾을 수 없습니다".to_string()));
            }

            post_tags
                .delete_many(doc! { "post_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(())
        })
        .await
    }

    /// 게시글에 태그 연결을 추가합니다.
    pub async fn add_post_tags(&self, post_id: ObjectId, tag_ids: &[ObjectId]) -> AppResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let records: Vec<PostTag> = tag_ids
            .iter()
            .map(|tag_id| PostTag {
                tag_id: *tag_id,
                post_id,
            })
            .collect();

        let collection = self.collection::<PostTag>(collections::POST_TAGS)?;

        db::with_op_timeout(async move {
            collection
                .insert_many(records)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// 게시글의 태그 연결을 통째로 교체합니다.
    pub async fn replace_post_tags(
        &self,
        post_id: ObjectId,
        tag_ids: &[ObjectId],
    ) -> AppResult<()> {
        let collection = self.collection::<PostTag>(collections::POST_TAGS)?;

        db::with_op_timeout(async move {
            collection
                .delete_many(doc! { "post_id": post_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await?;

        self.add_post_tags(post_id, tag_ids).await
    }

    /// 게시글에 연결된 태그 목록을 조회합니다.
    pub async fn get_tags(&self, post_id: ObjectId) -> AppResult<Vec<Tag>> {
        let post_tags = self.collection::<PostTag>(collections::POST_TAGS)?;
        let tags = self.collection::<Tag>(collections::TAGS)?;

        db::with_op_timeout(async move {
            let cursor = post_tags
                .find(doc! { "post_id": post_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let records = cursor
                .try_collect::<Vec<PostTag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if records.is_empty() {
                return Ok(Vec::new());
            }

            let tag_ids: Vec<ObjectId> = records.iter().map(|record| record.tag_id).collect();

            let cursor = tags
                .find(doc! { "_id": { "$in": tag_ids } })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<Tag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 슬러그 중복 확인을 위해 `base` 또는 `base-N` 형태의 슬러그를 조회합니다.
    pub async fn find_slugs_like(&self, base: &str) -> AppResult<Vec<String>> {
        let pattern = format!("^{}(-[0-9]+)?$", base);
        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            let cursor = collection
                .find(doc! { "slug": { "$regex": pattern } })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let posts = cursor
                .try_collect::<Vec<Post>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(posts.into_iter().map(|post| post.slug).collect())
        })
        .await
    }
}
