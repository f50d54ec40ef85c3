//! # 태그 리포지토리 구현
//!
//! `tags` 컬렉션과 `post_tags` 조인 컬렉션에 대한 데이터 액세스 계층입니다.
//! 목록 응답 구성을 위한 배치 조회(`select_post_tags`, `select_users`)도 제공합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{self, collections, Database};
use crate::domain::entities::post::Post;
use crate::domain::entities::post_tag::PostTag;
use crate::domain::entities::tag::Tag;
use crate::domain::entities::user::User;
use crate::register_repository;

/// 태그 데이터 액세스 리포지토리
pub struct TagRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

register_repository!(TagRepository { name: "tag", collection: "tags" });

impl TagRepository {
    fn construct() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> AppResult<Collection<T>> {
        Ok(self.db.get_database()?.collection(name))
    }

    /// 새 태그를 저장합니다.
    pub async fn insert(&self, mut tag: Tag) -> AppResult<Tag> {
        crate::repositories::stamp_for_insert(&mut tag.id, &mut tag.created_at, &mut tag.updated_at);

        let collection = self.collection::<Tag>(collections::TAGS)?;

        db::with_op_timeout(async {
            collection
                .insert_one(&tag)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await?;

        Ok(tag)
    }

    /// ID로 태그를 조회합니다.
    pub async fn read(&self, id: ObjectId) -> AppResult<Tag> {
        let collection = self.collection::<Tag>(collections::TAGS)?;

        db::with_op_timeout(async move {
            collection
                .find_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("태그를 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 이름으로 태그를 조회합니다. 없으면 `None`을 반환합니다.
    ///
    /// 중복 확인 용도이므로 "문서 없음"이 에러가 아닙니다.
    pub async fn read_by_name(&self, name: &str) -> AppResult<Option<Tag>> {
        let collection = self.collection::<Tag>(collections::TAGS)?;
        let filter = doc! { "name": name };

        db::with_op_timeout(async move {
            collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 태그를 삭제합니다.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let collection = self.collection::<Tag>(collections::TAGS)?;

        db::with_op_timeout(async move {
            let result = collection
                .delete_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if result.deleted_count == 0 {
                return Err(AppError::NotFound("태그를 찾을 수 없습니다".to_string()));
            }

            Ok(())
        })
        .await
    }

    /// 태그를 참조하는 게시글이 있는지 확인합니다.
    pub async fn has_posts(&self, id: ObjectId) -> AppResult<bool> {
        let collection = self.collection::<PostTag>(collections::POST_TAGS)?;

        db::with_op_timeout(async move {
            let count = collection
                .count_documents(doc! { "tag_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(count > 0)
        })
        .await
    }

    /// ID 목록에 해당하는 태그들을 조회합니다.
    pub async fn select(&self, ids: &[ObjectId]) -> AppResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let collection = self.collection::<Tag>(collections::TAGS)?;
        let filter = doc! { "_id": { "$in": ids.to_vec() } };

        db::with_op_timeout(async move {
            let cursor = collection
                .find(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<Tag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 전체 태그를 이름순으로 조회합니다.
    pub async fn select_all(&self) -> AppResult<Vec<Tag>> {
        let collection = self.collection::<Tag>(collections::TAGS)?;

        db::with_op_timeout(async move {
            let cursor = collection
                .find(doc! {})
                .sort(doc! { "name": 1 })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<Tag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 태그가 연결된 게시글 목록을 조회합니다.
    pub async fn select_posts(&self, tag_id: ObjectId) -> AppResult<Vec<Post>> {
        let post_tags = self.collection::<PostTag>(collections::POST_TAGS)?;
        let posts = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            let cursor = post_tags
                .find(doc! { "tag_id": tag_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let records = cursor
                .try_collect::<Vec<PostTag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if records.is_empty() {
                return Ok(Vec::new());
            }

            let post_ids: Vec<ObjectId> = records.iter().map(|record| record.post_id).collect();

            let cursor = posts
                .find(doc! { "_id": { "$in": post_ids } })
                .sort(doc! { "created_at": -1 })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<Post>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 게시글 ID 목록에 대한 태그 연결 레코드를 배치 조회합니다.
    pub async fn select_post_tags(&self, post_ids: &[ObjectId]) -> AppResult<Vec<PostTag>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let collection = self.collection::<PostTag>(collections::POST_TAGS)?;
        let filter = doc! { "post_id": { "$in": post_ids.to_vec() } };

        db::with_op_timeout(async move {
            let cursor = collection
                .find(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<PostTag>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 사용자 ID 목록에 해당하는 사용자들을 배치 조회합니다.
    pub async fn select_users(&self, user_ids: &[ObjectId]) -> AppResult<Vec<User>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let collection = self.collection::<User>(collections::USERS)?;
        let filter = doc! { "_id": { "$in": user_ids.to_vec() } };

        db::with_op_timeout(async move {
            let cursor = collection
                .find(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<User>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }
}
