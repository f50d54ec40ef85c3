//! # 댓글 리포지토리 구현
//!
//! `comments` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 게시글 단위 페이지네이션 조회와 전체 건수 집계를 제공합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{self, collections, Database};
use crate::domain::dto::comment::ListCommentRequest;
use crate::domain::entities::comment::Comment;
use crate::domain::parse_object_id;
use crate::register_repository;

/// 댓글 데이터 액세스 리포지토리
pub struct CommentRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

register_repository!(CommentRepository { name: "comment", collection: "comments" });

impl CommentRepository {
    fn construct() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection(&self) -> AppResult<Collection<Comment>> {
        Ok(self.db.get_database()?.collection(collections::COMMENTS))
    }

    /// 게시글의 댓글 목록과 전체 건수를 조회합니다.
    ///
    /// 최신 댓글부터 페이지 단위로 반환합니다.
    pub async fn select(&self, request: &ListCommentRequest) -> AppResult<(Vec<Comment>, i64)> {
        let post_id = parse_object_id(&request.post_id, "게시글")?;
        let filter = doc! { "post_id": post_id };
        let skip = request.skip();
        let limit = request.limit();
        let collection = self.collection()?;

        db::with_op_timeout(async move {
            let total = collection
                .count_documents(filter.clone())
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let cursor = collection
                .find(filter)
                .sort(doc! { "created_at": -1 })
                .skip(skip)
                .limit(limit)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let comments = cursor
                .try_collect::<Vec<Comment>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok((comments, total as i64))
        })
        .await
    }

    /// 새 댓글을 저장합니다.
    pub async fn insert(&self, mut comment: Comment) -> AppResult<Comment> {
        crate::repositories::stamp_for_insert(
            &mut comment.id,
            &mut comment.created_at,
            &mut comment.updated_at,
        );

        let collection = self.collection()?;

        db::with_op_timeout(async {
            collection
                .insert_one(&comment)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await?;

        Ok(comment)
    }

    /// ID로 댓글을 조회합니다.
    pub async fn read(&self, id: ObjectId) -> AppResult<Comment> {
        let collection = self.collection()?;

        db::with_op_timeout(async move {
            collection
                .find_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 댓글을 부분 수정하고 수정 후 문서를 반환합니다.
    pub async fn update_by_id(&self, id: ObjectId, updates: Document) -> AppResult<Comment> {
        let updates = crate::repositories::with_updated_at(updates);
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let collection = self.collection()?;

        db::with_op_timeout(async move {
            collection
                .find_one_and_update(doc! { "_id": id }, doc! { "$set": updates })
                .with_options(options)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("댓글을 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 댓글을 삭제합니다.
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        let collection = self.collection()?;

        db::with_op_timeout(async move {
            let result = collection
                .delete_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            if result.deleted_count == 0 {
                return Err(AppError::NotFound("댓글을 찾을 수 없습니다".to_string()));
            }

            Ok(())
        })
        .await
    }
}
