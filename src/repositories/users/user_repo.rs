//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 본인 게시글 목록 조회를 위해 `posts` 컬렉션도 함께 조회합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{self, collections, Database};
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;
use crate::register_repository;

/// 사용자 데이터 액세스 리포지토리
///
/// 이 리포지토리는 사용자 엔티티의 CRUD 연산을 담당합니다.
/// 이메일은 회원가입/로그인 경로에서 조회 키로 사용됩니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

register_repository!(UserRepository { name: "user", collection: "users" });

impl UserRepository {
    fn construct() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> AppResult<Collection<T>> {
        Ok(self.db.get_database()?.collection(name))
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없는 경우
    /// * `AppError::DatabaseError` - 드라이버 오류 또는 시간 초과
    pub async fn read(&self, id: ObjectId) -> AppResult<User> {
        let collection = self.collection::<User>(collections::USERS)?;

        db::with_op_timeout(async move {
            collection
                .find_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 이메일로 사용자를 조회합니다.
    pub async fn read_by_email(&self, email: &str) -> AppResult<User> {
        let collection = self.collection::<User>(collections::USERS)?;
        let filter = doc! { "email": email };

        db::with_op_timeout(async move {
            collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 새 사용자를 저장합니다.
    ///
    /// ID가 없으면 새 ObjectId를 할당하고 생성/수정 시각을 동일하게 기록한 뒤,
    /// 저장된 레코드를 반환합니다.
    pub async fn insert(&self, mut user: User) -> AppResult<User> {
        crate::repositories::stamp_for_insert(&mut user.id, &mut user.created_at, &mut user.updated_at);

        let collection = self.collection::<User>(collections::USERS)?;

        db::with_op_timeout(async {
            collection
                .insert_one(&user)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await?;

        Ok(user)
    }

    /// 사용자 정보를 부분 수정합니다.
    ///
    /// `$set` 문서에 `updated_at` 갱신이 더해지며, 수정 후 문서를 반환합니다.
    pub async fn update(&self, id: ObjectId, updates: Document) -> AppResult<User> {
        let updates = crate::repositories::with_updated_at(updates);
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let collection = self.collection::<User>(collections::USERS)?;

        db::with_op_timeout(async move {
            collection
                .find_one_and_update(doc! { "_id": id }, doc! { "$set": updates })
                .with_options(options)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?
                .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
        })
        .await
    }

    /// 본인 게시글 목록을 조회합니다.
    ///
    /// `is_published` 필터가 있으면 발행 상태로 제한하며, 최신 글부터 반환합니다.
    pub async fn read_own_posts(
        &self,
        id: ObjectId,
        is_published: Option<bool>,
    ) -> AppResult<Vec<Post>> {
        let mut filter = doc! { "user_id": id };
        if let Some(flag) = is_published {
            filter.insert("is_published", flag);
        }

        let collection = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            let cursor = collection
                .find(filter)
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
}
