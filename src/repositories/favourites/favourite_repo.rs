//! # 팔로우/즐겨찾기 리포지토리 구현
//!
//! `follows`/`favorites` 조인 컬렉션을 관리하고,
//! 팔로잉 사용자 목록과 피드 구성을 위해 `users`/`posts` 컬렉션을 조회합니다.

use std::sync::Arc;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Collection;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{self, collections, Database};
use crate::domain::entities::favourite::{FavoritePost, FollowUser};
use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;
use crate::register_repository;

/// 팔로우/즐겨찾기 데이터 액세스 리포지토리
pub struct FavouriteRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

register_repository!(FavouriteRepository { name: "favourite", collection: "favorites" });

impl FavouriteRepository {
    fn construct() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> AppResult<Collection<T>> {
        Ok(self.db.get_database()?.collection(name))
    }

    // ── 사용자 팔로우 ──────────────────────────────────────────────

    /// 팔로우 관계가 존재하는지 확인합니다.
    pub async fn is_following(
        &self,
        user_id: ObjectId,
        follow_user_id: ObjectId,
    ) -> AppResult<bool> {
        let collection = self.collection::<FollowUser>(collections::FOLLOWS)?;
        let filter = doc! { "user_id": user_id, "follow_user_id": follow_user_id };

        db::with_op_timeout(async move {
            let record = collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(record.is_some())
        })
        .await
    }

    /// 팔로우 관계를 추가합니다.
    pub async fn follow(&self, record: FollowUser) -> AppResult<()> {
        let collection = self.collection::<FollowUser>(collections::FOLLOWS)?;

        db::with_op_timeout(async move {
            collection
                .insert_one(record)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// 팔로우 관계를 제거합니다. 관계가 없어도 에러가 아닙니다.
    pub async fn unfollow(&self, user_id: ObjectId, follow_user_id: ObjectId) -> AppResult<()> {
        let collection = self.collection::<FollowUser>(collections::FOLLOWS)?;
        let filter = doc! { "user_id": user_id, "follow_user_id": follow_user_id };

        db::with_op_timeout(async move {
            collection
                .delete_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// 사용자가 팔로우 중인 블로거 목록을 조회합니다.
    pub async fn select_following(&self, user_id: ObjectId) -> AppResult<Vec<User>> {
        let follow_user_ids = self.following_ids(user_id).await?;
        if follow_user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.collection::<User>(collections::USERS)?;

        db::with_op_timeout(async move {
            let cursor = users
                .find(doc! { "_id": { "$in": follow_user_ids } })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            cursor
                .try_collect::<Vec<User>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    /// 팔로우 중인 블로거들의 발행 게시글을 최신순으로 조회합니다.
    pub async fn select_following_users_posts(&self, user_id: ObjectId) -> AppResult<Vec<Post>> {
        let follow_user_ids = self.following_ids(user_id).await?;
        if follow_user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let posts = self.collection::<Post>(collections::POSTS)?;
        let filter = doc! { "user_id": { "$in": follow_user_ids }, "is_published": true };

        db::with_op_timeout(async move {
            let cursor = posts
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

    // ── 게시글 즐겨찾기 ────────────────────────────────────────────

    /// 즐겨찾기 관계가 존재하는지 확인합니다.
    pub async fn is_favourite(&self, user_id: ObjectId, post_id: ObjectId) -> AppResult<bool> {
        let collection = self.collection::<FavoritePost>(collections::FAVORITES)?;
        let filter = doc! { "user_id": user_id, "post_id": post_id };

        db::with_op_timeout(async move {
            let record = collection
                .find_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(record.is_some())
        })
        .await
    }

    /// 즐겨찾기를 추가합니다.
    pub async fn favourite(&self, record: FavoritePost) -> AppResult<()> {
        let collection = self.collection::<FavoritePost>(collections::FAVORITES)?;

        db::with_op_timeout(async move {
            collection
                .insert_one(record)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// 즐겨찾기를 해제합니다. 관계가 없어도 에러가 아닙니다.
    pub async fn unfavourite(&self, user_id: ObjectId, post_id: ObjectId) -> AppResult<()> {
        let collection = self.collection::<FavoritePost>(collections::FAVORITES)?;
        let filter = doc! { "user_id": user_id, "post_id": post_id };

        db::with_op_timeout(async move {
            collection
                .delete_one(filter)
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            Ok(())
        })
        .await
    }

    /// 사용자가 즐겨찾기한 게시글 목록을 최신순으로 조회합니다.
    pub async fn select_favourite_posts(&self, user_id: ObjectId) -> AppResult<Vec<Post>> {
        let favorites = self.collection::<FavoritePost>(collections::FAVORITES)?;
        let posts = self.collection::<Post>(collections::POSTS)?;

        db::with_op_timeout(async move {
            let cursor = favorites
                .find(doc! { "user_id": user_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let records = cursor
                .try_collect::<Vec<FavoritePost>>()
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

    /// 사용자가 팔로우 중인 대상 ID 목록을 조회합니다.
    async fn following_ids(&self, user_id: ObjectId) -> AppResult<Vec<ObjectId>> {
        let collection = self.collection::<FollowUser>(collections::FOLLOWS)?;

        db::with_op_timeout(async move {
            let cursor = collection
                .find(doc! { "user_id": user_id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            let records = cursor
                .try_collect::<Vec<FollowUser>>()
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;

            Ok(records
                .into_iter()
                .map(|record| record.follow_user_id)
                .collect())
        })
        .await
    }
}
