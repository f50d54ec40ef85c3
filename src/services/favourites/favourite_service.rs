//! 팔로우/즐겨찾기 서비스 구현
//!
//! 블로거 팔로우와 게시글 즐겨찾기 상태 변경,
//! 팔로잉 목록/피드/즐겨찾기 목록 조회를 담당합니다.
//! 상태 변경은 멱등적입니다. 같은 요청을 반복해도 결과가 달라지지 않습니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::favourite::{
    BloggerFollowRequest, BloggerFollowStatusResponse, PostFavouriteRequest,
    PostFavouriteStatusResponse,
};
use crate::domain::dto::post::ListPostResponse;
use crate::domain::dto::profile::{ListProfileResponse, ProfileResponse};
use crate::domain::entities::favourite::{FavoritePost, FollowUser};
use crate::domain::parse_object_id;
use crate::register_service;
use crate::repositories::favourites::FavouriteRepository;
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;
use crate::services::posts::PostService;

/// 팔로우/즐겨찾기 비즈니스 로직 서비스
pub struct FavouriteService {
    /// 팔로우/즐겨찾기 데이터 액세스 리포지토리
    favourite_repo: Arc<FavouriteRepository>,
    /// 사용자 데이터 액세스 리포지토리 (대상 존재 확인용)
    user_repo: Arc<UserRepository>,
    /// 게시글 데이터 액세스 리포지토리 (대상 존재 확인용)
    post_repo: Arc<PostRepository>,
    /// 게시글 응답 구성 서비스
    post_service: Arc<PostService>,
}

register_service!(FavouriteService { name: "favourite" });

impl FavouriteService {
    fn construct() -> Self {
        Self {
            favourite_repo: FavouriteRepository::instance(),
            user_repo: UserRepository::instance(),
            post_repo: PostRepository::instance(),
            post_service: PostService::instance(),
        }
    }

    /// 블로거 팔로우 상태를 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 자기 자신을 팔로우하려는 경우
    /// * `AppError::NotFound` - 대상 사용자가 없는 경우
    pub async fn update_follow_status(
        &self,
        user_id: &str,
        request: &BloggerFollowRequest,
    ) -> AppResult<BloggerFollowStatusResponse> {
        let follower_id = parse_object_id(user_id, "사용자")?;
        let target_id = parse_object_id(&request.user_id, "사용자")?;

        if follower_id == target_id {
            return Err(AppError::ValidationError(
                "자기 자신은 팔로우할 수 없습니다".to_string(),
            ));
        }

        // 대상 존재 확인
        self.user_repo.read(target_id).await?;

        let already_following = self
            .favourite_repo
            .is_following(follower_id, target_id)
            .await?;

        if request.follow && !already_following {
            self.favourite_repo
                .follow(FollowUser {
                    user_id: follower_id,
                    follow_user_id: target_id,
                })
                .await?;
        } else if !request.follow && already_following {
            self.favourite_repo.unfollow(follower_id, target_id).await?;
        }

        Ok(BloggerFollowStatusResponse {
            user_id: request.user_id.clone(),
            following: request.follow,
        })
    }

    /// 팔로우 중인 블로거 목록을 조회합니다.
    pub async fn list_following_users(&self, user_id: &str) -> AppResult<ListProfileResponse> {
        let follower_id = parse_object_id(user_id, "사용자")?;
        let users = self.favourite_repo.select_following(follower_id).await?;

        Ok(ListProfileResponse {
            profiles: users.into_iter().map(ProfileResponse::from).collect(),
        })
    }

    /// 팔로우 중인 블로거들의 발행 게시글 피드를 조회합니다.
    pub async fn list_user_posts(&self, user_id: &str) -> AppResult<ListPostResponse> {
        let follower_id = parse_object_id(user_id, "사용자")?;
        let posts = self
            .favourite_repo
            .select_following_users_posts(follower_id)
            .await?;

        self.post_service.to_list_response(posts).await
    }

    /// 게시글 즐겨찾기 상태를 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 대상 게시글이 없는 경우
    pub async fn update_favourite_status(
        &self,
        user_id: &str,
        request: &PostFavouriteRequest,
    ) -> AppResult<PostFavouriteStatusResponse> {
        let reader_id = parse_object_id(user_id, "사용자")?;
        let post_id = parse_object_id(&request.post_id, "게시글")?;

        // 대상 존재 확인
        self.post_repo.read(post_id).await?;

        let already_favourite = self.favourite_repo.is_favourite(reader_id, post_id).await?;

        if request.favourite && !already_favourite {
            self.favourite_repo
                .favourite(FavoritePost {
                    post_id,
                    user_id: reader_id,
                })
                .await?;
        } else if !request.favourite && already_favourite {
            self.favourite_repo.unfavourite(reader_id, post_id).await?;
        }

        Ok(PostFavouriteStatusResponse {
            post_id: request.post_id.clone(),
            favourite: request.favourite,
        })
    }

    /// 즐겨찾기한 게시글 목록을 조회합니다.
    pub async fn list_favourite_posts(&self, user_id: &str) -> AppResult<ListPostResponse> {
        let reader_id = parse_object_id(user_id, "사용자")?;
        let posts = self
            .favourite_repo
            .select_favourite_posts(reader_id)
            .await?;

        self.post_service.to_list_response(posts).await
    }
}
