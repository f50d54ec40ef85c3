//! 팔로우/즐겨찾기 HTTP 핸들러
//!
//! 모든 엔드포인트는 인증이 필요합니다.

use actix_web::{get, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::favourite::{BloggerFollowRequest, PostFavouriteRequest};
use crate::services::favourites::FavouriteService;

/// 블로거 팔로우 상태 변경 핸들러
///
/// # Endpoint
/// `PUT /favorites/follows`
#[utoipa::path(
    put,
    path = "/favorites/follows",
    request_body = BloggerFollowRequest,
    responses(
        (status = 200, description = "팔로우 상태 변경 성공", body = crate::domain::dto::favourite::BloggerFollowStatusResponse),
        (status = 400, description = "자기 자신 팔로우 불가"),
        (status = 404, description = "대상 사용자 없음")
    ),
    tag = "favorites"
)]
#[put("/follows")]
pub async fn update_follow_status(
    user: AuthenticatedUser,
    payload: web::Json<BloggerFollowRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FavouriteService::instance();
    let response = service.update_follow_status(&user.user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 팔로우 중인 블로거 목록 핸들러
///
/// # Endpoint
/// `GET /favorites/follows`
#[utoipa::path(
    get,
    path = "/favorites/follows",
    responses(
        (status = 200, description = "팔로잉 목록", body = crate::domain::dto::profile::ListProfileResponse)
    ),
    tag = "favorites"
)]
#[get("/follows")]
pub async fn list_following_users(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = FavouriteService::instance();
    let response = service.list_following_users(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 팔로잉 피드 핸들러
///
/// 팔로우 중인 블로거들의 발행 게시글을 최신순으로 반환합니다.
///
/// # Endpoint
/// `GET /favorites/follows/posts`
#[utoipa::path(
    get,
    path = "/favorites/follows/posts",
    responses(
        (status = 200, description = "팔로잉 피드", body = crate::domain::dto::post::ListPostResponse)
    ),
    tag = "favorites"
)]
#[get("/follows/posts")]
pub async fn list_following_posts(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = FavouriteService::instance();
    let response = service.list_user_posts(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시글 즐겨찾기 상태 변경 핸들러
///
/// # Endpoint
/// `PUT /favorites/posts`
#[utoipa::path(
    put,
    path = "/favorites/posts",
    request_body = PostFavouriteRequest,
    responses(
        (status = 200, description = "즐겨찾기 상태 변경 성공", body = crate::domain::dto::favourite::PostFavouriteStatusResponse),
        (status = 404, description = "대상 게시글 없음")
    ),
    tag = "favorites"
)]
#[put("/posts")]
pub async fn update_favourite_status(
    user: AuthenticatedUser,
    payload: web::Json<PostFavouriteRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FavouriteService::instance();
    let response = service
        .update_favourite_status(&user.user_id, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 즐겨찾기한 게시글 목록 핸들러
///
/// # Endpoint
/// `GET /favorites/posts`
#[utoipa::path(
    get,
    path = "/favorites/posts",
    responses(
        (status = 200, description = "즐겨찾기 게시글 목록", body = crate::domain::dto::post::ListPostResponse)
    ),
    tag = "favorites"
)]
#[get("/posts")]
pub async fn list_favourite_posts(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = FavouriteService::instance();
    let response = service.list_favourite_posts(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
