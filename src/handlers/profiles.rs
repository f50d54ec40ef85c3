//! 프로필 HTTP 핸들러
//!
//! 로그인한 사용자 본인의 프로필과 게시글을 다루는 엔드포인트입니다.
//! 모든 라우트는 인증이 필요합니다.

use actix_web::{get, put, web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::profile::{ChangePasswordRequest, UpdateProfileRequest};
use crate::services::users::ProfileService;

/// 본인 게시글 목록 쿼리
#[derive(Debug, Deserialize, IntoParams)]
pub struct OwnPostsQuery {
    /// 발행 여부 필터 ("true"/"false", 생략 시 전체)
    #[serde(default)]
    pub is_published: String,
}

/// 내 프로필 조회 핸들러
///
/// # Endpoint
/// `GET /profile`
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "프로필 조회 성공", body = crate::domain::dto::profile::ProfileResponse),
        (status = 401, description = "인증 필요")
    ),
    tag = "profile"
)]
#[get("")]
pub async fn get_profile(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = ProfileService::instance();
    let response = service.get_by_id(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 내 프로필 수정 핸들러
///
/// # Endpoint
/// `PUT /profile`
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "프로필 수정 성공", body = crate::domain::dto::profile::ProfileResponse),
        (status = 400, description = "수정할 필드 없음 또는 검증 실패")
    ),
    tag = "profile"
)]
#[put("")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProfileService::instance();
    let response = service.update(&user.user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 비밀번호 변경 핸들러
///
/// # Endpoint
/// `PUT /profile/password`
#[utoipa::path(
    put,
    path = "/profile/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "비밀번호 변경 성공", body = crate::domain::dto::profile::ChangePasswordResponse),
        (status = 401, description = "현재 비밀번호 불일치")
    ),
    tag = "profile"
)]
#[put("/password")]
pub async fn change_password(
    user: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProfileService::instance();
    let response = service
        .change_password(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 본인 게시글 목록 핸들러
///
/// # Endpoint
/// `GET /profile/posts?is_published=true`
#[utoipa::path(
    get,
    path = "/profile/posts",
    params(OwnPostsQuery),
    responses(
        (status = 200, description = "본인 게시글 목록", body = crate::domain::dto::post::ListPostResponse)
    ),
    tag = "profile"
)]
#[get("/posts")]
pub async fn list_own_posts(
    user: AuthenticatedUser,
    query: web::Query<OwnPostsQuery>,
) -> Result<HttpResponse, AppError> {
    let service = ProfileService::instance();
    let response = service
        .list_blogger_posts(&user.user_id, &query.is_published)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 본인 게시글 단건 조회 핸들러
///
/// # Endpoint
/// `GET /profile/posts/{post_id}`
#[utoipa::path(
    get,
    path = "/profile/posts/{post_id}",
    params(("post_id" = String, Path, description = "게시글 ID")),
    responses(
        (status = 200, description = "게시글 조회 성공", body = crate::domain::dto::post::PostResponse),
        (status = 404, description = "본인 게시글이 아니거나 없음")
    ),
    tag = "profile"
)]
#[get("/posts/{post_id}")]
pub async fn get_own_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ProfileService::instance();
    let response = service.get_post(&user.user_id, &post_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
