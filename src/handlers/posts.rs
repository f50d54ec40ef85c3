//! 게시글 HTTP 핸들러
//!
//! 목록/단건 조회는 공개이며, 작성/수정/삭제는 인증이 필요합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::post::{CreatePostRequest, ListPostRequest, UpdatePostRequest};
use crate::services::posts::PostService;

/// 게시글 목록 조회 핸들러
///
/// # Endpoint
/// `GET /posts?page=1&limit=20&tag_id=...&user_id=...&is_published=true`
#[utoipa::path(
    get,
    path = "/posts",
    params(ListPostRequest),
    responses(
        (status = 200, description = "게시글 목록", body = crate::domain::dto::post::ListPostResponse)
    ),
    tag = "posts"
)]
#[get("")]
pub async fn list_posts(query: web::Query<ListPostRequest>) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let response = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시글 단건 조회 핸들러
///
/// # Endpoint
/// `GET /posts/{post_id}`
#[utoipa::path(
    get,
    path = "/posts/{post_id}",
    params(("post_id" = String, Path, description = "게시글 ID")),
    responses(
        (status = 200, description = "게시글 조회 성공", body = crate::domain::dto::post::PostResponse),
        (status = 404, description = "게시글 없음")
    ),
    tag = "posts"
)]
#[get("/{post_id}")]
pub async fn get_post(post_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    let response = service.get_by_id(&post_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시글 작성 핸들러
///
/// # Endpoint
/// `POST /posts`
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "게시글 작성 성공", body = crate::domain::dto::post::PostResponse),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "존재하지 않는 태그 포함")
    ),
    tag = "posts"
)]
#[post("")]
pub async fn create_post(
    user: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PostService::instance();
    let response = service.create(payload.into_inner(), &user.user_id).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 게시글 수정 핸들러
///
/// # Endpoint
/// `PUT /posts/{post_id}`
#[utoipa::path(
    put,
    path = "/posts/{post_id}",
    params(("post_id" = String, Path, description = "게시글 ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "게시글 수정 성공", body = crate::domain::dto::post::PostResponse),
        (status = 403, description = "작성자가 아님"),
        (status = 404, description = "게시글 없음")
    ),
    tag = "posts"
)]
#[put("/{post_id}")]
pub async fn update_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PostService::instance();
    let response = service
        .update(&post_id, &user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 게시글 삭제 핸들러
///
/// # Endpoint
/// `DELETE /posts/{post_id}`
#[utoipa::path(
    delete,
    path = "/posts/{post_id}",
    params(("post_id" = String, Path, description = "게시글 ID")),
    responses(
        (status = 204, description = "게시글 삭제 성공"),
        (status = 403, description = "작성자가 아님"),
        (status = 404, description = "게시글 없음")
    ),
    tag = "posts"
)]
#[delete("/{post_id}")]
pub async fn delete_post(
    user: AuthenticatedUser,
    post_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PostService::instance();
    service.delete(&post_id, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
