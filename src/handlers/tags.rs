//! 태그 HTTP 핸들러
//!
//! 목록/태그별 게시글 조회는 공개이며, 생성/삭제는 인증이 필요합니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::tag::CreateTagRequest;
use crate::services::tags::TagService;

/// 태그 목록 조회 핸들러
///
/// # Endpoint
/// `GET /tags`
#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "태그 목록", body = crate::domain::dto::tag::ListTagResponse)
    ),
    tag = "tags"
)]
#[get("")]
pub async fn list_tags() -> Result<HttpResponse, AppError> {
    let service = TagService::instance();
    let response = service.list().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 태그 생성 핸들러
///
/// # Endpoint
/// `POST /tags`
#[utoipa::path(
    post,
    path = "/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "태그 생성 성공", body = crate::domain::dto::tag::TagResponse),
        (status = 401, description = "인증 필요"),
        (status = 409, description = "이미 존재하는 태그")
    ),
    tag = "tags"
)]
#[post("")]
pub async fn create_tag(
    _user: AuthenticatedUser,
    payload: web::Json<CreateTagRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TagService::instance();
    let response = service.create(&payload.name).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 태그 삭제 핸들러
///
/// # Endpoint
/// `DELETE /tags/{tag_id}`
#[utoipa::path(
    delete,
    path = "/tags/{tag_id}",
    params(("tag_id" = String, Path, description = "태그 ID")),
    responses(
        (status = 204, description = "태그 삭제 성공"),
        (status = 404, description = "태그 없음"),
        (status = 409, description = "게시글이 연결된 태그")
    ),
    tag = "tags"
)]
#[delete("/{tag_id}")]
pub async fn delete_tag(
    _user: AuthenticatedUser,
    tag_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = TagService::instance();
    service.delete(&tag_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 태그별 게시글 목록 핸들러
///
/// # Endpoint
/// `GET /tags/{tag_id}/posts`
#[utoipa::path(
    get,
    path = "/tags/{tag_id}/posts",
    params(("tag_id" = String, Path, description = "태그 ID")),
    responses(
        (status = 200, description = "태그별 게시글 목록", body = crate::domain::dto::post::ListPostResponse),
        (status = 404, description = "태그 없음")
    ),
    tag = "tags"
)]
#[get("/{tag_id}/posts")]
pub async fn list_tag_posts(tag_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TagService::instance();
    let response = service.list_posts(&tag_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
