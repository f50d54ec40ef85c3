//! 댓글 HTTP 핸들러
//!
//! 목록 조회는 공개이며, 작성/수정/삭제는 인증이 필요합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::comment::{
    CreateCommentRequest, ListCommentRequest, UpdateCommentRequest,
};
use crate::services::comments::CommentService;

/// 댓글 목록 조회 핸들러
///
/// # Endpoint
/// `GET /comments?post_id=...&page=1&limit=20`
#[utoipa::path(
    get,
    path = "/comments",
    params(ListCommentRequest),
    responses(
        (status = 200, description = "댓글 목록", body = crate::domain::dto::comment::ListCommentResponse),
        (status = 400, description = "잘못된 게시글 ID")
    ),
    tag = "comments"
)]
#[get("")]
pub async fn list_comments(
    query: web::Query<ListCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let service = CommentService::instance();
    let response = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 댓글 작성 핸들러
///
/// # Endpoint
/// `POST /comments`
#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "댓글 작성 성공", body = crate::domain::dto::comment::CommentResponse),
        (status = 401, description = "인증 필요"),
        (status = 404, description = "대상 게시글 없음")
    ),
    tag = "comments"
)]
#[post("")]
pub async fn create_comment(
    user: AuthenticatedUser,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CommentService::instance();
    let response = service.create(payload.into_inner(), &user.user_id).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 댓글 수정 핸들러
///
/// # Endpoint
/// `PUT /comments/{comment_id}`
#[utoipa::path(
    put,
    path = "/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "댓글 ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "댓글 수정 성공", body = crate::domain::dto::comment::CommentResponse),
        (status = 403, description = "작성자가 아님"),
        (status = 404, description = "댓글 없음")
    ),
    tag = "comments"
)]
#[put("/{comment_id}")]
pub async fn update_comment(
    user: AuthenticatedUser,
    comment_id: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CommentService::instance();
    let response = service
        .update(&comment_id, &user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 댓글 삭제 핸들러
///
/// # Endpoint
/// `DELETE /comments/{comment_id}`
#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    params(("comment_id" = String, Path, description = "댓글 ID")),
    responses(
        (status = 204, description = "댓글 삭제 성공"),
        (status = 403, description = "작성자가 아님"),
        (status = 404, description = "댓글 없음")
    ),
    tag = "comments"
)]
#[delete("/{comment_id}")]
pub async fn delete_comment(
    user: AuthenticatedUser,
    comment_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = CommentService::instance();
    service.delete(&comment_id, &user.user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
