//! Authentication HTTP Handlers
//!
//! 회원가입과 로그인 엔드포인트를 처리하는 핸들러 함수들입니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::auth::{SignInRequest, SignUpRequest};
use crate::services::auth::AuthenticationService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /auth/signup`
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "계정 생성 성공", body = crate::domain::dto::auth::SignUpResponse),
        (status = 400, description = "입력값 검증 실패"),
        (status = 409, description = "이미 사용 중인 이메일")
    ),
    tag = "auth"
)]
#[post("/signup")]
pub async fn sign_up(payload: web::Json<SignUpRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = AuthenticationService::instance();
    let response = service.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 확인하고 JWT 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /auth/signin`
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "로그인 성공", body = crate::domain::dto::auth::SignInResponse),
        (status = 401, description = "이메일 또는 비밀번호 불일치")
    ),
    tag = "auth"
)]
#[post("/signin")]
pub async fn sign_in(payload: web::Json<SignInRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = AuthenticationService::instance();
    let response = service.sign_in(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
