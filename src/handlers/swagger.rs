//! OpenAPI 문서 핸들러
//!
//! 생성된 OpenAPI 명세를 JSON으로 제공합니다.

use actix_web::{get, HttpResponse};
use utoipa::OpenApi;

use crate::docs::ApiDoc;

/// OpenAPI 명세 조회 핸들러
///
/// # Endpoint
/// `GET /swagger`
#[get("")]
pub async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
