//! 헬스체크 핸들러
//!
//! 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
//! MongoDB ping이 성공해야 healthy로 응답합니다.

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::core::registry::ServiceLocator;
use crate::db::Database;

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Endpoint
/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "서비스 정상"),
        (status = 503, description = "데이터베이스 연결 불가")
    ),
    tag = "health"
)]
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    let database = ServiceLocator::get::<Database>();

    match database.ping().await {
        Ok(_) => HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": "blog_service_backend",
            "version": env!("CARGO_PKG_VERSION"),
            "database": "up",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::error!("헬스체크 실패: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "unhealthy",
                "service": "blog_service_backend",
                "version": env!("CARGO_PKG_VERSION"),
                "database": "down",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }
    }
}
