//! 도메인 모듈
//!
//! 데이터베이스 엔티티, API 계약(DTO), 인증 도메인 타입을 정의합니다.

pub mod auth;
pub mod dto;
pub mod entities;

use mongodb::bson::oid::ObjectId;

use crate::core::errors::{AppError, AppResult};

/// 경로/본문으로 전달된 문자열 ID를 ObjectId로 변환합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 24자리 16진수 형식이 아닌 경우
pub fn parse_object_id(value: &str, what: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value).map_err(|_| {
        AppError::ValidationError(format!("유효하지 않은 {} ID 형식입니다", what))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        assert!(parse_object_id("507f1f77bcf86cd799439011", "사용자").is_ok());
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        assert!(matches!(
            parse_object_id("not-an-id", "사용자"),
            Err(AppError::ValidationError(_))
        ));
    }
}
