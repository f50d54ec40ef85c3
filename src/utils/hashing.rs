//! 비밀번호 해싱 유틸리티
//!
//! bcrypt 기반의 비밀번호 해싱/검증 함수를 제공합니다.
//! cost는 실행 환경에 따라 [`PasswordConfig`](crate::config::PasswordConfig)에서 결정됩니다.

use crate::config::PasswordConfig;
use crate::core::errors::AppError;

/// 평문 비밀번호를 bcrypt 해시로 변환합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 해싱 실패
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let cost = PasswordConfig::bcrypt_cost();

    bcrypt::hash(password, cost)
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호가 저장된 해시와 일치하는지 검증합니다.
///
/// # Errors
///
/// * `AppError::InternalError` - 해시 형식이 올바르지 않은 경우
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("Secret123").unwrap();

        assert_ne!(hash, "Secret123");
        assert!(verify_password("Secret123", &hash).unwrap());
        assert!(!verify_password("WrongPass1", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("Secret123", "not-a-bcrypt-hash").is_err());
    }
}
