//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::profile::ProfileResponse;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignUpRequest {
    /// 이름
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: String,

    /// 성
    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: String,

    /// 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 블로거 필명 (3-30자)
    #[validate(length(min = 3, max = 30, message = "필명은 3-30자 사이여야 합니다"))]
    pub pseudonym: String,
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignUpResponse {
    pub user: ProfileResponse,
    pub message: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    pub user: ProfileResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            first_name: "길동".to_string(),
            last_name: "홍".to_string(),
            email: "hong@example.com".to_string(),
            password: "Secret123".to_string(),
            pseudonym: "gildong".to_string(),
        }
    }

    #[test]
    fn test_sign_up_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_sign_up_request_rejects_bad_email() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_sign_up_request_rejects_weak_password() {
        let mut request = valid_request();
        request.password = "alllowercase".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_sign_up_request_rejects_short_pseudonym() {
        let mut request = valid_request();
        request.pseudonym = "ab".to_string();

        assert!(request.validate().is_err());
    }
}
