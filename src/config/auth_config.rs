//! # Authentication Configuration Module
//!
//! JWT 토큰 발급/검증에 필요한 설정을 관리하는 모듈입니다.
//! 모든 값은 환경 변수에서 읽으며, 누락 시 개발용 기본값을 사용합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export AUTH_SECRET="your-super-secret-key"
//! export AUTH_LIFE_TIME="86400"        # 토큰 유효 기간 (초)
//! export AUTH_AUDIENCE="blog-users"
//! export AUTH_ISSUER="blog-service-backend"
//! export AUTH_SUBJECT="authentication"
//! ```
//!
//! ## 보안 모범 사례
//!
//! 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
//! 2. **적절한 만료 시간**: 프로덕션에서는 짧은 토큰 수명 권장
//! 3. **환경별 키 분리**: 개발/운영 환경은 서로 다른 키 사용
//!
//! ```bash
//! # 안전한 키 생성
//! openssl rand -base64 32
//! ```

use std::env;

/// JWT 토큰 관련 설정을 관리하는 구조체
///
/// 토큰 서명 비밀키, 유효 기간, 등록 클레임(aud/iss/sub) 값을 제공합니다.
pub struct AuthConfig;

impl AuthConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며,
    /// 이때 경고 로그가 출력됩니다. 프로덕션에서는 반드시 설정해야 합니다.
    pub fn secret() -> String {
        env::var("AUTH_SECRET").unwrap_or_else(|_| {
            log::warn!("AUTH_SECRET not set, using default (not secure for production!)");
            "blog-dev-secret".to_string()
        })
    }

    /// 액세스 토큰의 유효 기간을 초 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 86400초 (24시간). 값이 숫자가 아니거나 0 이하인 경우에도 기본값을 사용합니다.
    pub fn lifetime_seconds() -> i64 {
        env::var("AUTH_LIFE_TIME")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|seconds| *seconds > 0)
            .unwrap_or(86_400)
    }

    /// 토큰 `aud` 클레임 값을 반환합니다. (기본값: "blog-users")
    pub fn audience() -> String {
        env::var("AUTH_AUDIENCE").unwrap_or_else(|_| "blog-users".to_string())
    }

    /// 토큰 `iss` 클레임 값을 반환합니다. (기본값: "blog-service-backend")
    pub fn issuer() -> String {
        env::var("AUTH_ISSUER").unwrap_or_else(|_| "blog-service-backend".to_string())
    }

    /// 토큰 `sub` 클레임 값을 반환합니다. (기본값: "authentication")
    pub fn subject() -> String {
        env::var("AUTH_SUBJECT").unwrap_or_else(|_| "authentication".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_default_when_unset() {
        if env::var("AUTH_LIFE_TIME").is_err() {
            assert_eq!(AuthConfig::lifetime_seconds(), 86_400);
        }
    }

    #[test]
    fn test_claim_defaults_when_unset() {
        if env::var("AUTH_AUDIENCE").is_err() {
            assert_eq!(AuthConfig::audience(), "blog-users");
        }
        if env::var("AUTH_ISSUER").is_err() {
            assert_eq!(AuthConfig::issuer(), "blog-service-backend");
        }
        if env::var("AUTH_SUBJECT").is_err() {
            assert_eq!(AuthConfig::subject(), "authentication");
        }
    }
}
