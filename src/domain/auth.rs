//! 인증 도메인 타입
//!
//! JWT 클레임과 요청 파이프라인에서 사용하는 인증 사용자 타입을 정의합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰 클레임
///
/// `sub`/`aud`/`iss`는 설정값([`AuthConfig`](crate::config::AuthConfig))에서
/// 채워지는 등록 클레임이며, 사용자 식별자는 `user_id` 클레임으로 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰 주제 (AUTH_SUBJECT)
    pub sub: String,
    /// 토큰 대상 (AUTH_AUDIENCE)
    pub aud: String,
    /// 토큰 발급자 (AUTH_ISSUER)
    pub iss: String,
    /// 사용자 고유 ID (MongoDB ObjectId 문자열)
    pub user_id: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
}

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// JWT 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 Request Extensions에 저장한 사용자 정보를 추출합니다.
/// 미들웨어를 거치지 않았거나 토큰이 없으면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}
