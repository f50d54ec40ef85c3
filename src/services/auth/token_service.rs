//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256 서명을 사용하여 액세스 토큰을 생성하고 검증합니다.
//! 비밀키와 유효 기간, 등록 클레임 값은 [`AuthConfig`]에서 읽습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::config::AuthConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::auth::TokenClaims;
use crate::domain::entities::user::User;
use crate::register_service;

/// JWT 토큰 관리 서비스
pub struct TokenService {
    // 외부 의존성 없음
}

register_service!(TokenService { name: "token" });

impl TokenService {
    fn construct() -> Self {
        Self {}
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(AuthConfig::lifetime_seconds());

        let claims = TokenClaims {
            sub: AuthConfig::subject(),
            aud: AuthConfig::audience(),
            iss: AuthConfig::issuer(),
            user_id: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = AuthConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명과 만료 시각에 더해 `aud`/`iss`/`sub` 등록 클레임도 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명/클레임
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = AuthConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        let mut validation = Validation::default();
        validation.set_audience(&[AuthConfig::audience()]);
        validation.set_issuer(&[AuthConfig::issuer()]);
        validation.sub = Some(AuthConfig::subject());

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// 액세스 토큰으로부터 사용자 ID 추출
    pub fn extract_user_id(&self, token: &str) -> AppResult<String> {
        let claims = self.verify_token(token)?;
        Ok(claims.user_id)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            Ok(token)
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn user_with_id() -> (User, ObjectId) {
        let mut user = User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hashed".to_string(),
            "gildong".to_string(),
        );
        let id = ObjectId::new();
        user.id = Some(id);
        (user, id)
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let service = TokenService {};
        let (user, id) = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, id.to_hex());
        assert_eq!(claims.aud, AuthConfig::audience());
        assert_eq!(claims.iss, AuthConfig::issuer());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_generate_requires_user_id() {
        let service = TokenService {};
        let mut user = user_with_id().0;
        user.id = None;

        assert!(matches!(
            service.generate_access_token(&user),
            Err(AppError::InternalError(_))
        ));
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let service = TokenService {};
        let now = Utc::now();

        let claims = TokenClaims {
            sub: AuthConfig::subject(),
            aud: AuthConfig::audience(),
            iss: AuthConfig::issuer(),
            user_id: ObjectId::new().to_hex(),
            iat: (now - Duration::hours(4)).timestamp(),
            // 기본 leeway(60초)를 충분히 지난 만료 시각
            exp: (now - Duration::hours(2)).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(AuthConfig::secret().as_ref()),
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let service = TokenService {};
        let (user, _) = user_with_id();

        let token = service.generate_access_token(&user).unwrap();
        let forged = format!("{}x", token);

        assert!(service.verify_token(&forged).is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService {};

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
    }
}
