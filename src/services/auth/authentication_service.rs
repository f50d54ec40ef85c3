//! 인증 서비스 구현
//!
//! 회원가입과 로그인 비즈니스 로직을 담당합니다.
//! 비밀번호는 bcrypt로 해싱되며, 로그인 성공 시 JWT 액세스 토큰을 발급합니다.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::auth::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
use crate::domain::dto::profile::ProfileResponse;
use crate::domain::entities::user::User;
use crate::register_service;
use crate::repositories::users::UserRepository;
use crate::services::auth::token_service::TokenService;
use crate::utils::hashing;

/// 인증 비즈니스 로직 서비스
///
/// 계정 생성과 자격 증명 확인을 담당하며,
/// 알 수 없는 이메일과 잘못된 비밀번호를 구분하지 않는 동일한 에러를 반환합니다.
pub struct AuthenticationService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    /// JWT 토큰 서비스
    token_service: Arc<TokenService>,
}

register_service!(AuthenticationService { name: "authentication" });

impl AuthenticationService {
    fn construct() -> Self {
        Self {
            user_repo: UserRepository::instance(),
            token_service: TokenService::instance(),
        }
    }

    /// 새 계정을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<SignUpResponse> {
        // 이메일 중복 확인
        match self.user_repo.read_by_email(&request.email).await {
            Ok(_) => {
                return Err(AppError::ConflictError(
                    "이미 사용 중인 이메일입니다".to_string(),
                ));
            }
            Err(AppError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let password_hash = hashing::hash_password(&request.password)?;

        let user = User::new(
            request.first_name,
            request.last_name,
            request.email,
            password_hash,
            request.pseudonym,
        );

        let created = self.user_repo.insert(user).await?;

        log::info!("새 계정 생성됨: {}", created.email);

        Ok(SignUpResponse {
            user: ProfileResponse::from(created),
            message: "계정이 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 자격 증명을 확인하고 액세스 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 이메일 또는 비밀번호 불일치
    pub async fn sign_in(&self, request: SignInRequest) -> AppResult<SignInResponse> {
        let user = self
            .user_repo
            .read_by_email(&request.email)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => invalid_credentials(),
                other => other,
            })?;

        if !hashing::verify_password(&request.password, &user.password)? {
            log::warn!("로그인 실패: {}", request.email);
            return Err(invalid_credentials());
        }

        let access_token = self.token_service.generate_access_token(&user)?;
        let expires_in = AuthConfig::lifetime_seconds();

        Ok(SignInResponse {
            user: ProfileResponse::from(user),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
}
