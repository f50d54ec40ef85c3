//! 프로필 서비스 구현
//!
//! 로그인한 사용자의 프로필 조회/수정, 비밀번호 변경,
//! 본인 게시글 목록/조회를 담당합니다.

use std::sync::Arc;

use mongodb::bson::{doc, Document};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::post::{ListPostResponse, PostResponse};
use crate::domain::dto::profile::{
    ChangePasswordRequest, ChangePasswordResponse, ProfileResponse, UpdateProfileRequest,
};
use crate::domain::parse_object_id;
use crate::register_service;
use crate::repositories::posts::PostRepository;
use crate::repositories::users::UserRepository;
use crate::services::posts::PostService;
use crate::utils::hashing;
use crate::utils::string_utils::clean_optional_string;

/// 프로필 비즈니스 로직 서비스
pub struct ProfileService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
    /// 게시글 데이터 액세스 리포지토리 (본인 게시글 조회용)
    post_repo: Arc<PostRepository>,
    /// 게시글 응답 구성 서비스
    post_service: Arc<PostService>,
}

register_service!(ProfileService { name: "profile" });

impl ProfileService {
    fn construct() -> Self {
        Self {
            user_repo: UserRepository::instance(),
            post_repo: PostRepository::instance(),
            post_service: PostService::instance(),
        }
    }

    /// ID로 프로필을 조회합니다.
    pub async fn get_by_id(&self, id: &str) -> AppResult<ProfileResponse> {
        let user_id = parse_object_id(id, "사용자")?;
        let user = self.user_repo.read(user_id).await?;

        Ok(ProfileResponse::from(user))
    }

    /// 프로필을 부분 수정합니다.
    ///
    /// 비어 있지 않은 필드만 `$set` 문서에 포함됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 수정할 필드가 하나도 없는 경우
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<ProfileResponse> {
        let user_id = parse_object_id(id, "사용자")?;

        let mut updates = Document::new();
        if let Some(first_name) = clean_optional_string(request.first_name) {
            updates.insert("first_name", first_name);
        }
        if let Some(last_name) = clean_optional_string(request.last_name) {
            updates.insert("last_name", last_name);
        }
        if let Some(pseudonym) = clean_optional_string(request.pseudonym) {
            updates.insert("pseudonym", pseudonym);
        }
        if let Some(profile_image) = clean_optional_string(request.profile_image) {
            updates.insert("profile_image", profile_image);
        }
        if let Some(biography) = request.biography {
            // 자기소개는 빈 문자열로 지울 수 있음
            updates.insert("biography", biography.trim());
        }

        if updates.is_empty() {
            return Err(AppError::ValidationError(
                "수정할 필드가 없습니다".to_string(),
            ));
        }

        let updated = self.user_repo.update(user_id, updates).await?;

        Ok(ProfileResponse::from(updated))
    }

    /// 비밀번호를 변경합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 현재 비밀번호 불일치
    pub async fn change_password(
        &self,
        id: &str,
        request: ChangePasswordRequest,
    ) -> AppResult<ChangePasswordResponse> {
        let user_id = parse_object_id(id, "사용자")?;
        let user = self.user_repo.read(user_id).await?;

        if !hashing::verify_password(&request.current_password, &user.password)? {
            return Err(AppError::AuthenticationError(
                "현재 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        let password_hash = hashing::hash_password(&request.new_password)?;
        self.user_repo
            .update(user_id, doc! { "password": password_hash })
            .await?;

        Ok(ChangePasswordResponse {
            message: "비밀번호가 성공적으로 변경되었습니다".to_string(),
        })
    }

    /// 본인 게시글 하나를 조회합니다.
    ///
    /// 다른 사용자의 게시글 ID를 지정하면 NotFound가 반환됩니다.
    pub async fn get_post(&self, user_id: &str, post_id: &str) -> AppResult<PostResponse> {
        let owner_id = parse_object_id(user_id, "사용자")?;
        let post_object_id = parse_object_id(post_id, "게시글")?;

        let post = self
            .post_repo
            .read_by_condition(doc! { "_id": post_object_id, "user_id": owner_id })
            .await?;

        self.post_service.to_response(post).await
    }

    /// 본인 게시글 목록을 조회합니다.
    ///
    /// `is_published_filter`는 `"true"`/`"false"`/빈 문자열을 받으며,
    /// 빈 문자열은 전체 조회를 의미합니다.
    pub async fn list_blogger_posts(
        &self,
        id: &str,
        is_published_filter: &str,
    ) -> AppResult<ListPostResponse> {
        let user_id = parse_object_id(id, "사용자")?;
        let is_published = parse_published_filter(is_published_filter)?;

        let posts = self.user_repo.read_own_posts(user_id, is_published).await?;

        self.post_service.to_list_response(posts).await
    }
}

/// 발행 여부 필터 문자열을 해석합니다.
fn parse_published_filter(raw: &str) -> AppResult<Option<bool>> {
    match raw.trim() {
        "" => Ok(None),
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        other => Err(AppError::ValidationError(format!(
            "is_published 필터는 true/false만 허용됩니다: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_published_filter() {
        assert_eq!(parse_published_filter("").unwrap(), None);
        assert_eq!(parse_published_filter("true").unwrap(), Some(true));
        assert_eq!(parse_published_filter("false").unwrap(), Some(false));
        assert_eq!(parse_published_filter("  true  ").unwrap(), Some(true));
        assert!(parse_published_filter("yes").is_err());
    }
}
