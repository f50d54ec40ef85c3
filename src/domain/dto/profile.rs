//! 프로필 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::format_datetime;
use crate::domain::entities::user::User;

/// 프로필 응답 DTO
///
/// 비밀번호 해시 등 민감 정보를 제외한 사용자 정보입니다.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub pseudonym: String,
    pub profile_image: String,
    pub biography: String,
    pub is_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            pseudonym: user.pseudonym,
            profile_image: user.profile_image,
            biography: user.biography,
            is_verified: user.is_verified,
            created_at: format_datetime(user.created_at),
            updated_at: format_datetime(user.updated_at),
        }
    }
}

/// 프로필 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListProfileResponse {
    pub profiles: Vec<ProfileResponse>,
}

/// 프로필 수정 요청 DTO
///
/// 제공된 필드만 수정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "성은 1-50자 사이여야 합니다"))]
    pub last_name: Option<String>,

    #[validate(length(min = 3, max = 30, message = "필명은 3-30자 사이여야 합니다"))]
    pub pseudonym: Option<String>,

    pub profile_image: Option<String>,

    #[validate(length(max = 500, message = "자기소개는 500자 이하여야 합니다"))]
    pub biography: Option<String>,
}

/// 비밀번호 변경 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호는 필수입니다"))]
    pub current_password: String,

    #[validate(length(min = 8, message = "새 비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,
}

/// 비밀번호 변경 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_profile_response_excludes_password() {
        let mut user = User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hashed-password".to_string(),
            "gildong".to_string(),
        );
        let id = ObjectId::new();
        user.id = Some(id);

        let response = ProfileResponse::from(user);

        assert_eq!(response.id, id.to_hex());
        assert_eq!(response.email, "hong@example.com");
        assert!(!response.created_at.is_empty());

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hashed-password"));
    }
}
