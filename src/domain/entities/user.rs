//! 사용자 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서를 표현합니다. `password`는 bcrypt 해시로만 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub first_name: String,
    /// 성
    pub last_name: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 블로거 필명
    pub pseudonym: String,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub profile_image: String,
    /// 자기소개
    #[serde(default)]
    pub biography: String,
    /// 이메일 인증 여부
    #[serde(default)]
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 사용자 레코드를 생성합니다. 생성/수정 시각은 동일한 값으로 설정됩니다.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        pseudonym: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            first_name,
            last_name,
            email,
            password,
            pseudonym,
            profile_image: String::new(),
            biography: String::new(),
            is_verified: false,
            created_at: Some(now),
            updated_at: Some(now),
            deleted_at: None,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_stamps_equal_timestamps() {
        let user = User::new(
            "길동".to_string(),
            "홍".to_string(),
            "hong@example.com".to_string(),
            "hashed".to_string(),
            "gildong".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.deleted_at.is_none());
        assert!(!user.is_verified);
    }
}
