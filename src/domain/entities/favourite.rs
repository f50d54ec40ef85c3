//! 팔로우/즐겨찾기 조인 레코드

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 팔로우 관계
///
/// `follows` 컬렉션의 문서를 표현합니다.
/// `user_id`가 `follow_user_id`를 팔로우합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUser {
    pub user_id: ObjectId,
    pub follow_user_id: ObjectId,
}

/// 게시글 즐겨찾기
///
/// `favorites` 컬렉션의 문서를 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritePost {
    pub post_id: ObjectId,
    pub user_id: ObjectId,
}
