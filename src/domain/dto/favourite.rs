//! 팔로우/즐겨찾기 요청/응답 DTO

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 블로거 팔로우 상태 변경 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct BloggerFollowRequest {
    /// 팔로우 대상 사용자 ID
    #[validate(length(min = 1, message = "사용자 ID는 필수입니다"))]
    pub user_id: String,

    /// true면 팔로우, false면 언팔로우
    pub follow: bool,
}

/// 블로거 팔로우 상태 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloggerFollowStatusResponse {
    pub user_id: String,
    pub following: bool,
}

/// 게시글 즐겨찾기 상태 변경 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostFavouriteRequest {
    /// 대상 게시글 ID
    #[validate(length(min = 1, message = "게시글 ID는 필수입니다"))]
    pub post_id: String,

    /// true면 즐겨찾기 추가, false면 해제
    pub favourite: bool,
}

/// 게시글 즐겨찾기 상태 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostFavouriteStatusResponse {
    pub post_id: String,
    pub favourite: bool,
}
