//! OpenAPI 문서 정의
//!
//! 전체 REST API의 OpenAPI 명세를 구성합니다.
//! 명세 JSON은 `GET /swagger`에서 제공됩니다.

use utoipa::OpenApi;

use crate::domain::dto::auth::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
use crate::domain::dto::comment::{
    CommentResponse, CreateCommentRequest, ListCommentResponse, UpdateCommentRequest,
};
use crate::domain::dto::favourite::{
    BloggerFollowRequest, BloggerFollowStatusResponse, PostFavouriteRequest,
    PostFavouriteStatusResponse,
};
use crate::domain::dto::post::{
    CreatePostRequest, ListPostResponse, PostResponse, UpdatePostRequest,
};
use crate::domain::dto::profile::{
    ChangePasswordRequest, ChangePasswordResponse, ListProfileResponse, ProfileResponse,
    UpdateProfileRequest,
};
use crate::domain::dto::tag::{CreateTagRequest, ListTagResponse, TagResponse};

/// 블로그 서비스 OpenAPI 문서
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Service Backend API",
        description = "사용자, 게시글, 태그, 댓글, 팔로우, 즐겨찾기를 제공하는 블로깅 플랫폼 REST API"
    ),
    paths(
        crate::handlers::auth::sign_up,
        crate::handlers::auth::sign_in,
        crate::handlers::health::health_check,
        crate::handlers::profiles::get_profile,
        crate::handlers::profiles::update_profile,
        crate::handlers::profiles::change_password,
        crate::handlers::profiles::list_own_posts,
        crate::handlers::profiles::get_own_post,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::get_post,
        crate::handlers::posts::create_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::tags::list_tags,
        crate::handlers::tags::create_tag,
        crate::handlers::tags::delete_tag,
        crate::handlers::tags::list_tag_posts,
        crate::handlers::comments::list_comments,
        crate::handlers::comments::create_comment,
        crate::handlers::comments::update_comment,
        crate::handlers::comments::delete_comment,
        crate::handlers::favourites::update_follow_status,
        crate::handlers::favourites::list_following_users,
        crate::handlers::favourites::list_following_posts,
        crate::handlers::favourites::update_favourite_status,
        crate::handlers::favourites::list_favourite_posts,
    ),
    components(schemas(
        SignUpRequest,
        SignUpResponse,
        SignInRequest,
        SignInResponse,
        ProfileResponse,
        ListProfileResponse,
        UpdateProfileRequest,
        ChangePasswordRequest,
        ChangePasswordResponse,
        TagResponse,
        ListTagResponse,
        CreateTagRequest,
        PostResponse,
        ListPostResponse,
        CreatePostRequest,
        UpdatePostRequest,
        CommentResponse,
        ListCommentResponse,
        CreateCommentRequest,
        UpdateCommentRequest,
        BloggerFollowRequest,
        BloggerFollowStatusResponse,
        PostFavouriteRequest,
        PostFavouriteStatusResponse,
    )),
    tags(
        (name = "auth", description = "회원가입 및 로그인"),
        (name = "health", description = "서비스 상태 확인"),
        (name = "profile", description = "본인 프로필 및 게시글 관리"),
        (name = "posts", description = "게시글 관리"),
        (name = "tags", description = "태그 관리"),
        (name = "comments", description = "댓글 관리"),
        (name = "favorites", description = "팔로우 및 즐겨찾기")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/auth/signup"));
        assert!(doc.paths.paths.contains_key("/posts/{post_id}"));
        assert!(doc.paths.paths.contains_key("/favorites/follows/posts"));
    }

    #[test]
    fn test_openapi_document_serializes() {
        let json = ApiDoc::openapi().to_json().unwrap();

        assert!(json.contains("Blog Service Backend API"));
        assert!(json.contains("SignUpRequest"));
    }
}
