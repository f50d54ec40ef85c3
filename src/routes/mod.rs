//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별로 그룹화하여 등록합니다.
//!
//! # 인증 정책
//!
//! - `/auth`, `/health`, `/swagger`: 공개
//! - `/profile`, `/favorites`: 스코프 전체에 `AuthMiddleware::required()` 적용
//! - `/posts`, `/tags`, `/comments`: `AuthMiddleware::optional()` 적용 -
//!   조회는 공개이고, 쓰기 핸들러는 `AuthenticatedUser` 추출자가 401을 반환합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check & OpenAPI
    cfg.service(handlers::health::health_check);
    cfg.service(web::scope("/swagger").service(handlers::swagger::openapi_spec));

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_profile_routes(cfg);
    configure_post_routes(cfg);
    configure_tag_routes(cfg);
    configure_comment_routes(cfg);
    configure_favourite_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /auth/signup` - 회원가입
/// - `POST /auth/signin` - 로그인
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::sign_up)
            .service(handlers::auth::sign_in),
    );
}

/// 프로필 관련 라우트를 설정합니다 (전체 인증 필요)
///
/// # Available Routes
///
/// - `GET /profile` - 내 프로필 조회
/// - `PUT /profile` - 내 프로필 수정
/// - `PUT /profile/password` - 비밀번호 변경
/// - `GET /profile/posts` - 본인 게시글 목록
/// - `GET /profile/posts/{post_id}` - 본인 게시글 단건 조회
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware::required())
            .service(handlers::profiles::get_profile)
            .service(handlers::profiles::update_profile)
            .service(handlers::profiles::change_password)
            .service(handlers::profiles::list_own_posts)
            .service(handlers::profiles::get_own_post),
    );
}

/// 게시글 관련 라우트를 설정합니다 (조회 공개, 쓰기 인증 필요)
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .wrap(AuthMiddleware::optional())
            .service(handlers::posts::list_posts)
            .service(handlers::posts::create_post)
            .service(handlers::posts::get_post)
            .service(handlers::posts::update_post)
            .service(handlers::posts::delete_post),
    );
}

/// 태그 관련 라우트를 설정합니다 (조회 공개, 쓰기 인증 필요)
fn configure_tag_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tags")
            .wrap(AuthMiddleware::optional())
            .service(handlers::tags::list_tags)
            .service(handlers::tags::create_tag)
            .service(handlers::tags::delete_tag)
            .service(handlers::tags::list_tag_posts),
    );
}

/// 댓글 관련 라우트를 설정합니다 (조회 공개, 쓰기 인증 필요)
fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comments")
            .wrap(AuthMiddleware::optional())
            .service(handlers::comments::list_comments)
            .service(handlers::comments::create_comment)
            .service(handlers::comments::update_comment)
            .service(handlers::comments::delete_comment),
    );
}

/// 팔로우/즐겨찾기 라우트를 설정합니다 (전체 인증 필요)
///
/// # Available Routes
///
/// - `PUT /favorites/follows` - 팔로우 상태 변경
/// - `GET /favorites/follows` - 팔로잉 목록
/// - `GET /favorites/follows/posts` - 팔로잉 피드
/// - `PUT /favorites/posts` - 즐겨찾기 상태 변경
/// - `GET /favorites/posts` - 즐겨찾기 목록
fn configure_favourite_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/favorites")
            .wrap(AuthMiddleware::required())
            .service(handlers::favourites::update_follow_status)
            .service(handlers::favourites::list_following_users)
            .service(handlers::favourites::list_following_posts)
            .service(handlers::favourites::update_favourite_status)
            .service(handlers::favourites::list_favourite_posts),
    );
}
