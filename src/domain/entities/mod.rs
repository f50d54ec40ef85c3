//! 데이터베이스 엔티티
//!
//! 각 컬렉션에 저장되는 도메인 레코드를 정의합니다.
//! 기본 엔티티는 공통적으로 `_id`와 생성/수정/삭제 타임스탬프를 가지며,
//! 조인 레코드(`PostTag`, `FollowUser`, `FavoritePost`)는 식별자 쌍만 가집니다.
//!
//! 삭제 타임스탬프(`deleted_at`)는 소프트 삭제 관례를 위한 필드이지만,
//! 현재 삭제 경로는 문서를 물리적으로 제거합니다.

pub mod comment;
pub mod favourite;
pub mod post;
pub mod post_tag;
pub mod tag;
pub mod user;

pub use comment::Comment;
pub use favourite::{FavoritePost, FollowUser};
pub use post::Post;
pub use post_tag::PostTag;
pub use tag::Tag;
pub use user::User;
