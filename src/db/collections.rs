//! MongoDB 컬렉션 이름 상수
//!
//! 리포지토리 전반에서 사용하는 컬렉션 이름을 한곳에서 관리합니다.

pub const USERS: &str = "users";
pub const POSTS: &str = "posts";
pub const COMMENTS: &str = "comments";
pub const TAGS: &str = "tags";
pub const POST_TAGS: &str = "post_tags";
pub const FAVORITES: &str = "favorites";
pub const FOLLOWS: &str = "follows";
