//! 게시글-태그 조인 레코드

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 게시글-태그 연결
///
/// `post_tags` 컬렉션의 문서를 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTag {
    pub tag_id: ObjectId,
    pub post_id: ObjectId,
}
