//! 데이터 액세스 리포지토리 모듈
//!
//! 엔티티 영역별로 하나의 리포지토리가 단일(또는 연관) 컬렉션에 대한
//! CRUD 연산을 수행합니다. 모든 호출은 [`crate::db::with_op_timeout`]의
//! 고정 10초 타임아웃 안에서 실행되며, 트랜잭션이나 재시도 정책은 없습니다.
//!
//! 공통 규약:
//! - 조회 실패("문서 없음")는 `AppError::NotFound`로 변환됩니다.
//! - 삽입은 ID가 없으면 새 ObjectId를 할당하고 생성/수정 시각을 동일하게 기록합니다.
//! - 부분 수정은 `$set` 문서에 `updated_at` 갱신을 더하고 수정 후 문서를 반환합니다.

pub mod comments;
pub mod favourites;
pub mod posts;
pub mod tags;
pub mod users;

use mongodb::bson::{oid::ObjectId, DateTime, Document};

/// `$set` 업데이트 문서에 `updated_at` 갱신을 추가합니다.
///
/// 모든 부분 수정 경로는 이 헬퍼를 거치므로 수정 시각이 항상 함께 갱신됩니다.
pub(crate) fn with_updated_at(mut updates: Document) -> Document {
    updates.insert("updated_at", DateTime::now());
    updates
}

/// 삽입 직전 ID와 타임스탬프를 채웁니다.
///
/// ID가 없으면 새 ObjectId를 할당하고, 생성/수정 시각을 같은 값으로 기록합니다.
pub(crate) fn stamp_for_insert(
    id: &mut Option<ObjectId>,
    created_at: &mut Option<DateTime>,
    updated_at: &mut Option<DateTime>,
) {
    if id.is_none() {
        *id = Some(ObjectId::new());
    }

    let now = DateTime::now();
    *created_at = Some(now);
    *updated_at = Some(now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_with_updated_at_adds_timestamp() {
        let updates = with_updated_at(doc! { "title": "새 제목" });

        assert_eq!(updates.get_str("title").unwrap(), "새 제목");
        assert!(updates.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_with_updated_at_on_empty_document() {
        let updates = with_updated_at(doc! {});

        // updated_at 만으로도 유효한 $set 문서가 됨
        assert_eq!(updates.len(), 1);
        assert!(updates.get_datetime("updated_at").is_ok());
    }

    #[test]
    fn test_stamp_for_insert_assigns_id_and_equal_timestamps() {
        let mut id = None;
        let mut created_at = None;
        let mut updated_at = None;

        stamp_for_insert(&mut id, &mut created_at, &mut updated_at);

        assert!(id.is_some());
        assert!(created_at.is_some());
        assert_eq!(created_at, updated_at);
    }

    #[test]
    fn test_stamp_for_insert_keeps_existing_id() {
        let existing = ObjectId::new();
        let mut id = Some(existing);
        let mut created_at = None;
        let mut updated_at = None;

        stamp_for_insert(&mut id, &mut created_at, &mut updated_at);

        assert_eq!(id, Some(existing));
    }
}
