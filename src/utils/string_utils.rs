//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.
//! 입력 정리와 게시글 슬러그 생성을 담당합니다.

use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
/// assert!(validate_required_string("   ", "name").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 게시글 제목에서 URL 슬러그를 생성합니다
///
/// 영숫자는 소문자로 변환하고, 나머지 문자 구간은 하이픈 하나로 축약합니다.
/// 결과가 비어 있으면 `"post"`를 반환하여 슬러그가 항상 존재하도록 합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // 선행 하이픈 방지

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "post".to_string()
    } else {
        slug
    }
}

/// 이미 사용 중인 슬러그 목록을 피해 사용 가능한 슬러그를 선택합니다
///
/// `base`가 비어 있지 않으면 그대로 사용하고, 충돌 시 `base-2`, `base-3`처럼
/// 가장 작은 미사용 접미사를 붙입니다.
pub fn next_available_slug(base: &str, existing: &[String]) -> String {
    if !existing.iter().any(|slug| slug == base) {
        return base.to_string();
    }

    let mut suffix = 2u32;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !existing.iter().any(|slug| slug == &candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string_trims() {
        assert_eq!(
            validate_required_string("  Hello  ", "name").unwrap(),
            "Hello"
        );
    }

    #[test]
    fn test_validate_required_string_rejects_blank() {
        assert!(validate_required_string("", "name").is_err());
        assert!(validate_required_string("   ", "name").is_err());
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  Hello  ".to_string())),
            Some("Hello".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Rust   백엔드 2024"), "rust-2024");
        assert_eq!(slugify("  -- already-slugged --  "), "already-slugged");
    }

    #[test]
    fn test_slugify_never_empty() {
        assert_eq!(slugify(""), "post");
        assert_eq!(slugify("!!!"), "post");
    }

    #[test]
    fn test_next_available_slug_no_conflict() {
        let existing: Vec<String> = vec![];
        assert_eq!(next_available_slug("hello", &existing), "hello");
    }

    #[test]
    fn test_next_available_slug_appends_suffix() {
        let existing = vec!["hello".to_string()];
        assert_eq!(next_available_slug("hello", &existing), "hello-2");

        let existing = vec![
            "hello".to_string(),
            "hello-2".to_string(),
            "hello-3".to_string(),
        ];
        assert_eq!(next_available_slug("hello", &existing), "hello-4");
    }

    #[test]
    fn test_next_available_slug_ignores_unrelated() {
        let existing = vec!["hello-world".to_string()];
        assert_eq!(next_available_slug("hello", &existing), "hello");
    }
}
