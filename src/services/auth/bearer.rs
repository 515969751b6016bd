//! `Authorization: Bearer <token>` → raw token.
//!
//! Every occurrence of `"Bearer "` is removed, not only a leading prefix.
//! The remainder is not checked here: an empty or malformed token is still
//! returned and the verifier rejects it.
//!
//! `resolve` is the strict variant: a leading `"Bearer "` and a non-blank
//! token, or nothing.

use axum::http::{HeaderMap, header};

pub const TOKEN_PREFIX: &str = "Bearer ";

/// Locate the bearer credential. `None` only when the header is absent.
pub fn extract(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?;

    // Non-UTF-8 bytes still count as a present (and later rejected) credential.
    let raw = String::from_utf8_lossy(value.as_bytes());

    Some(raw.replace(TOKEN_PREFIX, ""))
}

/// Strict lookup: the token after a leading `"Bearer "`, `None` when the header
/// is absent, not UTF-8, uses another scheme, or carries a blank token.
pub fn resolve(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(TOKEN_PREFIX)?;

    if token.trim().is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(name: &'static str, value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn absent_header_yields_none() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        assert_eq!(extract(&headers), None);
    }

    #[test]
    fn strips_prefix() {
        let headers = headers_with("authorization", "Bearer abc.def.ghi");
        assert_eq!(extract(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::HeaderName::from_bytes(b"AUTHORIZATION").unwrap(),
            HeaderValue::from_static("Bearer xyz"),
        );
        assert_eq!(extract(&headers).as_deref(), Some("xyz"));
    }

    #[test]
    fn strips_every_occurrence_not_just_the_leading_one() {
        let headers = headers_with("authorization", "Bearer abcBearer def");
        assert_eq!(extract(&headers).as_deref(), Some("abcdef"));
    }

    #[test]
    fn value_without_prefix_is_returned_unchanged() {
        let headers = headers_with("authorization", "garbage");
        assert_eq!(extract(&headers).as_deref(), Some("garbage"));
    }

    #[test]
    fn bare_prefix_yields_empty_token() {
        let headers = headers_with("authorization", "Bearer ");
        assert_eq!(extract(&headers).as_deref(), Some(""));
    }

    #[test]
    fn lowercase_scheme_is_not_stripped() {
        let headers = headers_with("authorization", "bearer abc");
        assert_eq!(extract(&headers).as_deref(), Some("bearer abc"));
    }

    #[test]
    fn non_utf8_value_is_still_a_credential() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(extract(&headers).as_deref(), Some("\u{FFFD}token"));
    }

    #[test]
    fn resolve_takes_the_token_after_a_leading_prefix() {
        let headers = headers_with("authorization", "Bearer abc.def.ghi");
        assert_eq!(resolve(&headers).as_deref(), Some("abc.def.ghi"));

        // Only the leading prefix goes.
        let headers = headers_with("authorization", "Bearer abcBearer def");
        assert_eq!(resolve(&headers).as_deref(), Some("abcBearer def"));
    }

    #[test]
    fn resolve_refuses_what_extract_passes_on() {
        for value in ["garbage", "Bearer ", "Bearer    ", "bearer abc", "Basic dXNlcjpwYXNz"] {
            let headers = headers_with("authorization", value);
            assert_eq!(resolve(&headers), None, "{value:?}");
            assert!(extract(&headers).is_some(), "{value:?}");
        }
        assert_eq!(resolve(&HeaderMap::new()), None);
    }

    #[test]
    fn resolve_refuses_non_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer \xfftoken").unwrap(),
        );
        assert_eq!(resolve(&headers), None);
    }

    #[test]
    fn extraction_is_repeatable() {
        let headers = headers_with("authorization", "Bearer a.b.c");
        assert_eq!(extract(&headers), extract(&headers));
    }
}
