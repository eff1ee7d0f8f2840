//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::types::QueryString;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn req(query: &str) -> QueryString {
    QueryString::parse(query)
}

fn range(n: u64) -> Vec<u64> {
    (0..n).collect()
}

struct Fixtures {
    tiny: Vec<u64>,
    small: Vec<u64>,
    medium: Vec<u64>,
    large: Vec<u64>,
}

impl Fixtures {
    fn new() -> Self {
        Self {
            tiny: range(1),
            small: range(10),
            medium: range(1000),
            large: range(10000),
        }
    }
}

fn assert_invalid(result: crate::error::Result<impl std::fmt::Debug>, param: &str) {
    match result {
        Err(Error::InvalidParameter { param: p, .. }) => assert_eq!(p, param),
        other => panic!("Expected InvalidParameter for '{param}', got {other:?}"),
    }
}

// ============================================================================
// Offset Limiter Tests
// ============================================================================

#[test]
fn test_limiter_offset_zero() {
    let f = Fixtures::new();
    let q = req("offset=0");
    assert_eq!(limited(&f.tiny, &q).unwrap(), &f.tiny[..]);
    assert_eq!(limited(&f.small, &q).unwrap(), &f.small[..]);
    assert_eq!(limited(&f.medium, &q).unwrap(), &f.medium[..]);
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[..1000]);
}

#[test]
fn test_limiter_offset_medium() {
    let f = Fixtures::new();
    let q = req("offset=10");
    assert!(limited(&f.tiny, &q).unwrap().is_empty());
    assert!(limited(&f.small, &q).unwrap().is_empty());
    assert_eq!(limited(&f.medium, &q).unwrap(), &f.medium[10..]);
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[10..1010]);
}

#[test]
fn test_limiter_offset_over_max() {
    let f = Fixtures::new();
    let q = req("offset=1001");
    assert!(limited(&f.tiny, &q).unwrap().is_empty());
    assert!(limited(&f.small, &q).unwrap().is_empty());
    assert!(limited(&f.medium, &q).unwrap().is_empty());
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[1001..2001]);
}

#[test]
fn test_limiter_nothing() {
    let f = Fixtures::new();
    let q = QueryString::new();
    assert_eq!(limited(&f.tiny, &q).unwrap(), &f.tiny[..]);
    assert_eq!(limited(&f.small, &q).unwrap(), &f.small[..]);
    assert_eq!(limited(&f.medium, &q).unwrap(), &f.medium[..]);
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[..1000]);
}

#[test]
fn test_limiter_limit_zero_matches_no_limit() {
    let f = Fixtures::new();
    let zero = req("limit=0");
    let none = QueryString::new();
    let max = req("limit=1000");
    for items in [&f.tiny, &f.small, &f.medium, &f.large] {
        let expected = limited(items, &none).unwrap();
        assert_eq!(limited(items, &zero).unwrap(), expected);
        assert_eq!(limited(items, &max).unwrap(), expected);
    }
    assert_eq!(limited(&f.large, &zero).unwrap(), &f.large[..1000]);
}

#[test]
fn test_limiter_limit_medium() {
    let f = Fixtures::new();
    let q = req("limit=10");
    assert_eq!(limited(&f.tiny, &q).unwrap(), &f.tiny[..]);
    assert_eq!(limited(&f.small, &q).unwrap(), &f.small[..]);
    assert_eq!(limited(&f.medium, &q).unwrap(), &f.medium[..10]);
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[..10]);
}

#[test]
fn test_limiter_limit_over_max() {
    let f = Fixtures::new();
    let q = req("limit=3000");
    assert_eq!(limited(&f.tiny, &q).unwrap(), &f.tiny[..]);
    assert_eq!(limited(&f.small, &q).unwrap(), &f.small[..]);
    assert_eq!(limited(&f.medium, &q).unwrap(), &f.medium[..]);
    assert_eq!(limited(&f.large, &q).unwrap(), &f.large[..1000]);
}

#[test]
fn test_limiter_limit_and_offset() {
    let items = range(2000);
    assert_eq!(limited(&items, &req("offset=1&limit=3")).unwrap(), &[1, 2, 3]);
    assert_eq!(
        limited(&items, &req("offset=3&limit=0")).unwrap(),
        &items[3..1003]
    );
    assert_eq!(
        limited(&items, &req("offset=3&limit=1500")).unwrap(),
        &items[3..1003]
    );
    assert!(limited(&items, &req("offset=3000&limit=10"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_limiter_custom_max_limit() {
    let items = range(2000);
    assert_eq!(
        limited_with_max(&items, &req("offset=1&limit=3"), 2000).unwrap(),
        &[1, 2, 3]
    );
    assert_eq!(
        limited_with_max(&items, &req("offset=3&limit=0"), 2000).unwrap(),
        &items[3..]
    );
    assert_eq!(
        limited_with_max(&items, &req("offset=3&limit=2500"), 2000).unwrap(),
        &items[3..]
    );
    assert!(limited_with_max(&items, &req("offset=3000&limit=10"), 2000)
        .unwrap()
        .is_empty());
}

#[test]
fn test_limiter_accepts_plain_map() {
    let items = range(20);
    let mut query = std::collections::HashMap::new();
    query.insert("offset".to_string(), "15".to_string());
    assert_eq!(limited(&items, &query).unwrap(), &[15, 16, 17, 18, 19]);
}

#[test]
fn test_limiter_zero_max_limit_is_empty() {
    let items = range(10);
    assert!(limited_with_max(&items, &QueryString::new(), 0)
        .unwrap()
        .is_empty());
}

#[test]
fn test_limiter_does_not_copy_input() {
    let items = range(10);
    let page = limited(&items, &req("offset=2&limit=2")).unwrap();
    assert!(std::ptr::eq(&page[0], &items[2]));
}

#[test]
fn test_limiter_length_bound() {
    let items = range(37);
    for offset in [0usize, 1, 20, 36, 37, 100] {
        for limit in [0usize, 1, 5, 40] {
            let q = req(&format!("offset={offset}&limit={limit}"));
            let page = limited_with_max(&items, &q, 30).unwrap();
            let effective = if limit == 0 { 30 } else { limit.min(30) };
            assert!(page.len() <= effective.min(items.len().saturating_sub(offset)));
        }
    }
}

#[test_case("offset=" ; "blank offset")]
#[test_case("offset=%20aa" ; "space prefixed offset")]
#[test_case("offset=-30" ; "negative offset")]
#[test_case("offset=%201" ; "leading space offset")]
#[test_case("offset=1%20" ; "trailing space offset")]
#[test_case("offset=%2B3" ; "plus signed offset")]
fn test_limiter_bad_offset(query: &str) {
    let f = Fixtures::new();
    assert_invalid(limited(&f.tiny, &req(query)), "offset");
}

#[test]
fn test_limiter_huge_values_clamp() {
    let items = range(2000);
    assert_eq!(
        limited(&items, &req("limit=99999999999999999999999")).unwrap(),
        &items[..1000]
    );
    assert!(limited(&items, &req("offset=99999999999999999999999"))
        .unwrap()
        .is_empty());
    assert_eq!(
        get_pagination_params(&req("limit=99999999999999999999999")).unwrap(),
        PaginationParams::new().with_limit(u64::MAX)
    );
}

#[test_case("limit=" ; "blank limit")]
#[test_case("limit=-3000" ; "negative limit")]
#[test_case("limit=ten" ; "word limit")]
#[test_case("limit=1.5" ; "fractional limit")]
fn test_limiter_bad_limit(query: &str) {
    let f = Fixtures::new();
    assert_invalid(limited(&f.tiny, &req(query)), "limit");
}

#[test]
fn test_limiter_negative_limit_message() {
    let err = limited(&range(1), &req("limit=-3000")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value '-3000' for parameter 'limit': must not be negative"
    );
    assert_eq!(err.status_code(), 400);
}

// ============================================================================
// Pagination Params Tests
// ============================================================================

#[test]
fn test_no_params() {
    let params = get_pagination_params(&QueryString::new()).unwrap();
    assert_eq!(params, PaginationParams::default());
    assert!(params.is_empty());
    assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
}

#[test]
fn test_valid_marker() {
    let params = get_pagination_params(&req("marker=1")).unwrap();
    assert_eq!(params, PaginationParams::new().with_marker(1));
}

#[test]
fn test_valid_limit() {
    let params = get_pagination_params(&req("limit=10")).unwrap();
    assert_eq!(params, PaginationParams::new().with_limit(10));
    assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"limit":10}"#);
}

#[test]
fn test_valid_limit_and_marker() {
    let params = get_pagination_params(&req("limit=20&marker=40")).unwrap();
    assert_eq!(
        params,
        PaginationParams {
            marker: Some(40),
            limit: Some(20),
        }
    );
}

#[test]
fn test_pagination_params_ignore_offset() {
    let params = get_pagination_params(&req("offset=-1")).unwrap();
    assert!(params.is_empty());
}

#[test_case("marker=-2", "marker" ; "negative marker")]
#[test_case("marker=", "marker" ; "blank marker")]
#[test_case("limit=-2", "limit" ; "negative limit")]
#[test_case("limit=%20aa", "limit" ; "space prefixed limit")]
#[test_case("marker=1&limit=-2", "limit" ; "valid marker invalid limit")]
fn test_invalid_pagination_params(query: &str, param: &str) {
    assert_invalid(get_pagination_params(&req(query)), param);
}

#[test]
fn test_effective_limit() {
    assert_eq!(PaginationParams::new().effective_limit(1000), 1000);
    assert_eq!(PaginationParams::new().with_limit(0).effective_limit(1000), 1000);
    assert_eq!(PaginationParams::new().with_limit(10).effective_limit(1000), 10);
    assert_eq!(
        PaginationParams::new().with_limit(5000).effective_limit(1000),
        1000
    );
}

#[test]
fn test_parse_non_negative() {
    assert_eq!(parse_non_negative("limit", "0").unwrap(), 0);
    assert_eq!(parse_non_negative("limit", "007").unwrap(), 7);
    assert_eq!(
        parse_non_negative("limit", "99999999999999999999999").unwrap(),
        u64::MAX
    );
    assert_invalid(parse_non_negative("limit", " 7"), "limit");
    assert_invalid(parse_non_negative("limit", "٣"), "limit");
}

// ============================================================================
// Marker Limiter Tests
// ============================================================================

#[derive(Debug, PartialEq)]
struct Server {
    id: u64,
    name: &'static str,
}

impl Identified for Server {
    fn id(&self) -> u64 {
        self.id
    }
}

fn servers() -> Vec<Server> {
    vec![
        Server { id: 10, name: "alpha" },
        Server { id: 20, name: "beta" },
        Server { id: 30, name: "gamma" },
        Server { id: 40, name: "delta" },
    ]
}

#[test]
fn test_marker_limiter_without_marker() {
    let items = servers();
    let page = limited_by_marker(&items, &req("limit=2"), DEFAULT_MAX_LIMIT).unwrap();
    assert_eq!(page, &items[..2]);
}

#[test]
fn test_marker_limiter_starts_after_marker() {
    let items = servers();
    let page = limited_by_marker(&items, &req("marker=20"), DEFAULT_MAX_LIMIT).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "gamma");
    assert_eq!(page[1].name, "delta");
}

#[test]
fn test_marker_limiter_marker_and_limit() {
    let items = servers();
    let page = limited_by_marker(&items, &req("marker=10&limit=1"), DEFAULT_MAX_LIMIT).unwrap();
    assert_eq!(page, &items[1..2]);
}

#[test]
fn test_marker_limiter_last_marker_is_empty() {
    let items = servers();
    let page = limited_by_marker(&items, &req("marker=40"), DEFAULT_MAX_LIMIT).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_marker_limiter_clamps_limit() {
    let items = range(50);
    let page = limited_by_marker(&items, &req("limit=0"), 5).unwrap();
    assert_eq!(page, &[0, 1, 2, 3, 4]);
    let page = limited_by_marker(&items, &req("marker=9&limit=500"), 5).unwrap();
    assert_eq!(page, &[10, 11, 12, 13, 14]);
}

#[test]
fn test_marker_limiter_unknown_marker() {
    let items = servers();
    let err = limited_by_marker(&items, &req("marker=99"), DEFAULT_MAX_LIMIT).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid value '99' for parameter 'marker': marker not found"
    );
}

#[test]
fn test_marker_limiter_invalid_marker() {
    let items = servers();
    assert_invalid(
        limited_by_marker(&items, &req("marker=-2"), DEFAULT_MAX_LIMIT),
        "marker",
    );
}
