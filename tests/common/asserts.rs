use super::headers::{header_value, vary_values};
use cors_resolver::Headers;

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for header {name}"
    );
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    let actual = vary_values(headers);
    let expected = expected
        .iter()
        .map(|value| value.to_string())
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(actual, expected);
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        vary_values(headers).is_empty(),
        "expected no Vary entries, got {:?}",
        vary_values(headers)
    );
}
