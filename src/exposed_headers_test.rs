use super::*;

#[test]
fn list_should_trim_and_deduplicate_case_insensitively() {
    let headers = ExposedHeaders::list([" X-Order-Id ", "x-order-id", "", "Set-Cookie"]);

    assert_eq!(
        headers.values,
        vec!["X-Order-Id".to_string(), "Set-Cookie".to_string()]
    );
}

#[test]
fn header_value_should_be_none_when_empty() {
    let headers = ExposedHeaders::default();

    assert!(headers.is_empty());
    assert_eq!(headers.header_value(), None);
}

#[test]
fn header_value_should_join_with_commas() {
    let headers = ExposedHeaders::list(["X-Order-Id", "X-Request-Id"]);

    assert_eq!(
        headers.header_value(),
        Some("X-Order-Id,X-Request-Id".to_string())
    );
}

#[test]
fn first_invalid_should_flag_wildcard_and_bad_tokens() {
    assert_eq!(ExposedHeaders::list(["*"]).first_invalid(), Some("*"));
    assert_eq!(
        ExposedHeaders::list(["X-Ok", "Not Ok"]).first_invalid(),
        Some("Not Ok")
    );
    assert_eq!(ExposedHeaders::list(["X-Ok"]).first_invalid(), None);
}
