use super::headers::{header_value, vary_values};
use monostore_web::{
    CorsDecision, Headers, PreflightRejection, SimpleRejection, constants::header,
};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::SimpleAccepted { headers } => headers,
        other => panic!("expected accepted simple request, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::PreflightAccepted { headers, status } => (headers, status),
        other => panic!("expected accepted preflight, got {:?}", other),
    }
}

pub fn assert_simple_rejected(decision: CorsDecision) -> SimpleRejection {
    match decision {
        CorsDecision::SimpleRejected(rejection) => rejection,
        other => panic!("expected rejected simple request, got {:?}", other),
    }
}

pub fn assert_preflight_rejected(decision: CorsDecision) -> PreflightRejection {
    match decision {
        CorsDecision::PreflightRejected(rejection) => rejection,
        other => panic!("expected rejected preflight, got {:?}", other),
    }
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(header_value(headers, name), Some(expected), "header {name}");
}

pub fn assert_no_allow_origin(headers: &Headers) {
    assert!(
        header_value(headers, header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none(),
        "unexpected Access-Control-Allow-Origin in {headers:?}"
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
