use crate::constants::method;
use crate::context::RequestContext;
use std::borrow::Cow;

/// Lowercased copy of a [`RequestContext`] used for comparisons.
#[doc(hidden)]
pub struct NormalizedRequest<'a> {
    method: Cow<'a, str>,
    origin: Option<Cow<'a, str>>,
    access_control_request_method: Option<Cow<'a, str>>,
    access_control_request_headers: Option<Cow<'a, str>>,
}

impl<'a> NormalizedRequest<'a> {
    #[doc(hidden)]
    pub fn new(request: &RequestContext<'a>) -> Self {
        Self {
            method: Self::normalize_component(request.method),
            origin: Self::normalize_optional(request.origin),
            access_control_request_method: Self::normalize_optional(
                request.access_control_request_method,
            ),
            access_control_request_headers: Self::normalize_optional(
                request.access_control_request_headers,
            ),
        }
    }

    fn normalize_optional(value: Option<&'a str>) -> Option<Cow<'a, str>> {
        value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(Self::normalize_component)
    }

    fn normalize_component(value: &'a str) -> Cow<'a, str> {
        if value.is_ascii() {
            if value.bytes().any(|byte| byte.is_ascii_uppercase()) {
                Cow::Owned(value.to_ascii_lowercase())
            } else {
                Cow::Borrowed(value)
            }
        } else if value.chars().any(|ch| ch.is_uppercase()) {
            Cow::Owned(value.to_lowercase())
        } else {
            Cow::Borrowed(value)
        }
    }

    #[doc(hidden)]
    pub fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: self.method.as_ref(),
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }

    #[doc(hidden)]
    pub fn is_options(&self) -> bool {
        self.method.as_ref().eq_ignore_ascii_case(method::OPTIONS)
    }
}

#[cfg(test)]
#[path = "normalized_request_test.rs"]
mod normalized_request_test;
