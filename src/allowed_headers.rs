use crate::util::{equals_ignore_case, is_http_token, split_header_list};

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: always allowed and emits "*" on preflight
    Any,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if !deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&trimmed))
            {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Every entry of a comma-separated `Access-Control-Request-Headers` value must be listed.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => split_header_list(request_headers).all(|header| {
                allowed
                    .iter()
                    .any(|allowed_header| equals_ignore_case(allowed_header, header))
            }),
        }
    }

    pub(crate) fn contains_wildcard(&self) -> bool {
        matches!(self, Self::List(values) if values.iter().any(|value| value == "*"))
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| *value != "*" && !is_http_token(value)),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Any => Some("*".to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
