use crate::constants::method;
use crate::util::{equals_ignore_case, is_http_token};

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, dropping case-insensitive duplicates.
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
                .any(|existing| equals_ignore_case(existing, &trimmed))
            {
                deduped.push(trimmed);
            }
        }

        Self { values: deduped }
    }

    pub fn allows_method(&self, method: &str) -> bool {
        let method = method.trim();
        !method.is_empty()
            && self
                .values
                .iter()
                .any(|allowed| equals_ignore_case(allowed, method))
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.values
            .iter()
            .map(String::as_str)
            .find(|value| !is_http_token(value))
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
