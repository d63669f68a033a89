use crate::util::{is_http_token, normalize_lower};
use indexmap::IndexMap;

/// Configuration mirror of the `Access-Control-Expose-Headers` response header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically trimming
    /// whitespace and removing blank or duplicate entries.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: IndexMap<String, String> = IndexMap::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            seen.entry(normalize_lower(&trimmed)).or_insert(trimmed);
        }

        Self {
            values: seen.into_values().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        self.values
            .iter()
            .map(String::as_str)
            .find(|value| !is_http_token(value) || *value == "*")
    }

    /// Serializes the configuration into a header-ready value.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
