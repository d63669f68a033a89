use crate::constants::header;
use indexmap::IndexMap;

/// Response headers in the order the engine produced them.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_string(), value);
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = self
            .headers
            .get(header::VARY)
            .map(|existing| {
                existing
                    .split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.into();
        entries.extend(
            incoming
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty()),
        );

        if entries.is_empty() {
            self.headers.shift_remove(header::VARY);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.headers
            .insert(header::VARY.to_string(), deduped.join(", "));
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(&name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
