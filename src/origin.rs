use crate::util::normalize_lower;
use indexmap::IndexSet;

const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Which request origins may receive CORS response headers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Origin {
    /// Any origin; answered with `Access-Control-Allow-Origin: *`.
    #[default]
    Any,
    /// Exact-match whitelist, compared case-insensitively.
    List(OriginList),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Any,
    Mirror,
    Disallow,
    Skip,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OriginList {
    entries: IndexSet<String>,
}

impl OriginList {
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(normalize_lower(candidate).as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OriginList {
    fn from_iter<I: IntoIterator<Item = S>>(values: I) -> Self {
        let entries = values
            .into_iter()
            .map(|value| normalize_lower(value.into().trim()))
            .collect();
        Self { entries }
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().collect())
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        if origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        match self {
            Origin::Any => OriginDecision::Any,
            Origin::List(list) if list.contains(origin) => OriginDecision::Mirror,
            Origin::List(_) => OriginDecision::Disallow,
        }
    }

    pub fn vary_on_disallow(&self) -> bool {
        !matches!(self, Origin::Any)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
