use crate::headers::Headers;
use std::fmt;

/// Overall decision returned by [`crate::Cors::check`].
#[derive(Debug, Clone)]
pub enum CorsDecision {
    PreflightAccepted { headers: Headers, status: u16 },
    PreflightRejected(PreflightRejection),
    SimpleAccepted { headers: Headers },
    SimpleRejected(SimpleRejection),
    /// The request carried no `Origin` header; CORS does not apply.
    NotApplicable,
}

impl CorsDecision {
    /// Headers the serving layer should attach, empty when CORS does not apply.
    pub fn headers(&self) -> Option<&Headers> {
        match self {
            Self::PreflightAccepted { headers, .. } | Self::SimpleAccepted { headers } => {
                Some(headers)
            }
            Self::PreflightRejected(rejection) => Some(&rejection.headers),
            Self::SimpleRejected(rejection) => Some(&rejection.headers),
            Self::NotApplicable => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::PreflightRejected(_) | Self::SimpleRejected(_))
    }
}

/// A refused preflight. `headers` never contains `Access-Control-Allow-Origin`.
#[derive(Debug, Clone)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { requested_method: String },
    HeadersNotAllowed { requested_headers: String },
    MissingAccessControlRequestMethod,
}

impl fmt::Display for PreflightRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginNotAllowed => write!(f, "origin not allowed"),
            Self::MethodNotAllowed { requested_method } => {
                write!(f, "method '{requested_method}' not allowed")
            }
            Self::HeadersNotAllowed { requested_headers } => {
                write!(f, "headers '{requested_headers}' not allowed")
            }
            Self::MissingAccessControlRequestMethod => {
                write!(f, "Access-Control-Request-Method header missing")
            }
        }
    }
}

/// A refused actual (non-preflight) cross-origin request.
#[derive(Debug, Clone)]
pub struct SimpleRejection {
    pub headers: Headers,
    pub reason: SimpleRejectionReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleRejectionReason {
    OriginNotAllowed,
    MethodNotAllowed { method: String },
}

impl fmt::Display for SimpleRejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginNotAllowed => write!(f, "origin not allowed"),
            Self::MethodNotAllowed { method } => write!(f, "method '{method}' not allowed"),
        }
    }
}
