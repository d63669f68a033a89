use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::Origin;
use crate::util::is_serialized_origin;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds a client may cache a preflight answer.
    pub max_age: Option<u64>,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            options_success_status: 204,
        }
    }
}

/// Reasons a [`CorsOptions`] value is refused at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be combined with a wildcard origin; list the allowed origins explicitly"
    )]
    CredentialsRequireSpecificOrigin,
    #[error(
        "credentials cannot be combined with wildcard allowed headers; list the allowed headers explicitly"
    )]
    CredentialsRequireSpecificHeaders,
    #[error("allowed headers list cannot contain the wildcard \"*\"; use AllowedHeaders::Any")]
    AllowedHeadersListCannotContainWildcard,
    #[error("origin {0:?} is not a serialized origin of the form scheme://host[:port]")]
    InvalidOrigin(String),
    #[error("method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("preflight success status {0} must be a 2xx code")]
    InvalidSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.origin {
            Origin::Any if self.credentials => {
                return Err(ValidationError::CredentialsRequireSpecificOrigin);
            }
            Origin::Any => {}
            Origin::List(list) => {
                if let Some(invalid) = list.iter().find(|origin| !is_serialized_origin(origin)) {
                    return Err(ValidationError::InvalidOrigin(invalid.to_string()));
                }
            }
        }

        if let Some(invalid) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(invalid.to_string()));
        }

        if self.credentials && matches!(self.allowed_headers, AllowedHeaders::Any) {
            return Err(ValidationError::CredentialsRequireSpecificHeaders);
        }

        if self.allowed_headers.contains_wildcard() {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }

        if let Some(invalid) = self
            .allowed_headers
            .first_invalid()
            .or_else(|| self.exposed_headers.first_invalid())
        {
            return Err(ValidationError::InvalidHeaderName(invalid.to_string()));
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
