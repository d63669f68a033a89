//! CORS policy evaluation and order request validation for the monostore backend.
//!
//! Both halves are framework-agnostic: the serving layer hands [`Cors::check`] a
//! borrowed [`RequestContext`] and applies the returned headers, and decodes order
//! bodies through [`OrderRequest::from_json`].

mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod normalized_request;
mod options;
mod order;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{
    ConfigError, CorsConfig, ENV_ALLOW_CREDENTIALS, ENV_ALLOWED_HEADERS, ENV_ALLOWED_METHODS,
    ENV_ALLOWED_ORIGINS, ENV_EXPOSED_HEADERS, ENV_MAX_AGE_SECONDS,
};
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use normalized_request::NormalizedRequest;
pub use options::{CorsOptions, ValidationError};
pub use order::{
    Address, FieldError, OrderRequest, OrderRequestError, OrderValidationErrors,
    ValidOrderRequest,
};
pub use origin::{Origin, OriginDecision, OriginList};
pub use result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
pub use util::{equals_ignore_case, normalize_lower};
