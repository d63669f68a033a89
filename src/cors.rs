use crate::context::RequestContext;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderCollection;
use crate::normalized_request::NormalizedRequest;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;
use crate::result::{
    CorsDecision, PreflightRejection, PreflightRejectionReason, SimpleRejection,
    SimpleRejectionReason,
};
use tracing::{debug, warn};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Built once at startup and shared read-only; evaluation never mutates it.
#[derive(Debug)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        if matches!(&options.origin, Origin::List(list) if list.is_empty()) {
            warn!("CORS origin whitelist is empty; every cross-origin request will be refused");
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let normalized_request = NormalizedRequest::new(request);
        let normalized_ctx = normalized_request.as_context();

        let decision = if normalized_request.is_options() {
            self.process_preflight(request, &normalized_ctx)
        } else {
            self.process_simple(request, &normalized_ctx)
        };

        match &decision {
            CorsDecision::PreflightRejected(rejection) => debug!(
                origin = request.origin.unwrap_or_default(),
                reason = %rejection.reason,
                "CORS preflight rejected"
            ),
            CorsDecision::SimpleRejected(rejection) => debug!(
                origin = request.origin.unwrap_or_default(),
                method = request.method,
                reason = %rejection.reason,
                "CORS request rejected"
            ),
            _ => {}
        }

        decision
    }

    fn process_preflight(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = match builder.build_origin_headers(original, normalized) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                return Self::reject_preflight(headers, PreflightRejectionReason::OriginNotAllowed);
            }
            OriginOutcome::Allow(headers) => headers,
        };

        let Some(requested_method) = normalized.access_control_request_method else {
            return Self::reject_preflight(
                builder.build_disallow_headers(),
                PreflightRejectionReason::MissingAccessControlRequestMethod,
            );
        };

        if !self.options.methods.allows_method(requested_method) {
            return Self::reject_preflight(
                builder.build_disallow_headers(),
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: original
                        .access_control_request_method
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                },
            );
        }

        if let Some(requested_headers) = normalized.access_control_request_headers
            && !self.options.allowed_headers.allows_headers(requested_headers)
        {
            return Self::reject_preflight(
                builder.build_disallow_headers(),
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: original
                        .access_control_request_headers
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                },
            );
        }

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());
        headers.extend(builder.build_max_age_header());

        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    fn process_simple(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = match builder.build_origin_headers(original, normalized) {
            OriginOutcome::Skip => return CorsDecision::NotApplicable,
            OriginOutcome::Disallow(headers) => {
                return Self::reject_simple(headers, SimpleRejectionReason::OriginNotAllowed);
            }
            OriginOutcome::Allow(headers) => headers,
        };

        if !self.options.methods.allows_method(normalized.method) {
            return Self::reject_simple(
                builder.build_disallow_headers(),
                SimpleRejectionReason::MethodNotAllowed {
                    method: original.method.to_string(),
                },
            );
        }

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());

        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn reject_preflight(
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }

    fn reject_simple(headers: HeaderCollection, reason: SimpleRejectionReason) -> CorsDecision {
        CorsDecision::SimpleRejected(SimpleRejection {
            headers: headers.into_headers(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
