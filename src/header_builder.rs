use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) enum OriginOutcome {
    Skip,
    Disallow(HeaderCollection),
    Allow(HeaderCollection),
}

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Resolves the origin against the normalized request and echoes the original bytes.
    pub(crate) fn build_origin_headers(
        &self,
        original: &RequestContext<'_>,
        normalized: &RequestContext<'_>,
    ) -> OriginOutcome {
        match self.options.origin.resolve(normalized.origin) {
            OriginDecision::Any => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string());
                OriginOutcome::Allow(headers)
            }
            OriginDecision::Mirror => match original.origin.map(str::trim) {
                Some(origin) if !origin.is_empty() => {
                    let mut headers = HeaderCollection::with_estimate(2);
                    headers.add_vary(header::ORIGIN);
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
                    OriginOutcome::Allow(headers)
                }
                _ => OriginOutcome::Disallow(self.build_disallow_headers()),
            },
            OriginDecision::Disallow => OriginOutcome::Disallow(self.build_disallow_headers()),
            OriginDecision::Skip => OriginOutcome::Skip,
        }
    }

    /// Headers for a refused request: only `Vary: Origin`, never an allow-origin value.
    pub(crate) fn build_disallow_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.origin.vary_on_disallow() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        if let Some(value) = self.options.methods.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        if let Some(value) = self.options.allowed_headers.header_value() {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        let exposed = &self.options.exposed_headers;
        if exposed.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(value) = exposed.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        if let Some(seconds) = self.options.max_age {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
            return headers;
        }
        HeaderCollection::new()
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
