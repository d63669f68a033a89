use monostore_web::constants::method;
use monostore_web::{
    AllowedHeaders, AllowedMethods, Cors, CorsConfig, CorsDecision, CorsOptions, ExposedHeaders,
    Origin, RequestContext,
};

#[derive(Default)]
pub struct CorsBuilder {
    origin: Option<Origin>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u64>,
    options_success_status: Option<u16>,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: u64) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn options_success_status(mut self, status: u16) -> Self {
        self.options_success_status = Some(status);
        self
    }

    pub fn build(self) -> Cors {
        let CorsOptions {
            origin: default_origin,
            methods: default_methods,
            allowed_headers: default_allowed_headers,
            exposed_headers: default_exposed_headers,
            credentials: default_credentials,
            max_age: default_max_age,
            options_success_status: default_status,
        } = CorsOptions::default();

        Cors::new(CorsOptions {
            origin: self.origin.unwrap_or(default_origin),
            methods: self.methods.unwrap_or(default_methods),
            allowed_headers: self.allowed_headers.unwrap_or(default_allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(default_exposed_headers),
            credentials: self.credentials.unwrap_or(default_credentials),
            max_age: self.max_age.or(default_max_age),
            options_success_status: self.options_success_status.unwrap_or(default_status),
        })
        .expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: None,
            access_control_request_headers: None,
        };
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let ctx = RequestContext {
            method: method::OPTIONS,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        };
        cors.check(&ctx)
    }
}

/// The policy the monostore backend ships with.
pub fn monostore() -> Cors {
    CorsConfig::default()
        .build()
        .expect("default monostore CORS configuration is valid")
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
