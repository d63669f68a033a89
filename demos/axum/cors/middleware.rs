use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use monostore_web::{
    CorsDecision, Headers, PreflightRejection, RequestContext, SimpleRejection, constants::header,
};

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let owned_ctx = OwnedRequestContext::from_request(&request);
    let context = owned_ctx.as_request_context();

    match cors.check(&context) {
        CorsDecision::PreflightAccepted { headers, status } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
            bare_response(status, &headers, Body::empty())
        }
        CorsDecision::PreflightRejected(rejection) => preflight_rejection_response(rejection),
        CorsDecision::SimpleAccepted { headers } => {
            let mut response = next.run(request).await;
            apply_headers(response.headers_mut(), &headers);
            response
        }
        CorsDecision::SimpleRejected(rejection) => simple_rejection_response(rejection),
        CorsDecision::NotApplicable => next.run(request).await,
    }
}

fn bare_response(status: StatusCode, headers: &Headers, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    apply_headers(response.headers_mut(), headers);
    response
}

fn preflight_rejection_response(rejection: PreflightRejection) -> Response {
    let body = Body::from(format!("Preflight rejected: {}", rejection.reason));
    bare_response(StatusCode::FORBIDDEN, &rejection.headers, body)
}

fn simple_rejection_response(rejection: SimpleRejection) -> Response {
    let body = Body::from(format!("Request rejected: {}", rejection.reason));
    bare_response(StatusCode::FORBIDDEN, &rejection.headers, body)
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
