use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use monostore_web::{OrderRequest, OrderRequestError};
use serde_json::json;
use tracing::info;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn create_order(body: Bytes) -> Result<Response, OrderRejection> {
    let order = OrderRequest::from_json(&body)?;
    info!(
        payment_method = order.payment_method(),
        country = %order.shipping_address().country,
        "order accepted"
    );

    let body = json!({
        "status": "accepted",
        "paymentMethod": order.payment_method(),
    });
    Ok((StatusCode::ACCEPTED, Json(body)).into_response())
}

pub struct OrderRejection(OrderRequestError);

impl From<OrderRequestError> for OrderRejection {
    fn from(err: OrderRequestError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OrderRejection {
    fn into_response(self) -> Response {
        let body = match self.0 {
            OrderRequestError::Invalid(errors) => json!({
                "error": "VALIDATION_ERROR",
                "message": errors.to_string(),
                "details": errors,
            }),
            OrderRequestError::Malformed(err) => json!({
                "error": "MALFORMED_BODY",
                "message": err.to_string(),
            }),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
