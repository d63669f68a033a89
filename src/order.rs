use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

const REQUIRED: &str = "required";

/// Postal address an order ships to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub street: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    /// Free-form; not every country has states or provinces.
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(alias = "zip", deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub zip_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub country: String,
}

/// Order submission as decoded from an untrusted request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub payment_method: String,
}

/// An order request that passed every field rule. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidOrderRequest {
    shipping_address: Address,
    payment_method: String,
}

impl ValidOrderRequest {
    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn into_parts(self) -> (Address, String) {
        (self.shipping_address, self.payment_method)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Wire name of the field, dotted for nested fields (`shippingAddress.city`).
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn required<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            reason: REQUIRED.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Every rule an order request failed, sorted by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrderValidationErrors {
    errors: Vec<FieldError>,
}

impl OrderValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

impl fmt::Display for OrderValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order request rejected: ")?;
        for (idx, error) in self.errors.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for OrderValidationErrors {}

#[derive(Debug, Error)]
pub enum OrderRequestError {
    #[error("malformed order request body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] OrderValidationErrors),
}

impl OrderRequest {
    /// Decodes a JSON body and validates it in one step.
    ///
    /// `null` and missing fields decode fine and are reported as validation
    /// failures; only undecodable bodies are [`OrderRequestError::Malformed`].
    pub fn from_json(body: &[u8]) -> Result<ValidOrderRequest, OrderRequestError> {
        let request: OrderRequest = serde_json::from_slice(body)?;
        Ok(request.into_validated()?)
    }

    /// Applies every field rule; all-or-nothing.
    pub fn into_validated(self) -> Result<ValidOrderRequest, OrderValidationErrors> {
        let mut errors = Vec::new();

        if let Err(report) = Validate::validate(&self) {
            collect_field_errors(&report, "", &mut errors);
        }

        match &self.shipping_address {
            None => errors.push(FieldError::required("shippingAddress")),
            Some(address) => {
                if let Err(report) = address.validate() {
                    collect_field_errors(&report, "shippingAddress.", &mut errors);
                }
            }
        }

        match self.shipping_address {
            Some(shipping_address) if errors.is_empty() => Ok(ValidOrderRequest {
                shipping_address,
                payment_method: self.payment_method,
            }),
            _ => {
                errors.sort_by(|a, b| a.field.cmp(&b.field));
                debug!(failed = errors.len(), "order request rejected");
                Err(OrderValidationErrors { errors })
            }
        }
    }
}

impl TryFrom<OrderRequest> for ValidOrderRequest {
    type Error = OrderValidationErrors;

    fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
        request.into_validated()
    }
}

/// Reads a string field, treating JSON `null` like an absent value.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new(REQUIRED))
    } else {
        Ok(())
    }
}

fn collect_field_errors(
    report: &validator::ValidationErrors,
    prefix: &str,
    out: &mut Vec<FieldError>,
) {
    for (field, violations) in report.field_errors() {
        for violation in violations.iter() {
            out.push(FieldError {
                field: format!("{prefix}{}", camel_case(&field)),
                reason: violation.code.to_string(),
            });
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[path = "order_test.rs"]
mod order_test;
