//! Validated JSON extractor for automatic request validation.
//!
//! `ValidatedJson<T>` deserializes a JSON body and validates it using the
//! `validator` crate. Malformed bodies and failed validation are rejected
//! with 400 Bad Request, and validation failures carry one message per field
//! in `details`. Bodies over the configured size limit get 413.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use coupon_core::{validation_errors_to_coupon_error, CouponError};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use coupon_rest::extractors::ValidatedJson;
/// use coupon_service::CreateCouponRequest;
///
/// async fn create(ValidatedJson(request): ValidatedJson<CreateCouponRequest>) {
///     // request is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Converts a JSON rejection into a `CouponError`.
fn json_rejection_to_error(rejection: &JsonRejection) -> CouponError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            CouponError::validation("Expected request with `Content-Type: application/json`.")
        }
        JsonRejection::BytesRejection(_)
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
        {
            CouponError::PayloadTooLarge("Request body is too large.".to_string())
        }
        JsonRejection::JsonDataError(_) => {
            CouponError::validation(format!("Invalid request body: {}", rejection.body_text()))
        }
        _ => CouponError::validation(format!("Malformed JSON request: {}", rejection.body_text())),
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError(json_rejection_to_error(&rejection)))?;

        value
            .validate()
            .map_err(|errors| AppError(validation_errors_to_coupon_error(errors)))?;

        Ok(ValidatedJson(value))
    }
}
