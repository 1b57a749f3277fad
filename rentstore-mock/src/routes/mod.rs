pub mod customers;
pub mod genres;
pub mod movies;
pub mod rentals;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use tracing::debug;

use crate::state::AppState;

pub const AUTH_HEADER: &str = "x-auth-token";

/// Plain-text error response, the way the store answers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(kind: &str) -> Self {
        ApiError {
            status: StatusCode::NOT_FOUND,
            message: format!("The {} with the given ID was not found.", kind),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Count every request and reject those without the right token.
pub async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    state.record_request();

    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok());
    match token {
        None => {
            debug!(uri = %request.uri(), "Rejected request without token");
            (StatusCode::UNAUTHORIZED, "Access denied. No token provided.").into_response()
        }
        Some(token) if token != state.token() => {
            debug!(uri = %request.uri(), "Rejected request with invalid token");
            (StatusCode::BAD_REQUEST, "Invalid token.").into_response()
        }
        Some(_) => next.run(request).await,
    }
}

/// Length check matching the store's string rules.
pub(crate) fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min {
        return Err(ApiError::bad_request(format!(
            "\"{}\" length must be at least {} characters long",
            field, min
        )));
    }
    if len > max {
        return Err(ApiError::bad_request(format!(
            "\"{}\" length must be less than or equal to {} characters long",
            field, max
        )));
    }
    Ok(())
}

/// Range check for numeric fields.
pub(crate) fn check_range(field: &str, value: f64, max: f64) -> Result<(), ApiError> {
    if !(0.0..=max).contains(&value) {
        return Err(ApiError::bad_request(format!(
            "\"{}\" must be between 0 and {}",
            field, max
        )));
    }
    Ok(())
}
