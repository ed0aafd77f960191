use api_problem::Problem;
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    match e {
        DomainError::PointNotFound { id } => {
            Problem::not_found(format!("Point {id} was not found")).with_code("point_not_found")
        }
        DomainError::UnknownItem => {
            Problem::validation("One or more item ids are not in the catalog")
                .with_code("unknown_item")
        }
        DomainError::Validation { field, message } => {
            Problem::validation(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => {
            // Log the internal detail but never expose it to the client.
            tracing::error!(error = %e, "Database error occurred");
            Problem::internal()
        }
    }
}

/// Handler error type: any Problem, producible from a `DomainError` with `?`.
pub struct ApiError(Problem);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(domain_error_to_problem(&e))
    }
}

impl From<Problem> for ApiError {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}
