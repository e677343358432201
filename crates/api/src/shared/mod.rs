pub mod usecase;

use crate::error::BarberError;
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

/// Responds with a pretty printed json body
pub fn pretty_json<T: Serialize>(status: StatusCode, body: &T) -> Result<HttpResponse, BarberError> {
    let body = serde_json::to_string_pretty(body).map_err(|e| {
        error!("Unable to encode response body: {:?}", e);
        BarberError::InternalError
    })?;
    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(body))
}
