use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use barbershop_api_structs::dtos::MessageDTO;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarberError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

impl actix_web::error::ResponseError for BarberError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageDTO::new(self.to_string()))
    }
}

/// Malformed or undecodable request bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    BarberError::BadClientData(err.to_string()).into()
}

/// Path segments that could not be parsed, e.g. an id that is not an ObjectId
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    BarberError::BadClientData(err.to_string()).into()
}
