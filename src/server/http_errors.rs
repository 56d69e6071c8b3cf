use crate::error::Error as SurprisesError;
use actix_web::{
    HttpRequest,
    error::{JsonPayloadError, QueryPayloadError},
};

/// Reports malformed JSON bodies the same way as any other invalid input.
pub fn json_payload_error(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    SurprisesError::client(format!("Invalid request body: {err}")).into()
}

/// Reports malformed query strings the same way as any other invalid input.
pub fn query_payload_error(err: QueryPayloadError, _: &HttpRequest) -> actix_web::Error {
    SurprisesError::client(format!("Invalid query string: {err}")).into()
}
