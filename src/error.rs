mod error_kind;

use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};
use anyhow::anyhow;
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};
use validator::ValidationErrors;

pub use error_kind::ErrorKind;

/// Surprise service native error type.
#[derive(thiserror::Error)]
pub struct Error {
    root_cause: anyhow::Error,
    kind: ErrorKind,
}

impl Error {
    /// Creates a Client error instance with the given message.
    pub fn client<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates a Client error instance that carries structured validation details.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            root_cause: anyhow::Error::new(errors),
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates an error for a token or identifier that has no accessible surprise.
    pub fn not_found() -> Self {
        Self {
            root_cause: anyhow!("Surprise not found or access denied."),
            kind: ErrorKind::NotFound,
        }
    }

    /// Creates an error for a write attempted by somebody other than the owner.
    pub fn ownership_mismatch<M>(message: M) -> Self
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::OwnershipMismatch,
        }
    }

    pub fn expired() -> Self {
        Self {
            root_cause: anyhow!("This surprise has expired."),
            kind: ErrorKind::Expired,
        }
    }

    pub fn password_required() -> Self {
        Self {
            root_cause: anyhow!("This surprise is password protected."),
            kind: ErrorKind::PasswordRequired,
        }
    }

    pub fn invalid_password() -> Self {
        Self {
            root_cause: anyhow!("Incorrect password."),
            kind: ErrorKind::InvalidPassword,
        }
    }

    /// Creates an error for an envelope that cannot be opened (corruption or tampering).
    pub fn crypto_integrity(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::CryptoIntegrity,
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn client_message(&self) -> String {
        match self.kind {
            ErrorKind::ClientError if self.validation_errors().is_some() => {
                "Please check your input.".to_string()
            }
            ErrorKind::NotFound | ErrorKind::OwnershipMismatch => {
                "Surprise not found or access denied.".to_string()
            }
            kind if kind.is_internal() => "Internal Server Error".to_string(),
            _ => self.root_cause.to_string(),
        }
    }

    fn validation_errors(&self) -> Option<&ValidationErrors> {
        self.root_cause.downcast_ref::<ValidationErrors>()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound | ErrorKind::OwnershipMismatch => StatusCode::NOT_FOUND,
            ErrorKind::Expired => StatusCode::GONE,
            ErrorKind::PasswordRequired | ErrorKind::InvalidPassword => StatusCode::UNAUTHORIZED,
            ErrorKind::CryptoIntegrity | ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = json!({
            "message": self.client_message(),
            "code": self.kind.code(),
        });

        if self.kind == ErrorKind::PasswordRequired {
            body["requiresPassword"] = json!(true);
        }

        if let Some(details) = self
            .validation_errors()
            .and_then(|errors| serde_json::to_value(errors).ok())
        {
            body["details"] = details;
        }

        HttpResponseBuilder::new(self.status_code()).json(body)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        err.downcast::<Error>().unwrap_or_else(|root_cause| Error {
            root_cause,
            kind: ErrorKind::Unknown,
        })
    }
}
