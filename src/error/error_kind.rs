/// Describes the surprise service specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the malformed or out-of-range input on the client side.
    ClientError,
    /// No accessible surprise matches the token or identifier.
    NotFound,
    /// The surprise exists, but belongs to another user. Reported to the client as `NotFound`.
    OwnershipMismatch,
    /// The surprise exists, but is past its validity window.
    Expired,
    /// The surprise is password protected and no password was supplied.
    PasswordRequired,
    /// The supplied password doesn't match the stored one.
    InvalidPassword,
    /// Stored envelope is malformed or failed authentication.
    CryptoIntegrity,
    /// Unknown error.
    Unknown,
}

impl ErrorKind {
    /// Machine-readable code included into the error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ClientError => "VALIDATION_ERROR",
            Self::NotFound | Self::OwnershipMismatch => "NOT_FOUND",
            Self::Expired => "EXPIRED",
            Self::PasswordRequired => "PASSWORD_REQUIRED",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::CryptoIntegrity | Self::Unknown => "INTERNAL_ERROR",
        }
    }

    /// Returns `true` if the error is caused by the server and must never be exposed as is.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::CryptoIntegrity | Self::Unknown)
    }
}
