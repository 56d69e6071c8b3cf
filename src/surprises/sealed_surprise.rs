use crate::surprises::{Occasion, SealedRevelation};
use time::OffsetDateTime;
use uuid::Uuid;

/// Owner-editable part of the surprise with all secrets already encrypted, written as a whole
/// on both creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedSurprise {
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    pub revelations: Vec<SealedRevelation>,
    /// Encrypted unlock password envelope, if the surprise is password protected.
    pub password: Option<String>,
    pub expires_at: Option<OffsetDateTime>,
    pub is_public: bool,
}
