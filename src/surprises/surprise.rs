use crate::{
    surprises::{Occasion, SealedRevelation, ShareTokenHash, SurpriseId},
    users::UserId,
};
use time::OffsetDateTime;
use uuid::Uuid;

/// Persisted surprise. Revelation contents and the password are stored as encryption envelopes,
/// the share token only as its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surprise {
    pub id: SurpriseId,
    pub owner_id: UserId,
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    pub revelations: Vec<SealedRevelation>,
    pub password: Option<String>,
    pub token_hash: ShareTokenHash,
    pub expires_at: Option<OffsetDateTime>,
    pub is_public: bool,
    pub view_count: u64,
    pub last_viewed_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Surprise {
    /// Surprise is expired once the current instant is past `expires_at`.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }

    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }
}
