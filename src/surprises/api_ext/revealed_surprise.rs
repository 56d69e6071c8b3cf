use crate::surprises::{Occasion, Revelation, SurpriseId};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Fully decrypted surprise returned to a viewer, revelations are sorted by their order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevealedSurprise {
    pub id: SurpriseId,
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    pub revelations: Vec<Revelation>,
    pub has_password: bool,
    pub is_public: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub view_count: u64,
}
