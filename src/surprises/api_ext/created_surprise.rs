use crate::surprises::{Occasion, SurpriseId};
use serde::Serialize;
use time::OffsetDateTime;
use url::Url;
use uuid::Uuid;

/// Result of the surprise creation. The only place where the plaintext share token is ever
/// returned.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSurprise {
    pub id: SurpriseId,
    pub token: String,
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    pub revelations_count: usize,
    pub has_password: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    pub is_public: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub share_url: Url,
}
