use crate::surprises::{SealedRevelation, Surprise};
use sqlx::{FromRow, types::Json};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub(super) struct RawSurprise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub occasion: String,
    pub template_id: Uuid,
    pub revelations: Json<Vec<SealedRevelation>>,
    pub password_envelope: Option<String>,
    pub token_hash: String,
    pub expires_at: Option<OffsetDateTime>,
    pub is_public: bool,
    pub view_count: i64,
    pub last_viewed_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<RawSurprise> for Surprise {
    type Error = anyhow::Error;

    fn try_from(raw: RawSurprise) -> Result<Self, Self::Error> {
        Ok(Surprise {
            id: raw.id.into(),
            owner_id: raw.user_id.into(),
            title: raw.title,
            occasion: raw.occasion.parse()?,
            template_id: raw.template_id,
            revelations: raw.revelations.0,
            password: raw.password_envelope,
            token_hash: raw.token_hash.into(),
            expires_at: raw.expires_at,
            is_public: raw.is_public,
            view_count: u64::try_from(raw.view_count)?,
            last_viewed_at: raw.last_viewed_at,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        })
    }
}
