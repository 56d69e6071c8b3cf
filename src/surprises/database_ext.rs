mod raw_surprise;

use self::raw_surprise::RawSurprise;
use crate::{
    database::Database,
    surprises::{OwnedRecord, SealedSurprise, ShareTokenHash, Surprise, SurpriseId, SurpriseStore},
    users::UserId,
};
use sqlx::{query_as, query_scalar, types::Json};
use time::OffsetDateTime;

/// Columns selected for every surprise query.
const SURPRISE_COLUMNS: &str = "id, user_id, title, occasion, template_id, revelations, \
password_envelope, token_hash, expires_at, is_public, view_count, last_viewed_at, created_at, \
updated_at";

/// Extends the primary database with the surprise related methods.
impl Database {
    /// Distinguishes between a surprise that doesn't exist and one owned by someone else, after an
    /// owner-guarded statement didn't match any row.
    async fn classify_surprise_miss(
        &self,
        id: SurpriseId,
    ) -> anyhow::Result<OwnedRecord<Surprise>> {
        let exists: bool = query_scalar("SELECT EXISTS(SELECT 1 FROM surprises WHERE id = $1)")
            .bind(*id)
            .fetch_one(&self.pool)
            .await?;

        Ok(if exists {
            OwnedRecord::NotOwned
        } else {
            OwnedRecord::Missing
        })
    }
}

impl SurpriseStore for Database {
    async fn insert_surprise(
        &self,
        owner_id: UserId,
        token_hash: &ShareTokenHash,
        surprise: &SealedSurprise,
    ) -> anyhow::Result<Option<Surprise>> {
        let now = OffsetDateTime::now_utc();
        let raw = query_as::<_, RawSurprise>(&format!(
            r#"
INSERT INTO surprises (id, user_id, title, occasion, template_id, revelations, password_envelope, token_hash, expires_at, is_public, view_count, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 0, $11, $11)
ON CONFLICT (token_hash) DO NOTHING
RETURNING {SURPRISE_COLUMNS}
            "#
        ))
        .bind(*SurpriseId::new())
        .bind(*owner_id)
        .bind(&surprise.title)
        .bind(surprise.occasion.as_str())
        .bind(surprise.template_id)
        .bind(Json(&surprise.revelations))
        .bind(surprise.password.as_deref())
        .bind(token_hash.as_str())
        .bind(surprise.expires_at)
        .bind(surprise.is_public)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(Surprise::try_from).transpose()
    }

    async fn get_surprise_by_token_hash(
        &self,
        token_hash: &ShareTokenHash,
        requester_id: Option<UserId>,
    ) -> anyhow::Result<Option<Surprise>> {
        let raw = query_as::<_, RawSurprise>(&format!(
            r#"
SELECT {SURPRISE_COLUMNS}
FROM surprises
WHERE token_hash = $1 AND (is_public OR user_id = $2)
            "#
        ))
        .bind(token_hash.as_str())
        .bind(requester_id.map(|id| *id))
        .fetch_optional(&self.pool)
        .await?;

        raw.map(Surprise::try_from).transpose()
    }

    async fn get_surprise(&self, id: SurpriseId) -> anyhow::Result<Option<Surprise>> {
        let raw = query_as::<_, RawSurprise>(&format!(
            "SELECT {SURPRISE_COLUMNS} FROM surprises WHERE id = $1"
        ))
        .bind(*id)
        .fetch_optional(&self.pool)
        .await?;

        raw.map(Surprise::try_from).transpose()
    }

    async fn update_surprise(
        &self,
        id: SurpriseId,
        owner_id: UserId,
        surprise: &SealedSurprise,
    ) -> anyhow::Result<OwnedRecord<Surprise>> {
        let raw = query_as::<_, RawSurprise>(&format!(
            r#"
UPDATE surprises
SET title = $3, occasion = $4, template_id = $5, revelations = $6, password_envelope = $7, expires_at = $8, is_public = $9, updated_at = $10
WHERE id = $1 AND user_id = $2
RETURNING {SURPRISE_COLUMNS}
            "#
        ))
        .bind(*id)
        .bind(*owner_id)
        .bind(&surprise.title)
        .bind(surprise.occasion.as_str())
        .bind(surprise.template_id)
        .bind(Json(&surprise.revelations))
        .bind(surprise.password.as_deref())
        .bind(surprise.expires_at)
        .bind(surprise.is_public)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(&self.pool)
        .await?;

        match raw {
            Some(raw) => Ok(OwnedRecord::Found(Surprise::try_from(raw)?)),
            None => self.classify_surprise_miss(id).await,
        }
    }

    async fn remove_surprise(
        &self,
        id: SurpriseId,
        owner_id: UserId,
    ) -> anyhow::Result<OwnedRecord<Surprise>> {
        let raw = query_as::<_, RawSurprise>(&format!(
            r#"
DELETE FROM surprises
WHERE id = $1 AND user_id = $2
RETURNING {SURPRISE_COLUMNS}
            "#
        ))
        .bind(*id)
        .bind(*owner_id)
        .fetch_optional(&self.pool)
        .await?;

        match raw {
            Some(raw) => Ok(OwnedRecord::Found(Surprise::try_from(raw)?)),
            None => self.classify_surprise_miss(id).await,
        }
    }

    async fn increment_surprise_view_count(&self, id: SurpriseId) -> anyhow::Result<Option<u64>> {
        let view_count: Option<i64> = query_scalar(
            r#"
UPDATE surprises
SET view_count = view_count + 1, last_viewed_at = $2
WHERE id = $1
RETURNING view_count
            "#,
        )
        .bind(*id)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(&self.pool)
        .await?;

        Ok(view_count.map(u64::try_from).transpose()?)
    }

    async fn get_user_surprises(
        &self,
        owner_id: UserId,
        page: u32,
        limit: u32,
    ) -> anyhow::Result<(Vec<Surprise>, u64)> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(limit);
        let raw = query_as::<_, RawSurprise>(&format!(
            r#"
SELECT {SURPRISE_COLUMNS}
FROM surprises
WHERE user_id = $1
ORDER BY created_at DESC, id DESC
LIMIT $2 OFFSET $3
            "#
        ))
        .bind(*owner_id)
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = query_scalar("SELECT COUNT(*) FROM surprises WHERE user_id = $1")
            .bind(*owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((
            raw.into_iter()
                .map(Surprise::try_from)
                .collect::<anyhow::Result<_>>()?,
            u64::try_from(total)?,
        ))
    }
}
