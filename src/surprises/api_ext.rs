mod created_surprise;
mod pagination;
mod revealed_surprise;
mod surprise_summary;
mod surprises_page;

pub use self::{
    created_surprise::CreatedSurprise, pagination::Pagination,
    revealed_surprise::RevealedSurprise, surprise_summary::SurpriseSummary,
    surprises_page::SurprisesPage,
};

use crate::{
    api::Api,
    error::Error as SurprisesError,
    surprises::{
        OwnedRecord, Revelation, SealedRevelation, SealedSurprise, Surprise, SurpriseId,
        SurpriseParams, SurpriseStore, UnlockOutcome, unlock,
    },
    users::User,
};
use anyhow::{anyhow, bail};
use time::OffsetDateTime;
use tracing::{debug, error, warn};
use url::Url;
use validator::Validate;

/// Maximum number of attempts to generate a share token with a unique hash.
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Maximum number of surprises returned within a single page.
const MAX_PAGE_LIMIT: u32 = 100;

pub struct SurprisesApiExt<'a, S: SurpriseStore> {
    api: &'a Api<S>,
}

impl<'a, S: SurpriseStore> SurprisesApiExt<'a, S> {
    /// Creates Surprises API.
    pub fn new(api: &'a Api<S>) -> Self {
        Self { api }
    }

    /// Creates a new surprise. The returned share token isn't stored anywhere and cannot be
    /// recovered later.
    pub async fn create_surprise(
        &self,
        user: &User,
        params: SurpriseParams,
    ) -> anyhow::Result<CreatedSurprise> {
        let sealed = self.seal(params)?;

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let token = self.api.tokens.generate()?;
            let token_hash = self.api.tokens.hash(&token)?;
            let Some(surprise) = self
                .api
                .store
                .insert_surprise(user.id, &token_hash, &sealed)
                .await?
            else {
                warn!(
                    user.id = %user.id,
                    attempt,
                    "Share token hash collision, regenerating the token."
                );
                continue;
            };

            debug!(user.id = %user.id, surprise.id = %surprise.id, "Created a new surprise.");
            return Ok(CreatedSurprise {
                share_url: self.share_url(&token)?,
                id: surprise.id,
                token,
                title: surprise.title,
                occasion: surprise.occasion,
                template_id: surprise.template_id,
                revelations_count: surprise.revelations.len(),
                has_password: surprise.password.is_some(),
                expires_at: surprise.expires_at,
                is_public: surprise.is_public,
                created_at: surprise.created_at,
            });
        }

        bail!("Failed to generate a unique share token after {MAX_TOKEN_ATTEMPTS} attempts.")
    }

    /// Reveals the surprise addressed by the share token: checks visibility, expiry and the
    /// password (in that order), decrypts every revelation and counts the view.
    pub async fn reveal_surprise(
        &self,
        token: &str,
        password: Option<&str>,
        requester: Option<&User>,
    ) -> anyhow::Result<RevealedSurprise> {
        let token_hash = self.api.tokens.hash(token)?;
        let Some(surprise) = self
            .api
            .store
            .get_surprise_by_token_hash(&token_hash, requester.map(|user| user.id))
            .await?
        else {
            bail!(SurprisesError::not_found());
        };

        if surprise.is_expired(OffsetDateTime::now_utc()) {
            bail!(SurprisesError::expired());
        }

        let outcome = unlock(&self.api.cipher, surprise.password.as_deref(), password)
            .map_err(|err| {
                error!(
                    surprise.id = %surprise.id,
                    "Failed to open surprise password envelope: {err:?}"
                );
                SurprisesError::crypto_integrity(err)
            })?;
        match outcome {
            UnlockOutcome::Unlocked => {}
            UnlockOutcome::PasswordRequired => {
                debug!(surprise.id = %surprise.id, "Surprise requires a password.");
                bail!(SurprisesError::password_required());
            }
            UnlockOutcome::InvalidPassword => {
                debug!(surprise.id = %surprise.id, "Incorrect surprise password.");
                bail!(SurprisesError::invalid_password());
            }
        }

        let revelations = self.open_revelations(&surprise)?;
        let Some(view_count) = self
            .api
            .store
            .increment_surprise_view_count(surprise.id)
            .await?
        else {
            bail!(SurprisesError::not_found());
        };

        Ok(RevealedSurprise {
            id: surprise.id,
            title: surprise.title,
            occasion: surprise.occasion,
            template_id: surprise.template_id,
            revelations,
            has_password: surprise.password.is_some(),
            is_public: surprise.is_public,
            expires_at: surprise.expires_at,
            created_at: surprise.created_at,
            view_count,
        })
    }

    /// Replaces all owner-editable fields of the surprise, re-encrypting revelations and the
    /// password. The share token stays the same.
    pub async fn update_surprise(
        &self,
        user: &User,
        id: SurpriseId,
        params: SurpriseParams,
    ) -> anyhow::Result<SurpriseSummary> {
        let sealed = self.seal(params)?;
        let surprise = Self::owned(
            user,
            id,
            self.api.store.update_surprise(id, user.id, &sealed).await?,
        )?;

        debug!(user.id = %user.id, surprise.id = %id, "Updated surprise.");
        Ok(SurpriseSummary::from(&surprise))
    }

    /// Permanently removes the surprise.
    pub async fn delete_surprise(&self, user: &User, id: SurpriseId) -> anyhow::Result<()> {
        Self::owned(user, id, self.api.store.remove_surprise(id, user.id).await?)?;

        debug!(user.id = %user.id, surprise.id = %id, "Deleted surprise.");
        Ok(())
    }

    /// Retrieves the summary of the surprise owned by the user.
    pub async fn get_surprise(
        &self,
        user: &User,
        id: SurpriseId,
    ) -> anyhow::Result<SurpriseSummary> {
        let record = match self.api.store.get_surprise(id).await? {
            Some(surprise) if surprise.owner_id == user.id => OwnedRecord::Found(surprise),
            Some(_) => OwnedRecord::NotOwned,
            None => OwnedRecord::Missing,
        };

        Ok(SurpriseSummary::from(&Self::owned(user, id, record)?))
    }

    /// Lists the surprises owned by the user, newest first.
    pub async fn list_surprises(
        &self,
        user: &User,
        page: u32,
        limit: u32,
    ) -> anyhow::Result<SurprisesPage> {
        if page == 0 {
            bail!(SurprisesError::client("Page number must be greater than 0."));
        }

        if limit == 0 || limit > MAX_PAGE_LIMIT {
            bail!(SurprisesError::client(format!(
                "Page limit must be between 1 and {MAX_PAGE_LIMIT}."
            )));
        }

        let (surprises, total) = self
            .api
            .store
            .get_user_surprises(user.id, page, limit)
            .await?;

        Ok(SurprisesPage {
            surprises: surprises.iter().map(SurpriseSummary::from).collect(),
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Validates parameters and encrypts all secret parts of the surprise.
    fn seal(&self, params: SurpriseParams) -> anyhow::Result<SealedSurprise> {
        if let Err(errors) = params.validate() {
            bail!(SurprisesError::validation(errors));
        }

        let revelations = params
            .revelations
            .into_iter()
            .map(|revelation| {
                Ok(SealedRevelation {
                    kind: revelation.kind,
                    content: self.api.cipher.encrypt(&revelation.content)?.to_string(),
                    order: revelation.order,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let password = params
            .password
            .map(|password| {
                self.api
                    .cipher
                    .encrypt(&password)
                    .map(|envelope| envelope.to_string())
            })
            .transpose()?;

        Ok(SealedSurprise {
            title: params.title,
            occasion: params.occasion,
            template_id: params.template_id,
            revelations,
            password,
            expires_at: params.expires_at,
            is_public: params.is_public,
        })
    }

    /// Decrypts all revelations and sorts them by their order. A single corrupted revelation
    /// fails the whole surprise.
    fn open_revelations(&self, surprise: &Surprise) -> anyhow::Result<Vec<Revelation>> {
        let mut revelations = surprise
            .revelations
            .iter()
            .map(|revelation| {
                Ok(Revelation {
                    kind: revelation.kind,
                    content: self.api.cipher.decrypt(&revelation.content)?,
                    order: revelation.order,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|err| {
                error!(
                    surprise.id = %surprise.id,
                    "Failed to open surprise revelation envelope: {err:?}"
                );
                SurprisesError::crypto_integrity(err)
            })?;

        revelations.sort_by_key(|revelation| revelation.order);
        Ok(revelations)
    }

    /// Builds `<public_url>/surprise/<token>`, keeping any path the public URL already has.
    fn share_url(&self, token: &str) -> anyhow::Result<Url> {
        let mut share_url = self.api.config.public_url.clone();
        share_url
            .path_segments_mut()
            .map_err(|_| anyhow!("Public URL cannot be used as a base for share URLs."))?
            .pop_if_empty()
            .push("surprise")
            .push(token);

        Ok(share_url)
    }

    fn owned(
        user: &User,
        id: SurpriseId,
        record: OwnedRecord<Surprise>,
    ) -> anyhow::Result<Surprise> {
        match record {
            OwnedRecord::Found(surprise) => Ok(surprise),
            OwnedRecord::Missing => bail!(SurprisesError::not_found()),
            OwnedRecord::NotOwned => {
                warn!(
                    user.id = %user.id,
                    surprise.id = %id,
                    "Attempted to access surprise owned by another user."
                );
                bail!(SurprisesError::ownership_mismatch(format!(
                    "Surprise ({id}) is owned by another user."
                )))
            }
        }
    }
}

impl<S: SurpriseStore> Api<S> {
    /// Returns an API to work with surprises.
    pub fn surprises(&self) -> SurprisesApiExt<'_, S> {
        SurprisesApiExt::new(self)
    }
}
