use crate::{
    config::Config,
    surprises::{ContentCipher, ShareTokenCodec, SurpriseStore},
};
use anyhow::{Context, bail};

/// Collection of the services the HTTP layer works with.
pub struct Api<S: SurpriseStore> {
    pub config: Config,
    pub store: S,
    pub cipher: ContentCipher,
    pub tokens: ShareTokenCodec,
}

impl<S: SurpriseStore> Api<S> {
    /// Instantiates APIs collection with the specified config and store. Fails if any of the
    /// required secrets isn't configured.
    pub fn new(config: Config, store: S) -> anyhow::Result<Self> {
        let encryption_key = config
            .security
            .encryption_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .with_context(|| {
                "Content encryption key (security.encryption_key) is not configured."
            })?;
        let share_token_secret = config
            .security
            .share_token_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .with_context(|| {
                "Share token secret (security.share_token_secret) is not configured."
            })?;

        if config.public_url.cannot_be_a_base() {
            bail!(
                "Public URL ({}) cannot be used as a base for share URLs.",
                config.public_url
            );
        }

        Ok(Self {
            cipher: ContentCipher::new(encryption_key, config.security.kdf_iterations)?,
            tokens: ShareTokenCodec::new(share_token_secret.as_bytes())?,
            config,
            store,
        })
    }
}
