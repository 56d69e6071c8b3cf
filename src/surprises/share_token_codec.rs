use crate::surprises::ShareTokenHash;
use anyhow::bail;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use openssl::{
    hash::MessageDigest,
    pkey::{PKey, Private},
    sign::Signer,
};

/// Number of random bytes in a share token.
const TOKEN_SIZE: usize = 32;

/// Generates share tokens and derives their lookup hashes. Only hashes are ever persisted, the
/// token itself is handed to the owner exactly once.
#[derive(Clone)]
pub struct ShareTokenCodec {
    key: PKey<Private>,
}

impl ShareTokenCodec {
    pub fn new(secret: &[u8]) -> anyhow::Result<Self> {
        if secret.is_empty() {
            bail!("Share token secret cannot be empty.");
        }

        Ok(Self {
            key: PKey::hmac(secret)?,
        })
    }

    /// Generates a new URL-safe token from 32 cryptographically random bytes.
    pub fn generate(&self) -> anyhow::Result<String> {
        let mut bytes = [0u8; TOKEN_SIZE];
        openssl::rand::rand_bytes(&mut bytes)?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Computes a keyed, hex encoded HMAC-SHA256 hash of the token.
    pub fn hash(&self, token: &str) -> anyhow::Result<ShareTokenHash> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.key)?;
        signer.update(token.as_bytes())?;
        Ok(ShareTokenHash::from(hex::encode(signer.sign_to_vec()?)))
    }
}
