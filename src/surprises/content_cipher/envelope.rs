use anyhow::{Context, bail};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Size of the per-envelope random salt in bytes.
pub const SALT_SIZE: usize = 64;
/// AES-256-GCM nonce size in bytes.
pub const IV_SIZE: usize = 16;
/// AES-256-GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Self-contained encrypted value, serialized as `hex(salt):hex(iv):hex(tag):hex(ciphertext)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_SIZE],
    pub iv: [u8; IV_SIZE],
    pub tag: [u8; TAG_SIZE],
    pub ciphertext: Vec<u8>,
}

impl Display for Envelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            hex::encode(self.salt),
            hex::encode(self.iv),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext)
        )
    }
}

impl FromStr for Envelope {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value.split(':').collect::<Vec<_>>();
        let [salt, iv, tag, ciphertext] = parts.as_slice() else {
            bail!("Envelope must consist of 4 parts, but got {}.", parts.len());
        };

        Ok(Self {
            salt: decode_fixed(salt).with_context(|| "Envelope salt is malformed.")?,
            iv: decode_fixed(iv).with_context(|| "Envelope IV is malformed.")?,
            tag: decode_fixed(tag).with_context(|| "Envelope tag is malformed.")?,
            ciphertext: hex::decode(ciphertext)
                .with_context(|| "Envelope ciphertext is malformed.")?,
        })
    }
}

fn decode_fixed<const N: usize>(value: &str) -> anyhow::Result<[u8; N]> {
    let mut bytes = [0u8; N];
    hex::decode_to_slice(value, &mut bytes)?;
    Ok(bytes)
}
