mod envelope;

use anyhow::{Context, bail};
use openssl::{
    hash::MessageDigest,
    pkcs5::pbkdf2_hmac,
    symm::{Cipher, Crypter, Mode},
};

pub use self::envelope::Envelope;
use self::envelope::{IV_SIZE, SALT_SIZE, TAG_SIZE};

/// Size of the derived AES-256 key in bytes.
const KEY_SIZE: usize = 32;

/// Encrypts and decrypts revelation contents and passwords with AES-256-GCM. Every envelope gets
/// its own key derived from the server secret and a random salt, the salt is also authenticated
/// as additional data.
#[derive(Clone)]
pub struct ContentCipher {
    secret: Vec<u8>,
    kdf_iterations: u32,
}

impl ContentCipher {
    /// Creates a new cipher from the server secret and the number of PBKDF2 iterations.
    pub fn new(secret: impl Into<Vec<u8>>, kdf_iterations: u32) -> anyhow::Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            bail!("Encryption key cannot be empty.");
        }

        if kdf_iterations == 0 {
            bail!("Number of key derivation iterations must be positive.");
        }

        Ok(Self {
            secret,
            kdf_iterations,
        })
    }

    /// Encrypts UTF-8 plaintext into a new envelope with a fresh salt and IV.
    pub fn encrypt(&self, plaintext: &str) -> anyhow::Result<Envelope> {
        let mut salt = [0u8; SALT_SIZE];
        openssl::rand::rand_bytes(&mut salt)?;
        let mut iv = [0u8; IV_SIZE];
        openssl::rand::rand_bytes(&mut iv)?;

        let cipher = Cipher::aes_256_gcm();
        let key = self.derive_key(&salt)?;
        let mut crypter = Crypter::new(cipher, Mode::Encrypt, &key, Some(&iv))?;
        crypter.aad_update(&salt)?;

        let mut ciphertext = vec![0u8; plaintext.len() + cipher.block_size()];
        let mut count = crypter.update(plaintext.as_bytes(), &mut ciphertext)?;
        count += crypter.finalize(&mut ciphertext[count..])?;
        ciphertext.truncate(count);

        let mut tag = [0u8; TAG_SIZE];
        crypter.get_tag(&mut tag)?;

        Ok(Envelope {
            salt,
            iv,
            tag,
            ciphertext,
        })
    }

    /// Parses and decrypts a serialized envelope. Fails if the envelope is malformed, was
    /// produced with a different secret, or any of its parts were modified.
    pub fn decrypt(&self, envelope: &str) -> anyhow::Result<String> {
        let envelope = envelope.parse::<Envelope>()?;

        let cipher = Cipher::aes_256_gcm();
        let key = self.derive_key(&envelope.salt)?;
        let mut crypter = Crypter::new(cipher, Mode::Decrypt, &key, Some(&envelope.iv))?;
        crypter.aad_update(&envelope.salt)?;
        crypter.set_tag(&envelope.tag)?;

        let mut plaintext = vec![0u8; envelope.ciphertext.len() + cipher.block_size()];
        let mut count = crypter.update(&envelope.ciphertext, &mut plaintext)?;
        count += crypter
            .finalize(&mut plaintext[count..])
            .with_context(|| "Envelope failed authentication.")?;
        plaintext.truncate(count);

        String::from_utf8(plaintext).with_context(|| "Decrypted content is not valid UTF-8.")
    }

    fn derive_key(&self, salt: &[u8]) -> anyhow::Result<[u8; KEY_SIZE]> {
        let mut key = [0u8; KEY_SIZE];
        pbkdf2_hmac(
            &self.secret,
            salt,
            self.kdf_iterations as usize,
            MessageDigest::sha256(),
            &mut key,
        )?;
        Ok(key)
    }
}
