use crate::surprises::ContentCipher;
use openssl::memcmp;

/// Result of the password check performed before a surprise is revealed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Unlocked,
    PasswordRequired,
    InvalidPassword,
}

/// Checks the supplied password against the sealed one. Surprises without a password are always
/// unlocked, an empty supplied password is treated as a missing one.
pub fn unlock(
    cipher: &ContentCipher,
    sealed_password: Option<&str>,
    supplied_password: Option<&str>,
) -> anyhow::Result<UnlockOutcome> {
    let Some(sealed_password) = sealed_password else {
        return Ok(UnlockOutcome::Unlocked);
    };

    let Some(supplied_password) = supplied_password.filter(|password| !password.is_empty()) else {
        return Ok(UnlockOutcome::PasswordRequired);
    };

    let expected_password = cipher.decrypt(sealed_password)?;
    let matches = expected_password.len() == supplied_password.len()
        && memcmp::eq(expected_password.as_bytes(), supplied_password.as_bytes());

    Ok(if matches {
        UnlockOutcome::Unlocked
    } else {
        UnlockOutcome::InvalidPassword
    })
}
