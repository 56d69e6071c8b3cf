mod jwt;

use self::jwt::Claims;
use crate::{config::SecurityConfig, users::User};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

/// Authenticates surprise owners using bearer JWT tokens.
#[derive(Clone)]
pub struct Security {
    jwt: Option<(DecodingKey, Validation)>,
}

impl Security {
    pub fn new(config: &SecurityConfig) -> Self {
        let jwt = config
            .jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .map(|secret| {
                let mut validation = Validation::new(Algorithm::HS256);
                validation.set_issuer(&[&config.jwt_issuer]);
                validation.set_audience(&[&config.jwt_audience]);
                (DecodingKey::from_secret(secret.as_bytes()), validation)
            });

        Self { jwt }
    }

    /// Authenticates user using the JWT. Returns `None` if the token isn't valid or JWT
    /// authentication isn't configured.
    pub fn authenticate(&self, token: &str) -> Option<User> {
        let Some((ref key, ref validation)) = self.jwt else {
            debug!("JWT authentication isn't configured, treating request as anonymous.");
            return None;
        };

        match decode::<Claims>(token, key, validation) {
            Ok(data) => Some(User::new(data.claims.sub)),
            Err(err) => {
                debug!("Failed to validate JWT: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Security;
    use crate::tests::{mock_config, mock_jwt, mock_user};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use std::time::Duration;
    use time::OffsetDateTime;

    #[test]
    fn can_authenticate_with_valid_jwt() -> anyhow::Result<()> {
        let config = mock_config()?;
        let security = Security::new(&config.security);
        let user = mock_user()?;

        assert_eq!(
            security.authenticate(&mock_jwt(&config, user.id)?),
            Some(user)
        );

        Ok(())
    }

    #[test]
    fn rejects_invalid_jwt() -> anyhow::Result<()> {
        let config = mock_config()?;
        let security = Security::new(&config.security);
        let user = mock_user()?;
        let exp = (OffsetDateTime::now_utc() + Duration::from_secs(3600)).unix_timestamp();
        let sign = |sub: &serde_json::Value, iss: &str, aud: &str, exp: i64, secret: &str| {
            encode(
                &Header::default(),
                &json!({ "sub": sub, "iss": iss, "aud": aud, "exp": exp }),
                &EncodingKey::from_secret(secret.as_bytes()),
            )
        };

        let sub = json!(user.id);
        let (iss, aud) = ("surprise-platform", "surprise-users");
        let jwt_secret = config.security.jwt_secret.as_deref().unwrap_or_default();
        for jwt in [
            "not-a-jwt".to_string(),
            // Wrong secret.
            sign(&sub, iss, aud, exp, "another-secret")?,
            // Wrong issuer.
            sign(&sub, "someone-else", aud, exp, jwt_secret)?,
            // Wrong audience.
            sign(&sub, iss, "someone-else", exp, jwt_secret)?,
            // Expired.
            sign(&sub, iss, aud, 1262340000, jwt_secret)?,
            // Subject isn't a user ID.
            sign(&json!("dev@surprises.dev"), iss, aud, exp, jwt_secret)?,
        ] {
            assert_eq!(security.authenticate(&jwt), None);
        }

        Ok(())
    }

    #[test]
    fn anonymous_without_jwt_secret() -> anyhow::Result<()> {
        let config = mock_config()?;
        let jwt = mock_jwt(&config, mock_user()?.id)?;

        let mut config = config;
        config.security.jwt_secret = None;
        assert_eq!(Security::new(&config.security).authenticate(&jwt), None);

        Ok(())
    }
}
