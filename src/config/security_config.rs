use serde_derive::{Deserialize, Serialize};

/// Default number of PBKDF2 iterations used to derive content encryption keys.
const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Configuration for the authentication and content protection.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SecurityConfig {
    /// Secret key used to verify JWT tokens used for HTTP authentication. If not provided, HTTP
    /// authentication will be disabled and every request is treated as anonymous.
    pub jwt_secret: Option<String>,
    /// Expected `iss` claim of the JWT tokens.
    pub jwt_issuer: String,
    /// Expected `aud` claim of the JWT tokens.
    pub jwt_audience: String,
    /// Server-held secret the revelation and password encryption keys are derived from.
    pub encryption_key: Option<String>,
    /// Server-held secret used to salt share token hashes.
    pub share_token_secret: Option<String>,
    /// Number of PBKDF2 iterations used to derive a key for every envelope.
    pub kdf_iterations: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_issuer: "surprise-platform".to_string(),
            jwt_audience: "surprise-users".to_string(),
            encryption_key: None,
            share_token_secret: None,
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::SecurityConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(SecurityConfig::default(), @r###"
        jwt_issuer = 'surprise-platform'
        jwt_audience = 'surprise-users'
        kdf_iterations = 100000
        "###);

        let config = SecurityConfig {
            jwt_secret: Some("3024bf8975b03b84e405f36a7bacd1c1".to_string()),
            encryption_key: Some("content-key".to_string()),
            share_token_secret: Some("token-salt".to_string()),
            ..Default::default()
        };

        assert_toml_snapshot!(config, @r###"
        jwt_secret = '3024bf8975b03b84e405f36a7bacd1c1'
        jwt_issuer = 'surprise-platform'
        jwt_audience = 'surprise-users'
        encryption_key = 'content-key'
        share_token_secret = 'token-salt'
        kdf_iterations = 100000
        "###);
    }

    #[test]
    fn deserialization() {
        let config: SecurityConfig = toml::from_str(
            r#"
        jwt_issuer = 'surprise-platform'
    "#,
        )
        .unwrap();

        assert_eq!(config, SecurityConfig::default());

        let config: SecurityConfig = toml::from_str(
            r#"
        jwt_secret = '3024bf8975b03b84e405f36a7bacd1c1'
        encryption_key = 'content-key'
        share_token_secret = 'token-salt'
        kdf_iterations = 1000
    "#,
        )
        .unwrap();

        assert_eq!(
            config,
            SecurityConfig {
                jwt_secret: Some("3024bf8975b03b84e405f36a7bacd1c1".to_string()),
                encryption_key: Some("content-key".to_string()),
                share_token_secret: Some("token-salt".to_string()),
                kdf_iterations: 1000,
                ..Default::default()
            }
        );
    }
}
