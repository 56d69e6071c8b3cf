use crate::users::UserId;
use serde::Deserialize;
use serde_with::{TimestampSeconds, serde_as};
use time::OffsetDateTime;

/// JWT claims struct.
#[serde_as]
#[derive(Debug, Deserialize, Eq, PartialEq)]
pub struct Claims {
    /// Identifier of the surprise owner.
    pub sub: UserId,
    /// Token expiration time (UTC timestamp).
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub exp: OffsetDateTime,
}

#[cfg(test)]
mod test {
    use crate::security::jwt::Claims;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<Claims>(
                r#"
        {
          "sub": "00000000-0000-0000-0000-000000000001",
          "iss": "surprise-platform",
          "aud": "surprise-users",
          "exp": 1262340000
        }"#
            )?,
            Claims {
                sub: uuid!("00000000-0000-0000-0000-000000000001").into(),
                exp: OffsetDateTime::from_unix_timestamp(1262340000)?,
            }
        );

        assert!(
            serde_json::from_str::<Claims>(r#"{ "sub": "dev@surprises.dev", "exp": 1262340000 }"#)
                .is_err()
        );

        Ok(())
    }
}
