use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};
use uuid::Uuid;

/// Unique identifier of the account that owns surprises.
#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Deref for UserId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::users::UserId;
    use uuid::uuid;

    #[test]
    fn default() {
        assert!(UserId::default().is_nil());
    }

    #[test]
    fn display() {
        assert_eq!(
            UserId::from(uuid!("00000000-0000-0000-0000-000000000001")).to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }
}
