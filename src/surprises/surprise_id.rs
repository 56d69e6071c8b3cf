use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};
use uuid::Uuid;

/// Represents unique identifier of the surprise.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
#[serde(transparent)]
pub struct SurpriseId(Uuid);

impl SurpriseId {
    /// Creates a new unique surprise ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SurpriseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SurpriseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Deref for SurpriseId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for SurpriseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
