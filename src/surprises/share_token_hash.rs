/// Keyed one-way hash of a share token, used as the lookup key for the surprise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareTokenHash(String);

impl ShareTokenHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ShareTokenHash {
    fn from(value: String) -> Self {
        Self(value)
    }
}
