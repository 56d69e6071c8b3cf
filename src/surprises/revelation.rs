use crate::surprises::RevelationType;
use serde::{Deserialize, Serialize};

/// A decrypted item of the surprise reveal sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Revelation {
    #[serde(rename = "type")]
    pub kind: RevelationType,
    pub content: String,
    pub order: u32,
}
