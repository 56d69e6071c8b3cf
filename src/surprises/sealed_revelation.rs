use crate::surprises::RevelationType;
use serde::{Deserialize, Serialize};

/// A revelation as it's persisted: the content is a serialized encryption envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SealedRevelation {
    #[serde(rename = "type")]
    pub kind: RevelationType,
    pub content: String,
    pub order: u32,
}
