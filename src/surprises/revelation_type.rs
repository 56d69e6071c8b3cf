use serde::{Deserialize, Serialize};

/// Kind of content a revelation carries.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RevelationType {
    Message,
    Image,
    Video,
    Audio,
}
