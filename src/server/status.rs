use serde::Serialize;

#[derive(Clone, Serialize)]
pub struct Status {
    pub version: String,
}
