use crate::{api::Api, server::status::Status, surprises::SurpriseStore};

pub struct AppState<S: SurpriseStore> {
    pub status: Status,
    pub api: Api<S>,
}

impl<S: SurpriseStore> AppState<S> {
    pub fn new(api: Api<S>) -> Self {
        Self {
            status: Status {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api,
        }
    }
}
