use crate::surprises::api_ext::{Pagination, SurpriseSummary};
use serde::Serialize;

/// A page of the owner's surprises.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SurprisesPage {
    pub surprises: Vec<SurpriseSummary>,
    pub pagination: Pagination,
}
