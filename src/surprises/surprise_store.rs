use crate::{
    surprises::{OwnedRecord, SealedSurprise, ShareTokenHash, Surprise, SurpriseId},
    users::UserId,
};
use std::future::Future;

/// Persistence seam for surprises. Every owner-scoped write must be guarded by the owner
/// identifier inside a single store operation.
pub trait SurpriseStore: Send + Sync + 'static {
    /// Inserts a new surprise. Returns `None` if another surprise already uses the same token
    /// hash, in which case nothing is written.
    fn insert_surprise(
        &self,
        owner_id: UserId,
        token_hash: &ShareTokenHash,
        surprise: &SealedSurprise,
    ) -> impl Future<Output = anyhow::Result<Option<Surprise>>> + Send;

    /// Retrieves surprise by its token hash if it's either public or owned by the requester.
    fn get_surprise_by_token_hash(
        &self,
        token_hash: &ShareTokenHash,
        requester_id: Option<UserId>,
    ) -> impl Future<Output = anyhow::Result<Option<Surprise>>> + Send;

    fn get_surprise(
        &self,
        id: SurpriseId,
    ) -> impl Future<Output = anyhow::Result<Option<Surprise>>> + Send;

    /// Replaces the owner-editable part of the surprise.
    fn update_surprise(
        &self,
        id: SurpriseId,
        owner_id: UserId,
        surprise: &SealedSurprise,
    ) -> impl Future<Output = anyhow::Result<OwnedRecord<Surprise>>> + Send;

    fn remove_surprise(
        &self,
        id: SurpriseId,
        owner_id: UserId,
    ) -> impl Future<Output = anyhow::Result<OwnedRecord<Surprise>>> + Send;

    /// Atomically increments the view counter and returns the new value, or `None` if the
    /// surprise no longer exists.
    fn increment_surprise_view_count(
        &self,
        id: SurpriseId,
    ) -> impl Future<Output = anyhow::Result<Option<u64>>> + Send;

    /// Returns a page of the owner's surprises (newest first) together with their total number.
    fn get_user_surprises(
        &self,
        owner_id: UserId,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = anyhow::Result<(Vec<Surprise>, u64)>> + Send;
}
