/// Outcome of an owner-guarded store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedRecord<T> {
    /// The record exists, belongs to the requester and the operation was applied.
    Found(T),
    /// The record doesn't exist.
    Missing,
    /// The record exists, but belongs to someone else. Nothing was changed.
    NotOwned,
}
