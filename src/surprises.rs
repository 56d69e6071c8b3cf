mod api_ext;
mod content_cipher;
mod database_ext;
mod occasion;
mod owned_record;
mod revelation;
mod revelation_type;
mod sealed_revelation;
mod sealed_surprise;
mod share_token_codec;
mod share_token_hash;
mod surprise;
mod surprise_id;
mod surprise_params;
mod surprise_store;
mod unlock;

pub use self::{
    api_ext::RevealedSurprise,
    content_cipher::ContentCipher,
    occasion::Occasion,
    owned_record::OwnedRecord,
    revelation::Revelation,
    revelation_type::RevelationType,
    sealed_revelation::SealedRevelation,
    sealed_surprise::SealedSurprise,
    share_token_codec::ShareTokenCodec,
    share_token_hash::ShareTokenHash,
    surprise::Surprise,
    surprise_id::SurpriseId,
    surprise_params::SurpriseParams,
    surprise_store::SurpriseStore,
    unlock::{UnlockOutcome, unlock},
};

#[cfg(test)]
pub use self::{surprise_params::RevelationParams, surprise_store::tests::MockSurpriseStore};
