use crate::surprises::{Occasion, Surprise, SurpriseId};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Owner-facing view of the surprise that never includes decrypted content or the share token.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurpriseSummary {
    pub id: SurpriseId,
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    pub revelations_count: usize,
    pub has_password: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    pub is_public: bool,
    pub view_count: u64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_viewed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<&Surprise> for SurpriseSummary {
    fn from(surprise: &Surprise) -> Self {
        Self {
            id: surprise.id,
            title: surprise.title.clone(),
            occasion: surprise.occasion,
            template_id: surprise.template_id,
            revelations_count: surprise.revelations.len(),
            has_password: surprise.has_password(),
            expires_at: surprise.expires_at,
            is_public: surprise.is_public,
            view_count: surprise.view_count,
            last_viewed_at: surprise.last_viewed_at,
            created_at: surprise.created_at,
            updated_at: surprise.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SurpriseSummary;
    use crate::tests::MockSurpriseBuilder;
    use insta::assert_json_snapshot;

    #[test]
    fn serialization() {
        let surprise = MockSurpriseBuilder::new("Happy birthday")
            .set_password("sealed-password")
            .build();

        assert_json_snapshot!(SurpriseSummary::from(&surprise), {
            ".id" => "[id]",
            ".templateId" => "[template-id]",
        }, @r###"
        {
          "id": "[id]",
          "title": "Happy birthday",
          "occasion": "birthday",
          "templateId": "[template-id]",
          "revelationsCount": 1,
          "hasPassword": true,
          "expiresAt": null,
          "isPublic": true,
          "viewCount": 0,
          "lastViewedAt": null,
          "createdAt": "2010-01-01T10:00:00Z",
          "updatedAt": "2010-01-01T10:00:00Z"
        }
        "###);
    }
}
