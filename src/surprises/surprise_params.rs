use crate::surprises::{Occasion, RevelationType};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

/// Parameters used to create a new surprise or to replace an existing one.
#[derive(Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SurpriseParams {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub occasion: Occasion,
    pub template_id: Uuid,
    #[validate(length(min = 1, max = 10), nested)]
    pub revelations: Vec<RevelationParams>,
    /// Optional unlock password.
    #[validate(length(min = 4, max = 50))]
    pub password: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub is_public: bool,
}

/// Plaintext revelation as submitted by the owner.
#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq, Eq)]
pub struct RevelationParams {
    #[serde(rename = "type")]
    pub kind: RevelationType,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(range(min = 1))]
    pub order: u32,
}

#[cfg(test)]
mod tests {
    use super::{RevelationParams, SurpriseParams};
    use crate::{
        surprises::{Occasion, RevelationType},
        tests::mock_surprise_params,
    };
    use serde_json::{Value as JsonValue, json};
    use time::OffsetDateTime;
    use uuid::uuid;
    use validator::Validate;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::from_str::<SurpriseParams>(
                r#"
{
    "title": "Happy birthday",
    "occasion": "birthday",
    "templateId": "00000000-0000-0000-0000-000000000010",
    "revelations": [
        { "type": "message", "content": "You are awesome!", "order": 1 },
        { "type": "image", "content": "https://cdn/cake.png", "order": 2 }
    ],
    "password": "abc123",
    "expiresAt": "2010-01-01T10:00:00Z",
    "isPublic": true
}
          "#
            )?,
            SurpriseParams {
                title: "Happy birthday".to_string(),
                occasion: Occasion::Birthday,
                template_id: uuid!("00000000-0000-0000-0000-000000000010"),
                revelations: vec![
                    RevelationParams {
                        kind: RevelationType::Message,
                        content: "You are awesome!".to_string(),
                        order: 1,
                    },
                    RevelationParams {
                        kind: RevelationType::Image,
                        content: "https://cdn/cake.png".to_string(),
                        order: 2,
                    },
                ],
                password: Some("abc123".to_string()),
                expires_at: Some(OffsetDateTime::from_unix_timestamp(1262340000)?),
                is_public: true,
            }
        );

        let params = serde_json::from_str::<SurpriseParams>(
            r#"
{
    "title": "Just because",
    "occasion": "other",
    "templateId": "00000000-0000-0000-0000-000000000010",
    "revelations": [{ "type": "audio", "content": "song", "order": 3 }]
}
          "#,
        )?;
        assert_eq!(params.password, None);
        assert_eq!(params.expires_at, None);
        assert!(!params.is_public);

        Ok(())
    }

    #[test]
    fn deserialization_rejects_malformed_shape() {
        let valid = json!({
            "title": "t",
            "occasion": "love",
            "templateId": "00000000-0000-0000-0000-000000000010",
            "revelations": [{ "type": "message", "content": "c", "order": 1 }]
        });
        let params = serde_json::from_value::<SurpriseParams>(valid.clone());
        assert!(params.is_ok());

        let corruptions: [fn(&mut JsonValue); 5] = [
            // Unknown occasion.
            |json| json["occasion"] = json!("halloween"),
            // Template is not a UUID.
            |json| json["templateId"] = json!("template"),
            // Unknown revelation type.
            |json| json["revelations"][0]["type"] = json!("gif"),
            // Negative order.
            |json| json["revelations"][0]["order"] = json!(-1),
            // Expiration isn't an ISO 8601 timestamp.
            |json| json["expiresAt"] = json!("tomorrow"),
        ];
        for corrupt in corruptions {
            let mut json = valid.clone();
            corrupt(&mut json);
            let result = serde_json::from_value::<SurpriseParams>(json.clone());
            assert!(result.is_err(), "{json}");
        }
    }

    #[test]
    fn validation() {
        assert!(mock_surprise_params().validate().is_ok());

        let mut params = mock_surprise_params();
        params.title = String::new();
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let mut params = mock_surprise_params();
        params.title = "a".repeat(101);
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        params.title = "a".repeat(100);
        assert!(params.validate().is_ok());

        let mut params = mock_surprise_params();
        params.revelations.clear();
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("revelations"));

        let mut params = mock_surprise_params();
        params.revelations = (1..=11)
            .map(|order| RevelationParams {
                kind: RevelationType::Message,
                content: format!("Message #{order}"),
                order,
            })
            .collect();
        assert!(params.validate().is_err());
        params.revelations.pop();
        assert!(params.validate().is_ok());

        let mut params = mock_surprise_params();
        params.revelations[0].content = String::new();
        let errors = params.validate().unwrap_err();
        assert!(errors.errors().contains_key("revelations"));

        let mut params = mock_surprise_params();
        params.revelations[0].order = 0;
        let errors = params.validate().unwrap_err();
        assert!(errors.errors().contains_key("revelations"));

        let mut params = mock_surprise_params();
        params.password = Some("abc".to_string());
        let errors = params.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
        params.password = Some("a".repeat(51));
        assert!(params.validate().is_err());
        params.password = Some("abcd".to_string());
        assert!(params.validate().is_ok());
        params.password = None;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn revelations_serialization() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_value(&mock_surprise_params().revelations[1])?,
            json!({ "type": "message", "content": "You are awesome!", "order": 1 })
        );

        Ok(())
    }
}
