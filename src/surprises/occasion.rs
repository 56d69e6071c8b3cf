use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Occasion the surprise is made for.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Birthday,
    Anniversary,
    Love,
    Friendship,
    Graduation,
    Wedding,
    Other,
}

impl Occasion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::Love => "love",
            Self::Friendship => "friendship",
            Self::Graduation => "graduation",
            Self::Wedding => "wedding",
            Self::Other => "other",
        }
    }
}

impl FromStr for Occasion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "birthday" => Self::Birthday,
            "anniversary" => Self::Anniversary,
            "love" => Self::Love,
            "friendship" => Self::Friendship,
            "graduation" => Self::Graduation,
            "wedding" => Self::Wedding,
            "other" => Self::Other,
            _ => bail!("Unknown occasion: {s}."),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Occasion;

    #[test]
    fn text_representation_matches_serde() -> anyhow::Result<()> {
        for occasion in [
            Occasion::Birthday,
            Occasion::Anniversary,
            Occasion::Love,
            Occasion::Friendship,
            Occasion::Graduation,
            Occasion::Wedding,
            Occasion::Other,
        ] {
            assert_eq!(
                serde_json::to_string(&occasion)?,
                format!("\"{}\"", occasion.as_str())
            );
            assert_eq!(occasion.as_str().parse::<Occasion>()?, occasion);
        }

        Ok(())
    }

    #[test]
    fn rejects_unknown_occasions() {
        assert!("halloween".parse::<Occasion>().is_err());
        assert!(serde_json::from_str::<Occasion>(r#""Birthday""#).is_err());
    }
}
