use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Gender as the user-data service reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE")]
    Male,
    #[serde(rename = "FEMALE")]
    Female,
}

impl Gender {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Stated gender preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "BOYS")]
    Boys,
    #[serde(rename = "GIRLS")]
    Girls,
    #[serde(rename = "BOTH")]
    Both,
}

impl Interest {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "BOYS" => Some(Interest::Boys),
            "GIRLS" => Some(Interest::Girls),
            "BOTH" => Some(Interest::Both),
            _ => None,
        }
    }

    /// Whether this preference is satisfied by the given gender
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            Interest::Both => true,
            Interest::Boys => gender == Gender::Male,
            Interest::Girls => gender == Gender::Female,
        }
    }

    /// The gender this preference targets, if it names exactly one
    pub fn preferred_gender(self) -> Option<Gender> {
        match self {
            Interest::Boys => Some(Gender::Male),
            Interest::Girls => Some(Gender::Female),
            Interest::Both => None,
        }
    }
}

/// User profile as delivered by the user-data service
///
/// Only `id`, `gender` and `interestedIn` are interpreted here. All other
/// fields are kept in `extra` and returned to clients unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_gender",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    #[serde(
        rename = "interestedIn",
        default,
        deserialize_with = "lenient_interest",
        skip_serializing_if = "Option::is_none"
    )]
    pub interested_in: Option<Interest>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gender: None,
            interested_in: None,
            extra: Map::new(),
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interested_in = Some(interest);
        self
    }
}

// The upstream database is loosely typed; an unrecognized gender or
// preference string is treated the same as an absent one.
fn lenient_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Gender::from_wire))
}

fn lenient_interest<'de, D>(deserializer: D) -> Result<Option<Interest>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Interest::from_wire))
}

/// A candidate profile annotated with its match score
///
/// Produced from a copy of the candidate's profile; the pool entry
/// itself is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// A stored date-idea quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_accepts() {
        assert!(Interest::Both.accepts(Gender::Male));
        assert!(Interest::Both.accepts(Gender::Female));
        assert!(Interest::Boys.accepts(Gender::Male));
        assert!(!Interest::Boys.accepts(Gender::Female));
        assert!(Interest::Girls.accepts(Gender::Female));
        assert!(!Interest::Girls.accepts(Gender::Male));
    }

    #[test]
    fn test_profile_unknown_gender_treated_as_absent() {
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "gender": "NONBINARY",
            "interestedIn": "BOTH"
        }))
        .unwrap();

        assert_eq!(profile.gender, None);
        assert_eq!(profile.interested_in, Some(Interest::Both));
    }

    #[test]
    fn test_profile_passthrough_fields_survive_round_trip() {
        let input = serde_json::json!({
            "id": "u1",
            "gender": "FEMALE",
            "interestedIn": "BOYS",
            "name": "Amelie",
            "bio": "likes hiking"
        });

        let profile: UserProfile = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(profile.extra.get("name"), Some(&Value::from("Amelie")));

        let output = serde_json::to_value(&profile).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_scored_candidate_serializes_score_alongside_profile() {
        let candidate = ScoredCandidate {
            profile: UserProfile::new("u2").with_gender(Gender::Female),
            match_score: 200.0,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["id"], "u2");
        assert_eq!(json["matchScore"], 200.0);
    }
}
