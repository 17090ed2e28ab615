use serde::{Deserialize, Serialize};

use super::Training;

/// A coach profile from `GET /coaches`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialization: Vec<String>,
}

impl Trainer {
    /// Headline specialization shown on directory cards.
    pub fn primary_specialization(&self) -> Option<&str> {
        self.specialization.first().map(String::as_str)
    }
}

/// Payload of `GET /coaches/{id}`: the profile plus the coach's own schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerWithSchedule {
    pub trainer: Trainer,
    #[serde(default)]
    pub schedule: Vec<Training>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_profile_payload() {
        let profile: TrainerWithSchedule = serde_json::from_str(
            r#"{
                "trainer": {
                    "id": 4, "experience_years": 12, "bio": "Former national team swimmer",
                    "full_name": "Olga Smirnova", "email": "olga@school.test",
                    "specialization": ["Swimming", "Endurance"]
                },
                "schedule": []
            }"#,
        )
        .unwrap();
        assert_eq!(profile.trainer.primary_specialization(), Some("Swimming"));
        assert_eq!(profile.trainer.experience_years, 12);
        assert!(profile.schedule.is_empty());
    }

    #[test]
    fn test_trainer_without_specialization() {
        let trainer: Trainer =
            serde_json::from_str(r#"{"id": 1, "full_name": "New Coach"}"#).unwrap();
        assert!(trainer.primary_specialization().is_none());
    }
}
