//! Raw field state for one mounted form instance
//!
//! `FormValues` holds whatever the user has entered so far, valid or not.
//! It is the input to [`crate::schema::validate`] and is reset to defaults
//! after a submission settles.

use crate::fields::{
    AgeGroup, ContactChannel, DesiredFeature, GameTag, Platform, PlayFrequency, Referral,
    RetentionFactor,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mutable per-form field state
///
/// Every field is optional at this layer; required-ness is a schema rule,
/// not a state-shape rule. Empty strings mean "not entered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    /// Full name as typed
    pub full_name: String,
    /// Email address as typed
    pub email: String,
    /// Phone number, optional
    pub phone: String,
    /// Age bracket selection
    pub age_group: Option<AgeGroup>,
    /// Platforms the respondent games on
    pub platforms: BTreeSet<Platform>,
    /// How often the respondent plays
    pub play_frequency: Option<PlayFrequency>,
    /// Recently played card games
    pub recent_games: BTreeSet<GameTag>,
    /// Free-text "other" for recent games
    pub recent_games_other: String,
    /// What keeps the respondent playing
    pub retention_factors: BTreeSet<RetentionFactor>,
    /// Free-text "other" for retention factors
    pub retention_other: String,
    /// Features the respondent wants
    pub desired_features: BTreeSet<DesiredFeature>,
    /// Free-text "other" for desired features
    pub features_other: String,
    /// Free-text feature suggestion
    pub feature_suggestion: String,
    /// Wants to be an early tester
    pub early_tester: bool,
    /// Preferred contact channels
    pub contact_channels: BTreeSet<ContactChannel>,
    /// Willingness to refer a friend
    pub referral: Option<Referral>,
    /// Referred friend's email, optional
    pub friend_email: String,
}

impl FormValues {
    /// Create empty field state
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_empty() {
        let values = FormValues::new();
        assert!(values.full_name.is_empty());
        assert!(values.platforms.is_empty());
        assert_eq!(values.age_group, None);
        assert!(!values.early_tester);
    }

    #[test]
    fn reset_clears_everything() {
        let mut values = FormValues::new();
        values.full_name = "Ada Lovelace".to_string();
        values.early_tester = true;
        values.platforms.insert(Platform::Android);

        values.reset();
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn deserializes_from_partial_json() {
        let values: FormValues =
            serde_json::from_str(r#"{"full_name": "Ada", "platforms": ["ios"]}"#).unwrap();
        assert_eq!(values.full_name, "Ada");
        assert!(values.platforms.contains(&Platform::Ios));
        assert!(values.email.is_empty());
    }
}
