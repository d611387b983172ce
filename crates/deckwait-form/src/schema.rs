//! Validation schema for the waitlist form
//!
//! Given candidate field values, produce either a typed [`Submission`] or a
//! mapping from field to human-readable message. Validation is synchronous
//! and side-effect-free; a failed pass blocks submission entirely.

use crate::fields::{AgeGroup, PlayFrequency, Referral};
use crate::submission::{EmailAddress, FullName, Submission};
use crate::values::FormValues;
use indexmap::IndexMap;

/// Typed field names, used as keys of the per-field error map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    AgeGroup,
    Platforms,
    PlayFrequency,
    RecentGames,
    RetentionFactors,
    DesiredFeatures,
    FeatureSuggestion,
    EarlyTester,
    ContactChannels,
    Referral,
    FriendEmail,
}

impl Field {
    /// Snake-cased field key, matching the payload column names
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::AgeGroup => "age_group",
            Self::Platforms => "platforms",
            Self::PlayFrequency => "play_frequency",
            Self::RecentGames => "recent_games",
            Self::RetentionFactors => "retention_factors",
            Self::DesiredFeatures => "desired_features",
            Self::FeatureSuggestion => "feature_suggestion",
            Self::EarlyTester => "early_tester",
            Self::ContactChannels => "contact_channels",
            Self::Referral => "referral",
            Self::FriendEmail => "friend_email",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures, in declaration order
///
/// Each entry pairs a [`Field`] with the message to display next to the
/// corresponding input. Fully recoverable: correct the inputs and submit
/// again.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    by_field: IndexMap<Field, String>,
}

impl ValidationErrors {
    /// Create an empty error map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.by_field.insert(field, message.into());
    }

    /// Message for a field, if it failed
    #[inline]
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.by_field.get(&field).map(String::as_str)
    }

    /// Whether any field failed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Number of failed fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Iterate failures in field-declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.by_field.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn summary(&self) -> String {
        let fields: Vec<&str> = self.by_field.keys().map(Field::as_str).collect();
        format!("{} invalid field(s): {}", fields.len(), fields.join(", "))
    }
}

fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validate candidate values into a [`Submission`]
///
/// # Rules
/// - `full_name`: trimmed length of at least 2
/// - `email`: email shape
/// - `platforms`, `contact_channels`: at least one tag selected
/// - `age_group`, `play_frequency`, `referral`: a choice must be made
/// - `friend_email`: email shape, but only when non-empty
/// - everything declared optional passes when empty or absent
///
/// # Errors
/// All failing fields are reported together, one message each.
pub fn validate(values: &FormValues) -> Result<Submission, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let full_name = FullName::parse(&values.full_name)
        .map_err(|e| errors.push(Field::FullName, e.to_string()))
        .ok();
    let email = EmailAddress::parse(&values.email)
        .map_err(|e| errors.push(Field::Email, e.to_string()))
        .ok();

    if values.age_group.is_none() {
        errors.push(Field::AgeGroup, "select your age group");
    }
    if values.platforms.is_empty() {
        errors.push(Field::Platforms, "select at least one platform");
    }
    if values.play_frequency.is_none() {
        errors.push(Field::PlayFrequency, "select how often you play");
    }
    if values.contact_channels.is_empty() {
        errors.push(
            Field::ContactChannels,
            "select at least one contact preference",
        );
    }
    if values.referral.is_none() {
        errors.push(Field::Referral, "tell us if you would refer a friend");
    }

    let friend_email = match non_empty(&values.friend_email) {
        Some(candidate) => match EmailAddress::parse(&candidate) {
            Ok(address) => Some(address),
            Err(e) => {
                errors.push(Field::FriendEmail, e.to_string());
                None
            }
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // Every None below pushed an error above, so these arms are unreachable
    // once the error map is empty.
    let (full_name, email) = match (full_name, email) {
        (Some(name), Some(email)) => (name, email),
        _ => return Err(errors),
    };
    let (age_group, play_frequency, referral): (AgeGroup, PlayFrequency, Referral) =
        match (values.age_group, values.play_frequency, values.referral) {
            (Some(a), Some(f), Some(r)) => (a, f, r),
            _ => return Err(errors),
        };

    Ok(Submission {
        full_name,
        email,
        phone: non_empty(&values.phone),
        age_group,
        platforms: values.platforms.clone(),
        play_frequency,
        recent_games: values.recent_games.clone(),
        recent_games_other: non_empty(&values.recent_games_other),
        retention_factors: values.retention_factors.clone(),
        retention_other: non_empty(&values.retention_other),
        desired_features: values.desired_features.clone(),
        features_other: non_empty(&values.features_other),
        feature_suggestion: non_empty(&values.feature_suggestion),
        early_tester: values.early_tester,
        contact_channels: values.contact_channels.clone(),
        referral,
        friend_email,
    })
}
