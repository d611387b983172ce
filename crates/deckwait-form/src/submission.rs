//! The validated waitlist record
//!
//! A `Submission` only exists once the schema has accepted the field state.
//! Invalid names and addresses are unrepresentable: the `FullName` and
//! `EmailAddress` newtypes can only be built through their `parse`
//! constructors.

use crate::fields::{
    AgeGroup, ContactChannel, DesiredFeature, GameTag, Platform, PlayFrequency, Referral,
    RetentionFactor,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Minimum character count for a full name, after trimming
pub const MIN_NAME_CHARS: usize = 2;

/// Shape check for an email address: something, an `@`, something, a dot,
/// something. Deliverability is the storage backend's problem.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email shape regex is valid"));

/// Errors from newtype constructors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    /// Value shorter than the required minimum
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    /// Value does not look like an email address
    #[error("must be a valid email address")]
    NotAnEmail,
}

/// A trimmed, non-trivial person name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Parse a candidate name
    ///
    /// Trims surrounding whitespace and requires at least
    /// [`MIN_NAME_CHARS`] characters.
    pub fn parse(candidate: &str) -> Result<Self, FieldParseError> {
        let trimmed = candidate.trim();
        if trimmed.chars().count() < MIN_NAME_CHARS {
            return Err(FieldParseError::TooShort {
                min: MIN_NAME_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email-shaped address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse a candidate address against the shape check
    pub fn parse(candidate: &str) -> Result<Self, FieldParseError> {
        let trimmed = candidate.trim();
        if !EMAIL_SHAPE.is_match(trimmed) {
            return Err(FieldParseError::NotAnEmail);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable validated record, constructed at submit time
///
/// Lifecycle is exactly one request: built by the schema, flattened into a
/// payload, transmitted, discarded. Nothing is persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Respondent name, length-checked
    pub full_name: FullName,
    /// Respondent address, shape-checked
    pub email: EmailAddress,
    /// Phone number, if given
    pub phone: Option<String>,
    /// Age bracket
    pub age_group: AgeGroup,
    /// Gaming platforms, non-empty
    pub platforms: BTreeSet<Platform>,
    /// Play frequency
    pub play_frequency: PlayFrequency,
    /// Recently played games
    pub recent_games: BTreeSet<GameTag>,
    /// Free-text "other" recent games
    pub recent_games_other: Option<String>,
    /// Retention factors
    pub retention_factors: BTreeSet<RetentionFactor>,
    /// Free-text "other" retention factor
    pub retention_other: Option<String>,
    /// Desired features
    pub desired_features: BTreeSet<DesiredFeature>,
    /// Free-text "other" desired feature
    pub features_other: Option<String>,
    /// Free-text feature suggestion
    pub feature_suggestion: Option<String>,
    /// Wants to be an early tester
    pub early_tester: bool,
    /// Contact channels, non-empty
    pub contact_channels: BTreeSet<ContactChannel>,
    /// Referral willingness
    pub referral: Referral,
    /// Referred friend's address, shape-checked when present
    pub friend_email: Option<EmailAddress>,
}
