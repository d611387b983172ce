//! Payload mapping
//!
//! Flattens a validated [`Submission`] into the snake-cased column set the
//! spreadsheet endpoint expects:
//! - multi-select fields join their wire tags with `", "`
//! - absent optional fields become empty strings
//! - `submitted_at` (ISO-8601, client clock) is appended at mapping time
//!   and is not part of the validated entity

use chrono::{DateTime, Utc};
use deckwait_form::Submission;
use serde::Serialize;
use std::collections::BTreeSet;

/// Join a tag set into a single `", "`-delimited cell
fn join_tags<T, F>(set: &BTreeSet<T>, as_str: F) -> String
where
    F: Fn(&T) -> &'static str,
{
    set.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

fn or_empty(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// One flat spreadsheet row
///
/// Field names are the wire column names; serde emits them as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age_group: String,
    pub platforms: String,
    pub play_frequency: String,
    pub recent_games: String,
    pub recent_games_other: String,
    pub retention_factors: String,
    pub retention_other: String,
    pub desired_features: String,
    pub features_other: String,
    pub feature_suggestion: String,
    pub early_tester: String,
    pub contact_channels: String,
    pub referral: String,
    pub friend_email: String,
    pub submitted_at: String,
}

impl SheetRow {
    /// Flatten a validated submission, stamping it with the client clock
    #[must_use]
    pub fn from_submission(submission: &Submission, submitted_at: DateTime<Utc>) -> Self {
        Self {
            full_name: submission.full_name.as_ref().to_string(),
            email: submission.email.as_ref().to_string(),
            phone: or_empty(&submission.phone),
            age_group: submission.age_group.as_str().to_string(),
            platforms: join_tags(&submission.platforms, |p| p.as_str()),
            play_frequency: submission.play_frequency.as_str().to_string(),
            recent_games: join_tags(&submission.recent_games, |g| g.as_str()),
            recent_games_other: or_empty(&submission.recent_games_other),
            retention_factors: join_tags(&submission.retention_factors, |r| r.as_str()),
            retention_other: or_empty(&submission.retention_other),
            desired_features: join_tags(&submission.desired_features, |d| d.as_str()),
            features_other: or_empty(&submission.features_other),
            feature_suggestion: or_empty(&submission.feature_suggestion),
            early_tester: if submission.early_tester { "yes" } else { "no" }.to_string(),
            contact_channels: join_tags(&submission.contact_channels, |c| c.as_str()),
            referral: submission.referral.as_str().to_string(),
            friend_email: submission
                .friend_email
                .as_ref()
                .map(|e| e.as_ref().to_string())
                .unwrap_or_default(),
            submitted_at: submitted_at.to_rfc3339(),
        }
    }
}

/// Wire body: `{"data": { <flattened fields> }}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetEnvelope {
    /// The flattened row
    pub data: SheetRow,
}

impl SheetEnvelope {
    /// Wrap a row for transmission
    #[inline]
    #[must_use]
    pub fn new(data: SheetRow) -> Self {
        Self { data }
    }
}
