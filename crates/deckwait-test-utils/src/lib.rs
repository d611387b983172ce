//! Testing utilities for the deckwait workspace
//!
//! Shared fixtures and collaborator doubles.

#![allow(missing_docs)]

use deckwait_form::{
    AgeGroup, ContactChannel, DesiredFeature, FormValues, GameTag, Platform, PlayFrequency,
    Referral, RetentionFactor,
};
use deckwait_submit::{Notice, Notifier, SheetRow, StorageApi, SubmitError};
use std::sync::Mutex;

/// A fully filled, schema-valid field state
pub fn valid_values() -> FormValues {
    let mut values = FormValues::new();
    values.full_name = "Ada Lovelace".to_string();
    values.email = "ada@example.com".to_string();
    values.phone = "+44 20 7946 0000".to_string();
    values.age_group = Some(AgeGroup::From25To34);
    values.platforms.insert(Platform::Ios);
    values.platforms.insert(Platform::Android);
    values.play_frequency = Some(PlayFrequency::FewTimesAWeek);
    values.recent_games.insert(GameTag::Uno);
    values.recent_games.insert(GameTag::Poker);
    values.retention_factors.insert(RetentionFactor::DailyRewards);
    values.desired_features.insert(DesiredFeature::OfflineMode);
    values.feature_suggestion = "Let me design my own card backs".to_string();
    values.early_tester = true;
    values.contact_channels.insert(ContactChannel::Email);
    values.referral = Some(Referral::Yes);
    values.friend_email = "grace@example.com".to_string();
    values
}

/// The smallest field state the schema accepts
pub fn minimal_valid_values() -> FormValues {
    let mut values = FormValues::new();
    values.full_name = "Jo".to_string();
    values.email = "jo@example.com".to_string();
    values.age_group = Some(AgeGroup::Under18);
    values.platforms.insert(Platform::Android);
    values.play_frequency = Some(PlayFrequency::Rarely);
    values.contact_channels.insert(ContactChannel::Sms);
    values.referral = Some(Referral::No);
    values
}

/// Notifier double that records every notice
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices delivered so far
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier lock").clone()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().expect("notifier lock").len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().expect("notifier lock").push(notice.clone());
    }
}

/// Scripted outcome for [`ScriptedStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreScript {
    /// Every call succeeds
    Succeed,
    /// Every call fails with this HTTP status
    FailStatus(u16),
}

/// Storage double that follows a script and records every row
#[derive(Debug)]
pub struct ScriptedStore {
    script: StoreScript,
    rows: Mutex<Vec<SheetRow>>,
}

impl ScriptedStore {
    pub fn succeeding() -> Self {
        Self::with_script(StoreScript::Succeed)
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self::with_script(StoreScript::FailStatus(status))
    }

    pub fn with_script(script: StoreScript) -> Self {
        Self {
            script,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Rows this store was asked to persist, in call order
    pub fn rows(&self) -> Vec<SheetRow> {
        self.rows.lock().expect("store lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.rows.lock().expect("store lock").len()
    }
}

#[async_trait::async_trait]
impl StorageApi for ScriptedStore {
    async fn store(&self, row: &SheetRow) -> Result<(), SubmitError> {
        self.rows.lock().expect("store lock").push(row.clone());
        match self.script {
            StoreScript::Succeed => Ok(()),
            StoreScript::FailStatus(status) => Err(SubmitError::Status { status }),
        }
    }
}
