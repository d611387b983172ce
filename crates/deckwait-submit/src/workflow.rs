//! Submission workflow state machine
//!
//! One [`WaitlistForm`] per mounted form instance. Owns the field state and
//! drives `Idle → Submitting → Submitted` (reverting to `Idle` after the
//! reset delay) or `Idle → Submitting → Idle` on failure, with values
//! retained for a manual retry.
//!
//! Exactly one outbound request per successful validation pass. No
//! automatic retry, no cancellation, no shared state across instances.

use crate::config::SubmitConfig;
use crate::notify::{Notice, Notifier};
use crate::payload::SheetRow;
use crate::store::{StorageApi, SubmitError};
use chrono::Utc;
use deckwait_form::{
    toggle, validate, ContactChannel, DesiredFeature, FormValues, GameTag, Platform,
    RetentionFactor,
};

/// Lifecycle phase of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Interactive; accepting edits and a submit
    #[default]
    Idle,
    /// Request in flight; submit control disabled, edits still allowed
    Submitting,
    /// Stored; reverts to `Idle` once the reset delay elapses
    Submitted,
}

/// The waitlist form workflow
///
/// Generic over its two injected collaborators: the storage API and the
/// notifier. Each instance exclusively owns its field state.
#[derive(Debug)]
pub struct WaitlistForm<S, N> {
    values: FormValues,
    phase: FormPhase,
    store: S,
    notifier: N,
    config: SubmitConfig,
}

impl<S: StorageApi, N: Notifier> WaitlistForm<S, N> {
    /// Create an idle form with default configuration
    #[inline]
    #[must_use]
    pub fn new(store: S, notifier: N) -> Self {
        Self::with_config(store, notifier, SubmitConfig::default())
    }

    /// Create an idle form with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(store: S, notifier: N, config: SubmitConfig) -> Self {
        Self {
            values: FormValues::new(),
            phase: FormPhase::Idle,
            store,
            notifier,
            config,
        }
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit control should be disabled
    #[inline]
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Read the current field state
    #[inline]
    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Edit the current field state
    ///
    /// Edits stay allowed in every phase; only the submit control locks
    /// while a request is in flight.
    #[inline]
    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    /// Toggle a platform tag
    pub fn toggle_platform(&mut self, tag: Platform) {
        self.values.platforms = toggle(std::mem::take(&mut self.values.platforms), tag);
    }

    /// Toggle a recent-game tag
    pub fn toggle_recent_game(&mut self, tag: GameTag) {
        self.values.recent_games = toggle(std::mem::take(&mut self.values.recent_games), tag);
    }

    /// Toggle a retention-factor tag
    pub fn toggle_retention_factor(&mut self, tag: RetentionFactor) {
        self.values.retention_factors =
            toggle(std::mem::take(&mut self.values.retention_factors), tag);
    }

    /// Toggle a desired-feature tag
    pub fn toggle_desired_feature(&mut self, tag: DesiredFeature) {
        self.values.desired_features =
            toggle(std::mem::take(&mut self.values.desired_features), tag);
    }

    /// Toggle a contact-channel tag
    pub fn toggle_contact_channel(&mut self, tag: ContactChannel) {
        self.values.contact_channels =
            toggle(std::mem::take(&mut self.values.contact_channels), tag);
    }

    /// Run one submission attempt
    ///
    /// # Workflow
    /// 1. Reject when a request is already in flight
    /// 2. Validate; a failed pass blocks submission, no request is made
    /// 3. `Idle → Submitting`; flatten the record, stamp the client clock
    /// 4. One `StorageApi::store` call
    /// 5. Success: `Submitting → Submitted`, one success notice
    /// 6. Failure: `Submitting → Idle` immediately, one failure notice,
    ///    values retained for a manual retry
    ///
    /// # Errors
    /// - `SubmitError::InFlight` when already submitting
    /// - `SubmitError::Invalid` carrying the per-field messages
    /// - `SubmitError::Status` / `SubmitError::Transport` from the store
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        let submission = match validate(&self.values) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::warn!(fields = errors.len(), "submission rejected: {errors}");
                return Err(errors.into());
            }
        };

        self.phase = FormPhase::Submitting;
        let row = SheetRow::from_submission(&submission, Utc::now());
        tracing::debug!(email = %row.email, "row mapped");

        match self.store.store(&row).await {
            Ok(()) => {
                self.phase = FormPhase::Submitted;
                tracing::info!(email = %row.email, "submission stored");
                self.notifier.notify(&Notice::success(
                    "You're on the list!",
                    "We'll reach out before launch.",
                ));
                Ok(())
            }
            Err(e) => {
                // Values stay put so the user can retry without re-entering.
                self.phase = FormPhase::Idle;
                tracing::error!("submission failed: {e}");
                self.notifier.notify(&Notice::failure(
                    "Submission failed",
                    "Something went wrong. Please try again.",
                ));
                Err(e)
            }
        }
    }

    /// Let a stored form settle back to interactive
    ///
    /// After the configured reset delay, clears every field to its default
    /// and reverts `Submitted → Idle`. No-op in any other phase.
    pub async fn settle(&mut self) {
        if self.phase != FormPhase::Submitted {
            return;
        }
        tokio::time::sleep(self.config.reset_delay()).await;
        self.values.reset();
        self.phase = FormPhase::Idle;
        tracing::debug!("form reset to idle");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use crate::store::MockStorageApi;
    use deckwait_form::{AgeGroup, PlayFrequency, Referral};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct CountingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl Notifier for CountingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    fn fill(values: &mut FormValues) {
        values.full_name = "Ada Lovelace".to_string();
        values.email = "ada@example.com".to_string();
        values.age_group = Some(AgeGroup::From18To24);
        values.platforms.insert(Platform::Ios);
        values.play_frequency = Some(PlayFrequency::Daily);
        values.contact_channels.insert(ContactChannel::Email);
        values.referral = Some(Referral::Yes);
    }

    #[tokio::test]
    async fn invalid_form_makes_no_request() {
        let mut store = MockStorageApi::new();
        store.expect_store().times(0);
        let mut form = WaitlistForm::new(store, CountingNotifier::default());

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[tokio::test]
    async fn valid_form_stores_exactly_once() {
        let mut store = MockStorageApi::new();
        store
            .expect_store()
            .times(1)
            .withf(|row| row.platforms == "ios" && row.email == "ada@example.com")
            .returning(|_| Ok(()));
        let notifier = Arc::new(CountingNotifier::default());
        let mut form = WaitlistForm::new(store, Arc::clone(&notifier));
        fill(form.values_mut());

        form.submit().await.unwrap();
        assert_eq!(form.phase(), FormPhase::Submitted);

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn store_failure_reverts_to_idle_keeping_values() {
        let mut store = MockStorageApi::new();
        store
            .expect_store()
            .times(1)
            .returning(|_| Err(SubmitError::Status { status: 500 }));
        let notifier = Arc::new(CountingNotifier::default());
        let mut form = WaitlistForm::new(store, Arc::clone(&notifier));
        fill(form.values_mut());

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Status { status: 500 }));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.values().full_name, "Ada Lovelace");

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Failure);
    }

    #[tokio::test]
    async fn in_flight_guard_rejects_second_submit() {
        let store = MockStorageApi::new();
        let mut form = WaitlistForm::new(store, CountingNotifier::default());
        fill(form.values_mut());
        form.phase = FormPhase::Submitting;

        let err = form.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::InFlight));
        assert!(form.submit_disabled());
    }

    #[tokio::test(start_paused = true)]
    async fn settle_clears_after_reset_delay() {
        let mut store = MockStorageApi::new();
        store.expect_store().times(1).returning(|_| Ok(()));
        let mut form = WaitlistForm::new(store, CountingNotifier::default());
        fill(form.values_mut());

        form.submit().await.unwrap();
        assert_eq!(form.phase(), FormPhase::Submitted);

        let before = tokio::time::Instant::now();
        form.settle().await;
        assert!(before.elapsed() >= std::time::Duration::from_secs(3));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(*form.values(), FormValues::default());
    }

    #[tokio::test]
    async fn settle_is_noop_while_idle() {
        let store = MockStorageApi::new();
        let mut form = WaitlistForm::new(store, CountingNotifier::default());
        fill(form.values_mut());

        form.settle().await;
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.values().full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn toggle_helpers_flip_membership() {
        let store = MockStorageApi::new();
        let mut form = WaitlistForm::new(store, CountingNotifier::default());

        form.toggle_platform(Platform::Pc);
        assert!(form.values().platforms.contains(&Platform::Pc));
        form.toggle_platform(Platform::Pc);
        assert!(form.values().platforms.is_empty());

        form.toggle_contact_channel(ContactChannel::Sms);
        form.toggle_desired_feature(DesiredFeature::OfflineMode);
        form.toggle_recent_game(GameTag::Poker);
        form.toggle_retention_factor(RetentionFactor::Tournaments);
        assert!(form.values().contact_channels.contains(&ContactChannel::Sms));
        assert!(form.values().recent_games.contains(&GameTag::Poker));
    }
}
