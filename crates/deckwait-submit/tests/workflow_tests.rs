//! End-to-end workflow tests: validate → map → store → notify → settle

use deckwait_form::{Field, FormValues, Platform};
use deckwait_submit::{FormPhase, NoticeKind, SubmitConfig, SubmitError, WaitlistForm};
use deckwait_test_utils::{valid_values, RecordingNotifier, ScriptedStore};
use std::sync::Arc;
use std::time::Duration;

fn form_with(
    store: ScriptedStore,
) -> (
    WaitlistForm<Arc<ScriptedStore>, Arc<RecordingNotifier>>,
    Arc<ScriptedStore>,
    Arc<RecordingNotifier>,
) {
    let store = Arc::new(store);
    let notifier = Arc::new(RecordingNotifier::new());
    let form = WaitlistForm::new(Arc::clone(&store), Arc::clone(&notifier));
    (form, store, notifier)
}

#[tokio::test]
async fn missing_required_field_blocks_the_request() {
    let (mut form, store, notifier) = form_with(ScriptedStore::succeeding());
    let mut values = valid_values();
    values.email = String::new();
    *form.values_mut() = values;

    let err = form.submit().await.unwrap_err();
    match err {
        SubmitError::Invalid(errors) => {
            assert!(errors.get(Field::Email).is_some());
        }
        other => panic!("expected validation failure, got {other}"),
    }
    assert_eq!(store.call_count(), 0);
    assert_eq!(notifier.count(), 0);
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn valid_input_sends_one_mapped_request() {
    let (mut form, store, _notifier) = form_with(ScriptedStore::succeeding());
    *form.values_mut() = valid_values();

    form.submit().await.unwrap();

    let rows = store.rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.full_name, "Ada Lovelace");
    assert_eq!(row.email, "ada@example.com");
    assert_eq!(row.platforms, "ios, android");
    assert_eq!(row.recent_games, "uno, poker");
    assert_eq!(row.early_tester, "yes");
    assert_eq!(row.friend_email, "grace@example.com");
    assert!(!row.submitted_at.is_empty());
}

#[tokio::test]
async fn bad_email_shape_never_reaches_the_store() {
    let (mut form, store, _notifier) = form_with(ScriptedStore::succeeding());
    let mut values = valid_values();
    values.email = "not-an-email".to_string();
    *form.values_mut() = values;

    let err = form.submit().await.unwrap_err();
    match err {
        SubmitError::Invalid(errors) => {
            assert_eq!(errors.get(Field::Email), Some("must be a valid email address"));
        }
        other => panic!("expected validation failure, got {other}"),
    }
    assert_eq!(store.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn success_settles_back_to_a_cleared_idle_form() {
    let (mut form, _store, notifier) = form_with(ScriptedStore::succeeding());
    *form.values_mut() = valid_values();

    form.submit().await.unwrap();
    assert_eq!(form.phase(), FormPhase::Submitted);
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);

    let before = tokio::time::Instant::now();
    form.settle().await;
    assert!(before.elapsed() >= Duration::from_secs(3));
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(*form.values(), FormValues::default());
}

#[tokio::test]
async fn failure_reverts_immediately_with_values_intact() {
    let (mut form, store, notifier) = form_with(ScriptedStore::failing_with_status(503));
    *form.values_mut() = valid_values();

    let err = form.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Status { status: 503 }));
    assert!(err.is_retryable());

    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.values().full_name, "Ada Lovelace");
    assert_eq!(store.call_count(), 1);

    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Failure);
}

#[tokio::test]
async fn manual_retry_after_failure_is_a_fresh_request() {
    let (mut form, store, _notifier) = form_with(ScriptedStore::failing_with_status(500));
    *form.values_mut() = valid_values();

    assert!(form.submit().await.is_err());
    assert!(form.submit().await.is_err());
    // One request per submit; nothing is retried automatically.
    assert_eq!(store.call_count(), 2);
}

#[tokio::test]
async fn empty_multi_select_error_clears_after_toggle() {
    let (mut form, _store, _notifier) = form_with(ScriptedStore::succeeding());
    let mut values = valid_values();
    values.platforms.clear();
    *form.values_mut() = values;

    let err = form.submit().await.unwrap_err();
    match err {
        SubmitError::Invalid(errors) => {
            assert_eq!(errors.get(Field::Platforms), Some("select at least one platform"));
        }
        other => panic!("expected validation failure, got {other}"),
    }

    form.toggle_platform(Platform::Console);
    form.submit().await.unwrap();
    assert_eq!(form.phase(), FormPhase::Submitted);
}

#[tokio::test(start_paused = true)]
async fn reset_delay_is_configurable() {
    let store = Arc::new(ScriptedStore::succeeding());
    let notifier = Arc::new(RecordingNotifier::new());
    let config = SubmitConfig::new().with_reset_delay_secs(10);
    let mut form = WaitlistForm::with_config(Arc::clone(&store), notifier, config);
    *form.values_mut() = valid_values();

    form.submit().await.unwrap();
    let before = tokio::time::Instant::now();
    form.settle().await;
    assert!(before.elapsed() >= Duration::from_secs(10));
}
