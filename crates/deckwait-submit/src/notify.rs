//! Notifier capability
//!
//! The workflow signals success or failure through an injected [`Notifier`]
//! rather than a module-global toast channel. Calls are fire-and-forget; no
//! return value is consumed.

/// Outcome class of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Submission stored
    Success,
    /// Submission failed, retry manually
    Failure,
}

/// A user-facing notification with a title and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Outcome class
    pub kind: NoticeKind,
    /// Short headline
    pub title: String,
    /// One-line detail
    pub description: String,
}

impl Notice {
    /// Create a success notice
    #[inline]
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Create a failure notice
    #[inline]
    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Injected notification collaborator
pub trait Notifier: Send + Sync {
    /// Deliver a notice; fire-and-forget
    fn notify(&self, notice: &Notice);
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}

/// Notifier that logs through `tracing`
///
/// Default collaborator for hosts without a toast surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create new tracing notifier
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => {
                tracing::info!(title = %notice.title, detail = %notice.description, "notice");
            }
            NoticeKind::Failure => {
                tracing::warn!(title = %notice.title, detail = %notice.description, "notice");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_constructors_set_kind() {
        let ok = Notice::success("You're in", "See you at launch");
        assert_eq!(ok.kind, NoticeKind::Success);
        assert_eq!(ok.title, "You're in");

        let bad = Notice::failure("Submission failed", "Please try again");
        assert_eq!(bad.kind, NoticeKind::Failure);
    }

    #[test]
    fn tracing_notifier_is_fire_and_forget() {
        let notifier = TracingNotifier::new();
        notifier.notify(&Notice::success("t", "d"));
        notifier.notify(&Notice::failure("t", "d"));
    }
}
