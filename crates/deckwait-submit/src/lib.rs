//! Deckwait Submit - waitlist submission workflow
//!
//! The workflow layer of the waitlist:
//! - Flattens a validated submission into the spreadsheet payload
//! - Drives the `Idle → Submitting → Submitted` state machine
//! - Talks to the storage endpoint through the [`StorageApi`] seam
//! - Signals outcomes through an injected [`Notifier`]
//!
//! # Example
//!
//! ```rust,ignore
//! use deckwait_form::prelude::*;
//! use deckwait_submit::prelude::*;
//!
//! # async fn example() -> Result<(), deckwait_submit::SubmitError> {
//! let config = SubmitConfig::new();
//! let store = SheetStore::new(&config);
//! let mut form = WaitlistForm::with_config(store, TracingNotifier::new(), config);
//!
//! form.values_mut().full_name = "Ada Lovelace".to_string();
//! // ... fill the remaining fields ...
//! form.submit().await?;
//! form.settle().await;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod notify;
pub mod payload;
pub mod store;
pub mod workflow;

// Re-exports for convenience
pub use config::{SubmitConfig, DEFAULT_ENDPOINT, DEFAULT_RESET_DELAY_SECS};
pub use notify::{Notice, NoticeKind, Notifier, TracingNotifier};
pub use payload::{SheetEnvelope, SheetRow};
pub use store::{SheetStore, StorageApi, SubmitError};
pub use workflow::{FormPhase, WaitlistForm};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the submission workflow
    pub use crate::{
        FormPhase, Notice, NoticeKind, Notifier, SheetRow, SheetStore, StorageApi, SubmitConfig,
        SubmitError, TracingNotifier, WaitlistForm,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
