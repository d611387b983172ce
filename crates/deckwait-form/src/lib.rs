//! Deckwait Form - waitlist field vocabulary and validation
//!
//! The domain layer of the waitlist workflow:
//! - Enumerated field tags with ordered `(tag, label)` option descriptors
//! - Raw per-form field state ([`FormValues`])
//! - The validation schema producing a typed [`Submission`] or a
//!   per-field error map ([`ValidationErrors`])
//!
//! # Example
//!
//! ```rust
//! use deckwait_form::prelude::*;
//!
//! let mut values = FormValues::new();
//! values.full_name = "Ada Lovelace".to_string();
//! values.email = "ada@example.com".to_string();
//! values.age_group = Some(AgeGroup::From25To34);
//! values.platforms = toggle(values.platforms, Platform::Ios);
//! values.play_frequency = Some(PlayFrequency::Daily);
//! values.contact_channels = toggle(values.contact_channels, ContactChannel::Email);
//! values.referral = Some(Referral::Maybe);
//!
//! let submission = validate(&values).unwrap();
//! assert_eq!(submission.email.as_ref(), "ada@example.com");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod fields;
pub mod schema;
pub mod submission;
pub mod values;

// Re-exports for convenience
pub use fields::{
    toggle, AgeGroup, ContactChannel, DesiredFeature, GameTag, Platform, PlayFrequency, Referral,
    RetentionFactor,
};
pub use schema::{validate, Field, ValidationErrors};
pub use submission::{EmailAddress, FieldParseError, FullName, Submission, MIN_NAME_CHARS};
pub use values::FormValues;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the waitlist form
    pub use crate::{
        toggle, validate, AgeGroup, ContactChannel, DesiredFeature, EmailAddress, Field,
        FormValues, FullName, GameTag, Platform, PlayFrequency, Referral, RetentionFactor,
        Submission, ValidationErrors,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
