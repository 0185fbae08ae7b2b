#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Validation-state styling primitives shared by the formcheck UI.
//!
//! The validation engine reports field lifecycle events through a
//! [`ValidationContext`]. A [`FieldObserver`] tracks one named field and
//! derives the Bootstrap class its input carries (`is-invalid`, `is-warning`,
//! `is-valid`). Feedback containers style their messages with one of the
//! [`FieldFeedbackClassNames`] presets or a caller-supplied mapping.

pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod events;
pub mod field;
pub mod observer;
pub mod presets;

pub use config::FeedbackConfig;
pub use context::{ListenerCounts, ListenerId, ListenerKind, Subscription, ValidationContext};
pub use display::{INVALID_CLASS, VALID_CLASS, ValidationDisplayState, WARNING_CLASS};
pub use error::{ConfigError, ConfigResult};
pub use events::ValidationEvent;
pub use field::{FeedbackKind, Field, FieldFeedbackValidation, FieldOutcome};
pub use observer::{FieldObserver, MountedObserver, OutcomeSnapshot};
pub use presets::{FieldFeedbackClassNames, Preset};
