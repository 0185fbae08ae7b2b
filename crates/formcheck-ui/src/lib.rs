#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Bootstrap 4 bindings for formcheck validation state.
//! Components render for wasm32; class composition is DOM-free and tested natively.

pub mod classes;

#[cfg(target_arch = "wasm32")]
pub mod components;

pub use classes::{compose_class_attr, feedback_class, input_class};
pub use formcheck_core::{FieldFeedbackClassNames, Preset, ValidationContext};

#[cfg(target_arch = "wasm32")]
pub use components::*;
