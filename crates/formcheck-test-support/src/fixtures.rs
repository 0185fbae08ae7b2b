//! Field fixtures and logging bootstrap.

use formcheck_core::{FeedbackKind, Field};
use formcheck_telemetry::{LogFormat, LoggingConfig, init_logging};
use once_cell::sync::OnceCell;

static LOGGING: OnceCell<bool> = OnceCell::new();

/// Install a debug-level subscriber once per test binary.
///
/// Returns `true` when this binary owns the global subscriber.
pub fn init_test_logging() -> bool {
    *LOGGING.get_or_init(|| {
        init_logging(&LoggingConfig {
            level: "debug",
            format: LogFormat::Pretty,
        })
        .is_ok()
    })
}

/// Builder for validated [`Field`] snapshots.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field: Field,
    next_key: usize,
}

impl FieldBuilder {
    /// Start a field named `name` with no feedback.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            field: Field::new(name),
            next_key: 0,
        }
    }

    /// Add a shown error.
    #[must_use]
    pub fn error(self) -> Self {
        self.feedback(FeedbackKind::Error, true)
    }

    /// Add a shown warning.
    #[must_use]
    pub fn warning(self) -> Self {
        self.feedback(FeedbackKind::Warning, true)
    }

    /// Add a shown info.
    #[must_use]
    pub fn info(self) -> Self {
        self.feedback(FeedbackKind::Info, true)
    }

    /// Add a feedback entry of `kind`.
    #[must_use]
    pub fn feedback(mut self, kind: FeedbackKind, show: bool) -> Self {
        let key = format!("0.{}", self.next_key);
        self.next_key += 1;
        self.field.add_feedback(key, kind, show);
        self
    }

    /// Finish the snapshot.
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}

/// Field with one shown error.
#[must_use]
pub fn field_with_errors(name: &str) -> Field {
    FieldBuilder::new(name).error().build()
}

/// Field with one shown warning and no errors.
#[must_use]
pub fn field_with_warnings(name: &str) -> Field {
    FieldBuilder::new(name).warning().build()
}

/// Field that passed validation without feedback.
#[must_use]
pub fn valid_field(name: &str) -> Field {
    FieldBuilder::new(name).build()
}
