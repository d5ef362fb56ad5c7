//! Configuration issues reported by validation.
//!
//! Loading never fails on a questionable value; instead the loader collects
//! [`ConfigIssue`]s and falls back to defaults, leaving it to the caller to
//! surface them.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A model id field is present but blank.
    EmptyModelName { field: String },
    /// Temperature outside `[0, 2]` or not a number.
    TemperatureOutOfRange { value: f64 },
    /// The selected model is not among the configured model list.
    ModelNotListed { model: String },
    /// Agent cache TTL of zero would rebuild the handle on every turn.
    ZeroCacheTtl,
    /// The reply shown when the provider fails is blank.
    EmptyFallbackReply,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
