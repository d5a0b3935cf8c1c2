//! # Exit status reported by step listeners.
//!
//! [`ExitStatus`] is what `after_step` and `on_error_in_step` may return. A
//! listener returns `None` to leave the engine's status alone, or `Some` to
//! replace it.
//!
//! Codes have a severity order used by [`ExitStatus::and`]:
//! ```text
//! EXECUTING < COMPLETED < NOOP < STOPPED < FAILED < UNKNOWN < (custom codes)
//! ```
//!
//! ## Example
//! ```rust
//! use stepcast::ExitStatus;
//!
//! let status = ExitStatus::completed().and(&ExitStatus::failed().with_description("disk full"));
//! assert_eq!(status.exit_code(), ExitStatus::FAILED);
//! assert_eq!(status.exit_description(), "disk full");
//! ```

use std::fmt;

/// Exit code plus free-form description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExitStatus {
    exit_code: String,
    exit_description: String,
}

impl ExitStatus {
    pub const EXECUTING: &'static str = "EXECUTING";
    pub const COMPLETED: &'static str = "COMPLETED";
    pub const NOOP: &'static str = "NOOP";
    pub const STOPPED: &'static str = "STOPPED";
    pub const FAILED: &'static str = "FAILED";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    /// Creates a status with the given code and an empty description.
    pub fn new(exit_code: impl Into<String>) -> Self {
        Self {
            exit_code: exit_code.into(),
            exit_description: String::new(),
        }
    }

    #[inline]
    pub fn executing() -> Self {
        Self::new(Self::EXECUTING)
    }

    #[inline]
    pub fn completed() -> Self {
        Self::new(Self::COMPLETED)
    }

    #[inline]
    pub fn noop() -> Self {
        Self::new(Self::NOOP)
    }

    #[inline]
    pub fn stopped() -> Self {
        Self::new(Self::STOPPED)
    }

    #[inline]
    pub fn failed() -> Self {
        Self::new(Self::FAILED)
    }

    #[inline]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN)
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.exit_description = description.into();
        self
    }

    pub fn exit_code(&self) -> &str {
        &self.exit_code
    }

    pub fn exit_description(&self) -> &str {
        &self.exit_description
    }

    /// Returns `true` while the step is still running.
    pub fn is_running(&self) -> bool {
        self.exit_code == Self::EXECUTING || self.exit_code == Self::UNKNOWN
    }

    /// Combines two statuses: the more severe code wins.
    ///
    /// On equal severity the code of `self` is kept. Descriptions are joined
    /// with `"; "`, skipping empty ones.
    pub fn and(&self, other: &ExitStatus) -> ExitStatus {
        let exit_code = if other.severity() > self.severity() {
            other.exit_code.clone()
        } else {
            self.exit_code.clone()
        };

        let exit_description = match (
            self.exit_description.is_empty(),
            other.exit_description.is_empty(),
        ) {
            (true, _) => other.exit_description.clone(),
            (false, true) => self.exit_description.clone(),
            (false, false) => format!("{}; {}", self.exit_description, other.exit_description),
        };

        ExitStatus {
            exit_code,
            exit_description,
        }
    }

    fn severity(&self) -> u8 {
        match self.exit_code.as_str() {
            Self::EXECUTING => 1,
            Self::COMPLETED => 2,
            Self::NOOP => 3,
            Self::STOPPED => 4,
            Self::FAILED => 5,
            Self::UNKNOWN => 6,
            _ => 7,
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exit_description.is_empty() {
            write!(f, "exitCode={}", self.exit_code)
        } else {
            write!(
                f,
                "exitCode={}; exitDescription={}",
                self.exit_code, self.exit_description
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_keeps_more_severe_code() {
        let done = ExitStatus::completed();
        assert_eq!(done.and(&ExitStatus::failed()).exit_code(), ExitStatus::FAILED);
        assert_eq!(ExitStatus::failed().and(&done).exit_code(), ExitStatus::FAILED);
        assert_eq!(
            ExitStatus::executing().and(&ExitStatus::noop()).exit_code(),
            ExitStatus::NOOP
        );
    }

    #[test]
    fn test_custom_code_outranks_builtin() {
        let custom = ExitStatus::new("COMPLETED WITH SKIPS");
        let merged = ExitStatus::unknown().and(&custom);
        assert_eq!(merged.exit_code(), "COMPLETED WITH SKIPS");
    }

    #[test]
    fn test_and_joins_descriptions() {
        let a = ExitStatus::completed().with_description("first");
        let b = ExitStatus::completed().with_description("second");
        assert_eq!(a.and(&b).exit_description(), "first; second");
        assert_eq!(a.and(&ExitStatus::completed()).exit_description(), "first");
        assert_eq!(ExitStatus::completed().and(&b).exit_description(), "second");
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitStatus::stopped().to_string(), "exitCode=STOPPED");
        assert_eq!(
            ExitStatus::failed().with_description("boom").to_string(),
            "exitCode=FAILED; exitDescription=boom"
        );
    }

    #[test]
    fn test_is_running() {
        assert!(ExitStatus::executing().is_running());
        assert!(ExitStatus::unknown().is_running());
        assert!(!ExitStatus::completed().is_running());
    }
}
