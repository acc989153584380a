//! Effective values read from a resolved record.
//!
//! Accessors never fail. Integer options fall back when unset, zero or
//! negative; boolean options are off unless explicitly `true`. The two
//! per-outcome families (log suppression and cleanup) share one shape: the
//! blanket flag forces both outcomes on, and setting both outcomes is the
//! same as setting the blanket flag.

use std::time::Duration;

use crate::field::{explicitly_true, positive};

use super::JobOptions;

/// Timeout in seconds when no scope sets a positive value.
pub const FALLBACK_TIMEOUT: u64 = 3600;

/// Attempt limit when no scope sets a positive value.
///
/// This matches the timeout fallback rather than the built-in default of a
/// single attempt. Resolution through the built-in scope never reaches it.
pub const FALLBACK_MAX_TRIES: u64 = 3600;

/// How a job run finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The job exited successfully.
    Success,
    /// The job failed or timed out.
    Failure,
}

impl JobOptions {
    /// Execution time limit in seconds.
    #[must_use]
    pub fn timeout(&self) -> u64 {
        positive(self.timeout).unwrap_or(FALLBACK_TIMEOUT)
    }

    /// Execution time limit as a [`Duration`].
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout())
    }

    /// Maximum number of attempts.
    #[must_use]
    pub fn max_tries(&self) -> u64 {
        positive(self.max_tries).unwrap_or(FALLBACK_MAX_TRIES)
    }

    /// Whether a delayed job should be killed.
    #[must_use]
    pub const fn kill_on_delay(&self) -> bool {
        explicitly_true(self.kill_on_delay)
    }

    /// Whether failures are ignored.
    #[must_use]
    pub const fn no_fail(&self) -> bool {
        explicitly_true(self.no_fail)
    }

    /// Whether the log is suppressed whatever the outcome.
    #[must_use]
    pub const fn no_redis_log(&self) -> bool {
        explicitly_true(self.no_redis_log)
            || (self.no_redis_log_on_success() && self.no_redis_log_on_fail())
    }

    /// Whether the log of a successful run is suppressed.
    #[must_use]
    pub const fn no_redis_log_on_success(&self) -> bool {
        explicitly_true(self.no_redis_log) || explicitly_true(self.no_redis_log_on_success)
    }

    /// Whether the log of a failed run is suppressed.
    #[must_use]
    pub const fn no_redis_log_on_fail(&self) -> bool {
        explicitly_true(self.no_redis_log) || explicitly_true(self.no_redis_log_on_fail)
    }

    /// Retention of persisted logs in seconds; `0` means no forced expiry.
    #[must_use]
    pub fn redis_log_expire_after(&self) -> u64 {
        positive(self.redis_log_expire_after).unwrap_or(0)
    }

    /// Retention of persisted logs, or `None` when logs do not expire.
    #[must_use]
    pub fn redis_log_expiry(&self) -> Option<Duration> {
        positive(self.redis_log_expire_after).map(Duration::from_secs)
    }

    /// Whether the job is discarded whatever the outcome.
    #[must_use]
    pub const fn drop(&self) -> bool {
        explicitly_true(self.drop) || (self.drop_on_success() && self.drop_on_fail())
    }

    /// Whether the job is discarded after success.
    #[must_use]
    pub const fn drop_on_success(&self) -> bool {
        explicitly_true(self.drop) || explicitly_true(self.drop_on_success)
    }

    /// Whether the job is discarded after failure.
    #[must_use]
    pub const fn drop_on_fail(&self) -> bool {
        explicitly_true(self.drop) || explicitly_true(self.drop_on_fail)
    }

    /// Whether the log of a run that finished with `outcome` is kept.
    #[must_use]
    pub const fn should_persist_log(&self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Success => !self.no_redis_log_on_success(),
            Outcome::Failure => !self.no_redis_log_on_fail(),
        }
    }

    /// Whether a job that finished with `outcome` is discarded.
    #[must_use]
    pub const fn should_drop(&self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Success => self.drop_on_success(),
            Outcome::Failure => self.drop_on_fail(),
        }
    }
}
