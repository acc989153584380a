//! Built-in option values applied beneath every configured scope.

use super::JobOptions;

/// Built-in execution time limit in seconds.
pub const DEFAULT_TIMEOUT: i64 = 3600;

/// Built-in attempt limit.
pub const DEFAULT_MAX_TRIES: i64 = 1;

/// Built-in log retention in seconds (seven days).
pub const DEFAULT_LOG_EXPIRE_AFTER: i64 = 604_800;

impl JobOptions {
    /// The built-in defaults record.
    ///
    /// Sets the timeout, attempt limit and log retention; every flag stays
    /// unset so it reads as off until some scope turns it on.
    ///
    /// ```rust
    /// use job_options::JobOptions;
    ///
    /// let builtin = JobOptions::builtin();
    /// assert_eq!(builtin.timeout(), 3600);
    /// assert_eq!(builtin.max_tries(), 1);
    /// assert_eq!(builtin.redis_log_expire_after(), 604_800);
    /// assert!(!builtin.drop());
    /// ```
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new()
            .with_timeout(DEFAULT_TIMEOUT)
            .with_max_tries(DEFAULT_MAX_TRIES)
            .with_redis_log_expire_after(DEFAULT_LOG_EXPIRE_AFTER)
    }
}
