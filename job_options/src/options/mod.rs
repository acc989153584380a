//! The job option record and its resolution rules.
//!
//! A [`JobOptions`] value describes what one scope explicitly sets. Records
//! are combined with [`merge()`] and read through the accessor methods, which
//! apply the fallback rules for unset or out-of-range values.

mod accessors;
mod defaults;
mod key;
mod merge;

use serde::{Deserialize, Serialize};

pub use accessors::{FALLBACK_MAX_TRIES, FALLBACK_TIMEOUT, Outcome};
pub use defaults::{DEFAULT_LOG_EXPIRE_AFTER, DEFAULT_MAX_TRIES, DEFAULT_TIMEOUT};
pub use key::{OptionKey, OptionValue};
pub use merge::{Merge, merge, merge_chain};

use crate::{OptionsResult, OptionsResultExt};

/// Options explicitly set at one configuration scope.
///
/// Each field is tri-state: absent (inherit), explicitly `false`/`0`, or
/// explicitly `true`/positive. Absent fields are omitted when serialising and
/// a missing key deserialises as absent, so a record survives a round trip
/// through JSON or TOML without gaining values it never had.
///
/// Unknown keys and wrongly-typed values are rejected during deserialisation.
///
/// ```rust
/// use job_options::JobOptions;
///
/// let opts: JobOptions = serde_json::from_str(r#"{"nofail": false}"#)?;
/// assert!(!opts.no_fail());
/// assert_eq!(serde_json::to_string(&opts)?, r#"{"nofail":false}"#);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobOptions {
    #[serde(rename = "timeout", default, skip_serializing_if = "Option::is_none")]
    timeout: Option<i64>,
    #[serde(rename = "maxtries", default, skip_serializing_if = "Option::is_none")]
    max_tries: Option<i64>,
    #[serde(rename = "killondelay", default, skip_serializing_if = "Option::is_none")]
    kill_on_delay: Option<bool>,
    #[serde(rename = "nofail", default, skip_serializing_if = "Option::is_none")]
    no_fail: Option<bool>,

    #[serde(rename = "noredislog", default, skip_serializing_if = "Option::is_none")]
    no_redis_log: Option<bool>,
    #[serde(
        rename = "noredislogonsuccess",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    no_redis_log_on_success: Option<bool>,
    #[serde(
        rename = "noredislogonfail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    no_redis_log_on_fail: Option<bool>,
    #[serde(
        rename = "redislogexpireafter",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    redis_log_expire_after: Option<i64>,

    #[serde(rename = "drop", default, skip_serializing_if = "Option::is_none")]
    drop: Option<bool>,
    #[serde(rename = "droponsuccess", default, skip_serializing_if = "Option::is_none")]
    drop_on_success: Option<bool>,
    #[serde(rename = "droponfail", default, skip_serializing_if = "Option::is_none")]
    drop_on_fail: Option<bool>,
}

impl JobOptions {
    /// A record with nothing set. Merging it changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            max_tries: None,
            kill_on_delay: None,
            no_fail: None,
            no_redis_log: None,
            no_redis_log_on_success: None,
            no_redis_log_on_fail: None,
            redis_log_expire_after: None,
            drop: None,
            drop_on_success: None,
            drop_on_fail: None,
        }
    }

    /// Parse a record from a JSON object, such as options attached to a job.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::OptionsError::Json`] when the text is not a JSON
    /// object of known option keys with correctly typed values.
    pub fn from_json_str(raw: &str) -> OptionsResult<Self> {
        serde_json::from_str(raw).into_options()
    }

    /// Returns `true` when no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        OptionKey::ALL.iter().all(|key| !self.is_set(*key))
    }

    /// Returns `true` when this record sets `key`, whatever the value.
    #[must_use]
    pub fn is_set(&self, key: OptionKey) -> bool {
        self.explicit(key).is_some()
    }

    /// Keys this record sets, in declaration order.
    pub fn set_keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        OptionKey::ALL
            .iter()
            .copied()
            .filter(|key| self.is_set(*key))
    }

    /// The raw value stored for `key`, without any fallback applied.
    ///
    /// Use the accessor methods to answer runtime questions; this exists for
    /// diagnostics and provenance reporting.
    #[must_use]
    pub const fn explicit(&self, key: OptionKey) -> Option<OptionValue> {
        match key {
            OptionKey::Timeout => integer(self.timeout),
            OptionKey::MaxTries => integer(self.max_tries),
            OptionKey::KillOnDelay => flag(self.kill_on_delay),
            OptionKey::NoFail => flag(self.no_fail),
            OptionKey::NoRedisLog => flag(self.no_redis_log),
            OptionKey::NoRedisLogOnSuccess => flag(self.no_redis_log_on_success),
            OptionKey::NoRedisLogOnFail => flag(self.no_redis_log_on_fail),
            OptionKey::RedisLogExpireAfter => integer(self.redis_log_expire_after),
            OptionKey::Drop => flag(self.drop),
            OptionKey::DropOnSuccess => flag(self.drop_on_success),
            OptionKey::DropOnFail => flag(self.drop_on_fail),
        }
    }

    /// Set the execution time limit in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: i64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Set the maximum number of attempts.
    #[must_use]
    pub const fn with_max_tries(mut self, tries: i64) -> Self {
        self.max_tries = Some(tries);
        self
    }

    /// Set whether a delayed job is killed.
    #[must_use]
    pub const fn with_kill_on_delay(mut self, value: bool) -> Self {
        self.kill_on_delay = Some(value);
        self
    }

    /// Set whether failures are ignored.
    #[must_use]
    pub const fn with_no_fail(mut self, value: bool) -> Self {
        self.no_fail = Some(value);
        self
    }

    /// Set the blanket log suppression flag.
    #[must_use]
    pub const fn with_no_redis_log(mut self, value: bool) -> Self {
        self.no_redis_log = Some(value);
        self
    }

    /// Set log suppression for successful runs.
    #[must_use]
    pub const fn with_no_redis_log_on_success(mut self, value: bool) -> Self {
        self.no_redis_log_on_success = Some(value);
        self
    }

    /// Set log suppression for failed runs.
    #[must_use]
    pub const fn with_no_redis_log_on_fail(mut self, value: bool) -> Self {
        self.no_redis_log_on_fail = Some(value);
        self
    }

    /// Set the retention of persisted logs in seconds.
    #[must_use]
    pub const fn with_redis_log_expire_after(mut self, seconds: i64) -> Self {
        self.redis_log_expire_after = Some(seconds);
        self
    }

    /// Set the blanket cleanup flag.
    #[must_use]
    pub const fn with_drop(mut self, value: bool) -> Self {
        self.drop = Some(value);
        self
    }

    /// Set cleanup after successful runs.
    #[must_use]
    pub const fn with_drop_on_success(mut self, value: bool) -> Self {
        self.drop_on_success = Some(value);
        self
    }

    /// Set cleanup after failed runs.
    #[must_use]
    pub const fn with_drop_on_fail(mut self, value: bool) -> Self {
        self.drop_on_fail = Some(value);
        self
    }
}

const fn integer(field: Option<i64>) -> Option<OptionValue> {
    match field {
        Some(value) => Some(OptionValue::Integer(value)),
        None => None,
    }
}

const fn flag(field: Option<bool>) -> Option<OptionValue> {
    match field {
        Some(value) => Some(OptionValue::Flag(value)),
        None => None,
    }
}
