//! Identifiers for the individual options of a record.

use std::fmt;

/// Names one option of a [`crate::JobOptions`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum OptionKey {
    /// `timeout`: execution time limit in seconds.
    Timeout,
    /// `maxtries`: attempts before giving up.
    MaxTries,
    /// `killondelay`: kill a delayed job.
    KillOnDelay,
    /// `nofail`: ignore failures.
    NoFail,
    /// `noredislog`: suppress the log whatever the outcome.
    NoRedisLog,
    /// `noredislogonsuccess`: suppress the log of a successful run.
    NoRedisLogOnSuccess,
    /// `noredislogonfail`: suppress the log of a failed run.
    NoRedisLogOnFail,
    /// `redislogexpireafter`: log retention in seconds.
    RedisLogExpireAfter,
    /// `drop`: discard the job whatever the outcome.
    Drop,
    /// `droponsuccess`: discard the job after success.
    DropOnSuccess,
    /// `droponfail`: discard the job after failure.
    DropOnFail,
}

impl OptionKey {
    /// Every key, in record declaration order.
    pub const ALL: [Self; 11] = [
        Self::Timeout,
        Self::MaxTries,
        Self::KillOnDelay,
        Self::NoFail,
        Self::NoRedisLog,
        Self::NoRedisLogOnSuccess,
        Self::NoRedisLogOnFail,
        Self::RedisLogExpireAfter,
        Self::Drop,
        Self::DropOnSuccess,
        Self::DropOnFail,
    ];

    /// The key used for this option in serialised records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::MaxTries => "maxtries",
            Self::KillOnDelay => "killondelay",
            Self::NoFail => "nofail",
            Self::NoRedisLog => "noredislog",
            Self::NoRedisLogOnSuccess => "noredislogonsuccess",
            Self::NoRedisLogOnFail => "noredislogonfail",
            Self::RedisLogExpireAfter => "redislogexpireafter",
            Self::Drop => "drop",
            Self::DropOnSuccess => "droponsuccess",
            Self::DropOnFail => "droponfail",
        }
    }

    /// Returns `true` for the integer options whose accessors ignore zero
    /// and negative values.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::MaxTries | Self::RedisLogExpireAfter
        )
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw option value as stored in a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// A boolean option.
    Flag(bool),
    /// An integer option (seconds or a count).
    Integer(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}
