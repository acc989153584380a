//! Fill-only merging of option records.

use crate::field::fill;

use super::JobOptions;

/// Layering of a more specific record over a less specific one.
///
/// Implementations build a fresh value. Neither input is modified, so a
/// single parent can be shared by any number of merges.
pub trait Merge {
    /// Returns `self` with every unset field filled from `parent`.
    #[must_use]
    fn merged_over(&self, parent: &Self) -> Self;
}

impl Merge for JobOptions {
    fn merged_over(&self, parent: &Self) -> Self {
        Self {
            timeout: fill(self.timeout, parent.timeout),
            max_tries: fill(self.max_tries, parent.max_tries),
            kill_on_delay: fill(self.kill_on_delay, parent.kill_on_delay),
            no_fail: fill(self.no_fail, parent.no_fail),
            no_redis_log: fill(self.no_redis_log, parent.no_redis_log),
            no_redis_log_on_success: fill(
                self.no_redis_log_on_success,
                parent.no_redis_log_on_success,
            ),
            no_redis_log_on_fail: fill(self.no_redis_log_on_fail, parent.no_redis_log_on_fail),
            redis_log_expire_after: fill(
                self.redis_log_expire_after,
                parent.redis_log_expire_after,
            ),
            drop: fill(self.drop, parent.drop),
            drop_on_success: fill(self.drop_on_success, parent.drop_on_success),
            drop_on_fail: fill(self.drop_on_fail, parent.drop_on_fail),
        }
    }
}

/// Merge `child` over `parent`, returning the effective record.
///
/// Any field `child` sets, including `false` and `0`, is kept. Fields it
/// leaves unset take `parent`'s value, set or not. Nested scopes resolve as
/// `merge(&job, &merge(&queue, &global))`.
///
/// ```rust
/// use job_options::{JobOptions, merge};
///
/// let parent = JobOptions::new().with_no_fail(true).with_timeout(60);
/// let child = JobOptions::new().with_no_fail(false);
///
/// let effective = merge(&child, &parent);
/// assert!(!effective.no_fail());
/// assert_eq!(effective.timeout(), 60);
/// ```
#[must_use]
pub fn merge<M: Merge>(child: &M, parent: &M) -> M {
    child.merged_over(parent)
}

/// Fold records ordered from least to most specific into one effective
/// record.
///
/// An empty input yields the default (empty) record.
///
/// ```rust
/// use job_options::{JobOptions, merge_chain};
///
/// let global = JobOptions::new().with_timeout(60);
/// let queue = JobOptions::new().with_timeout(120);
/// let job = JobOptions::new();
///
/// assert_eq!(merge_chain([&global, &queue, &job]).timeout(), 120);
/// ```
#[must_use]
pub fn merge_chain<'a, M, I>(records: I) -> M
where
    M: Merge + Default + 'a,
    I: IntoIterator<Item = &'a M>,
{
    records
        .into_iter()
        .fold(M::default(), |parent, child| child.merged_over(&parent))
}
