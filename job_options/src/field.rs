//! Tri-state option fields.
//!
//! Every option is stored as an [`Option`]: `None` means the scope did not
//! set it and the parent's value applies, `Some(v)` is authoritative even when
//! `v` is `false` or `0`. The helpers here are the only place that decides how
//! two fields combine and how a field reads once resolution is finished.

/// Combine a child field with its parent's, keeping the child when it is set.
///
/// The parent only fills a gap; an explicit `false` or `0` in the child is
/// never replaced.
///
/// # Examples
///
/// ```
/// use job_options::field::fill;
///
/// assert_eq!(fill(Some(false), Some(true)), Some(false));
/// assert_eq!(fill(None, Some(true)), Some(true));
/// assert_eq!(fill::<i64>(None, None), None);
/// ```
#[must_use]
pub fn fill<T: Copy>(child: Option<T>, parent: Option<T>) -> Option<T> {
    child.or(parent)
}

/// Returns `true` only when the field is set to `true`.
///
/// ```
/// use job_options::field::explicitly_true;
///
/// assert!(explicitly_true(Some(true)));
/// assert!(!explicitly_true(Some(false)));
/// assert!(!explicitly_true(None));
/// ```
#[must_use]
pub const fn explicitly_true(field: Option<bool>) -> bool {
    matches!(field, Some(true))
}

/// Returns the field's value when it is set and strictly positive.
///
/// Zero and negative values read the same as an unset field so callers can
/// apply their own fallback.
///
/// ```
/// use job_options::field::positive;
///
/// assert_eq!(positive(Some(30)), Some(30));
/// assert_eq!(positive(Some(0)), None);
/// assert_eq!(positive(Some(-5)), None);
/// assert_eq!(positive(None), None);
/// ```
#[must_use]
pub fn positive(field: Option<i64>) -> Option<u64> {
    field
        .filter(|value| *value > 0)
        .and_then(|value| u64::try_from(value).ok())
}
