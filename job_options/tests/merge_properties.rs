//! Behavioural properties of fill-only merging and the effective accessors.
//!
//! Covers identity, non-mutation, explicit-false dominance, multi-level
//! layering, compound flags, floor rules and idempotence.
use job_options::{JobOptions, OptionKey, merge, merge_chain};
use rstest::{fixture, rstest};

#[fixture]
fn parent() -> JobOptions {
    JobOptions::new()
        .with_timeout(60)
        .with_max_tries(5)
        .with_kill_on_delay(true)
        .with_no_redis_log_on_fail(true)
        .with_drop(true)
}

#[fixture]
fn child() -> JobOptions {
    JobOptions::new()
        .with_timeout(0)
        .with_kill_on_delay(false)
        .with_drop_on_success(false)
}

#[rstest]
fn empty_child_is_identity(parent: JobOptions) {
    assert_eq!(merge(&JobOptions::new(), &parent), parent);
}

#[rstest]
fn empty_parent_keeps_child_and_nothing_else(child: JobOptions) {
    let effective = merge(&child, &JobOptions::new());
    assert_eq!(effective, child);
    for key in OptionKey::ALL {
        assert_eq!(effective.is_set(key), child.is_set(key), "{key}");
    }
}

#[rstest]
fn merging_does_not_mutate_inputs(parent: JobOptions, child: JobOptions) {
    let parent_before = parent;
    let child_before = child;

    let effective = merge(&child, &parent);

    assert_eq!(parent, parent_before);
    assert_eq!(child, child_before);
    assert_ne!(effective, parent);
}

#[rstest]
fn explicit_false_beats_inherited_true(parent: JobOptions, child: JobOptions) {
    let effective = merge(&child, &parent);
    assert!(!effective.kill_on_delay());
    assert!(parent.kill_on_delay());
}

#[rstest]
fn explicit_zero_is_kept_then_floored(parent: JobOptions, child: JobOptions) {
    let effective = merge(&child, &parent);
    assert!(effective.is_set(OptionKey::Timeout));
    assert_eq!(effective.timeout(), 3600, "zero must not inherit the parent's 60");
}

#[rstest]
fn three_levels_take_the_nearest_value() {
    let global = JobOptions::new().with_timeout(60);
    let queue = JobOptions::new().with_timeout(120);
    let job = JobOptions::new();

    let effective = merge(&job, &merge(&queue, &global));
    assert_eq!(effective.timeout(), 120);
    assert_eq!(merge_chain([&global, &queue, &job]).timeout(), 120);
}

#[rstest]
fn order_of_arguments_matters() {
    let a = JobOptions::new().with_max_tries(2);
    let b = JobOptions::new().with_max_tries(7);
    assert_eq!(merge(&a, &b).max_tries(), 2);
    assert_eq!(merge(&b, &a).max_tries(), 7);
}

#[rstest]
fn both_narrow_log_flags_imply_blanket() {
    let opts = JobOptions::new()
        .with_no_redis_log_on_success(true)
        .with_no_redis_log_on_fail(true);
    assert!(!opts.is_set(OptionKey::NoRedisLog));
    assert!(opts.no_redis_log());
}

#[rstest]
fn blanket_cleanup_survives_narrow_false(parent: JobOptions, child: JobOptions) {
    let effective = merge(&child, &parent);
    assert!(effective.drop_on_success(), "inherited blanket drop dominates");
    assert!(effective.drop_on_fail());
    assert!(effective.drop());
}

#[rstest]
fn narrow_flags_inherit_independently(parent: JobOptions) {
    let child = JobOptions::new().with_no_redis_log_on_success(true);
    let effective = merge(&child, &parent);
    assert!(effective.no_redis_log_on_success());
    assert!(effective.no_redis_log_on_fail());
    assert!(effective.no_redis_log());
}

#[rstest]
#[case(-5)]
#[case(0)]
fn non_positive_timeout_falls_back(#[case] seconds: i64) {
    assert_eq!(JobOptions::new().with_timeout(seconds).timeout(), 3600);
}

#[rstest]
fn merging_effective_record_again_is_idempotent(parent: JobOptions, child: JobOptions) {
    let effective = merge(&child, &parent);
    assert_eq!(merge(&effective, &JobOptions::new()), effective);
    assert_eq!(merge(&effective, &effective), effective);
}

#[rstest]
fn shared_parent_serves_concurrent_merges(parent: JobOptions) {
    let jobs: Vec<JobOptions> = (1..=8)
        .map(|n| JobOptions::new().with_max_tries(n))
        .collect();

    let shared = &parent;
    let results: Vec<u64> = std::thread::scope(|s| {
        let handles: Vec<_> = jobs
            .iter()
            .map(|job| s.spawn(move || merge(job, shared).max_tries()))
            .collect();
        handles
            .into_iter()
            .filter_map(|handle| handle.join().ok())
            .collect()
    });

    assert_eq!(results, (1..=8).collect::<Vec<u64>>());
    assert_eq!(parent.max_tries(), 5);
}
