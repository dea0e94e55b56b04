// tests/resource_matching.rs
mod common;
use crate::common::init_tracing;

use coresched::dag::{ComputeResource, best_fit};

#[test]
fn no_resources_means_no_fit() {
    init_tracing();
    assert_eq!(best_fit(&[], 1), None);
}

#[test]
fn picks_smallest_sufficient_resource() {
    init_tracing();

    let only_small = vec![ComputeResource::new("resource1", 1)];
    assert_eq!(best_fit(&only_small, 1), Some(0));
    assert_eq!(best_fit(&only_small, 2), None);

    let both = vec![
        ComputeResource::new("resource1", 1),
        ComputeResource::new("resource2", 2),
    ];
    assert_eq!(best_fit(&both, 1), Some(0));
    assert_eq!(best_fit(&both, 2), Some(1));
}

#[test]
fn uses_available_cores_not_total() {
    init_tracing();

    let mut resources = vec![
        ComputeResource::new("big", 8),
        ComputeResource::new("small", 4),
    ];
    assert!(resources[0].try_assign(0, 6));

    // big has 2 free, small has 4 free: 2 is the tighter fit.
    assert_eq!(best_fit(&resources, 2), Some(0));
    // Only small can take 3 now.
    assert_eq!(best_fit(&resources, 3), Some(1));
}

#[test]
fn ties_go_to_the_smallest_name() {
    init_tracing();

    let resources = vec![
        ComputeResource::new("beta", 4),
        ComputeResource::new("alpha", 4),
        ComputeResource::new("gamma", 4),
    ];
    assert_eq!(best_fit(&resources, 3), Some(1));
}

#[test]
fn try_assign_respects_capacity() {
    init_tracing();

    let mut r = ComputeResource::new("cpu", 5);
    assert!(r.try_assign(0, 3));
    assert!(r.try_assign(1, 2));
    assert_eq!(r.cores_in_use(), 5);
    assert_eq!(r.cores_available(), 0);

    // Rejected: nothing changes.
    assert!(!r.try_assign(2, 1));
    assert_eq!(r.cores_in_use(), 5);
    assert_eq!(r.tasks_in_progress(), &[0, 1]);
    assert_eq!(r.task_count(), 2);
    assert!(!r.is_idle());
}
