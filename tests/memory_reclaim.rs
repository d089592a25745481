use orx_fixed_vec::FixedVec;
use orx_indirect_list::*;
use orx_pinned_vec::PinnedVec;
use orx_split_vec::{Doubling, SplitVec};
use test_case::test_case;

type ListOnThreshold<const D: usize> = SinglyList<MemoryReclaimOnThreshold<D>>;

fn values<M: MemoryPolicy, P: NodeStorage>(list: &SinglyList<M, P>) -> Vec<i32> {
    list.iter().collect()
}

fn push_front<M: MemoryPolicy, P: NodeStorage>(list: &mut SinglyList<M, P>, value: i32) -> NodeIdx {
    let idx = list.create(value).expect("has room");
    list.insert(idx).expect("free node");
    idx
}

fn pop<M: MemoryPolicy, P: NodeStorage>(list: &mut SinglyList<M, P>, idx: NodeIdx) -> i32 {
    list.remove(idx).expect("linked");
    list.dispose(idx).expect("free node")
}

#[test]
fn never_reclaims_automatically() {
    let mut list: SinglyList = SinglyList::new();

    let indices: Vec<_> = (0..6).map(|x| push_front(&mut list, x)).collect();
    for idx in &indices[..5] {
        pop(&mut list, *idx);
    }

    assert_eq!(values(&list), [5]);
    assert_eq!(list.core().nodes().len(), 6);
    let utilization = list.utilization();
    assert_eq!(utilization.num_active_nodes, 1);
    assert_eq!(utilization.num_closed_nodes, 5);
    assert!(list.is_valid(indices[5]));
}

#[test]
fn manual_reclaim() {
    let mut list: SinglyList = SinglyList::new();

    let indices: Vec<_> = (0..6).map(|x| push_front(&mut list, x)).collect();
    for i in [0, 2, 4] {
        assert_eq!(pop(&mut list, indices[i]), i as i32);
    }
    assert_eq!(values(&list), [5, 3, 1]);

    assert!(list.reclaim_closed_nodes());

    assert_eq!(values(&list), [5, 3, 1]);
    assert_eq!(list.core().nodes().len(), 3);
    assert_eq!(list.utilization().num_closed_nodes, 0);

    // nothing to reclaim
    assert!(!list.reclaim_closed_nodes());
}

#[test]
fn manual_reclaim_skipped_with_free_nodes() {
    let mut list: SinglyList = SinglyList::new();

    let a = push_front(&mut list, 0);
    let b = push_front(&mut list, 1);
    let free = list.create(2).expect("growable");
    pop(&mut list, a);

    let state = list.memory_state();
    assert!(!list.reclaim_closed_nodes());
    assert_eq!(list.memory_state(), state);
    assert!(list.is_valid(b));
    assert!(list.is_valid(free));

    assert_eq!(list.dispose(free), Ok(2));
    assert!(list.reclaim_closed_nodes());
    assert_eq!(values(&list), [1]);
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
fn threshold_bounds_closed_nodes(num_kept: usize) {
    let mut list: ListOnThreshold<2> = SinglyList::new();

    for x in 0..16 {
        push_front(&mut list, x);
    }

    while list.len() > num_kept {
        let front = list.front_idx().expect("not empty");
        pop(&mut list, front);

        let utilization = list.utilization();
        let used = utilization.num_active_nodes + utilization.num_closed_nodes;
        assert!(utilization.num_closed_nodes <= used >> 2);
    }

    let expected: Vec<_> = (0..num_kept as i32).rev().collect();
    assert_eq!(values(&list), expected);
}

#[test]
fn threshold_reclaim_invalidates_indices() {
    let mut list: ListOnThreshold<1> = SinglyList::new();

    let a = push_front(&mut list, 0);
    let b = push_front(&mut list, 1);
    let c = push_front(&mut list, 2);
    let d = push_front(&mut list, 3);
    assert_eq!(values(&list), [3, 2, 1, 0]);

    // 1 closed of 4 used is within 50%
    pop(&mut list, b);
    assert_eq!(list.core().nodes().len(), 4);
    assert!(list.is_valid(a));

    // 2 closed of 4 used is within 50%
    pop(&mut list, d);
    assert_eq!(list.core().nodes().len(), 4);
    assert!(list.is_valid(a));
    assert_eq!(values(&list), [2, 0]);

    // 3 closed of 4 used exceeds 50%
    pop(&mut list, a);
    assert_eq!(values(&list), [2]);
    assert_eq!(list.core().nodes().len(), 1);
    assert_eq!(list.idx_error(c), Some(NodeIdxError::ReorganizedCollection));
    assert_eq!(list.front(), Some(2));
}

#[test]
fn threshold_skipped_with_free_nodes() {
    let mut list: ListOnThreshold<1> = SinglyList::new();

    let a = push_front(&mut list, 0);
    let b = push_front(&mut list, 1);
    let c = push_front(&mut list, 2);

    list.remove(a).expect("linked");
    pop(&mut list, b);
    pop(&mut list, c);

    // a is free; reorganizing would invalidate its only handle
    assert_eq!(list.core().nodes().len(), 3);
    assert!(list.is_valid(a));
    assert!(list.is_empty());

    // once a is disposed, nothing is active and everything is reclaimed
    assert_eq!(list.dispose(a), Ok(0));
    assert_eq!(list.core().nodes().len(), 0);
}

#[test]
fn fixed_storage_allocation_failure() {
    let mut list: SinglyList<MemoryReclaimNever, FixedVec<Node>> =
        SinglyList::with_storage(FixedVec::new(3));

    let a = push_front(&mut list, 1);
    push_front(&mut list, 2);
    push_front(&mut list, 3);

    assert_eq!(list.create(4), Err(ListError::AllocationFailure));
    assert_eq!(values(&list), [3, 2, 1]);

    // holes are only reusable after reclaiming
    pop(&mut list, a);
    assert_eq!(list.create(4), Err(ListError::AllocationFailure));

    assert!(list.reclaim_closed_nodes());
    let d = list.create(4).expect("reclaimed a position");
    list.insert(d).expect("free node");
    assert_eq!(values(&list), [4, 3, 2]);
}

#[test]
fn doubling_storage() {
    let mut list: SinglyList<MemoryReclaimOnThreshold<1>, SplitVec<Node, Doubling>> =
        SinglyList::with_storage(SplitVec::with_doubling_growth());

    let indices: Vec<_> = (0..10).map(|x| push_front(&mut list, x)).collect();
    assert_eq!(values(&list), [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);

    list.remove(indices[4]).expect("linked");
    list.remove_tracking_prev(indices[9]).expect("linked");
    assert_eq!(values(&list), [8, 7, 6, 5, 3, 2, 1, 0]);

    for _ in 0..6 {
        let front = list.front_idx().expect("not empty");
        pop(&mut list, front);
    }
    assert_eq!(values(&list), [1, 0]);
    assert_eq!(list.utilization().num_active_nodes, 4);

    // free nodes hold back the threshold reclaim
    assert_eq!(list.core().nodes().len(), 10);
    assert_eq!(list.dispose(indices[4]), Ok(4));
    assert_eq!(list.core().nodes().len(), 10);

    assert_eq!(list.dispose(indices[9]), Ok(9));
    assert_eq!(list.core().nodes().len(), 2);
    assert_eq!(values(&list), [1, 0]);
    assert_eq!(
        list.idx_error(indices[0]),
        Some(NodeIdxError::ReorganizedCollection)
    );
}
