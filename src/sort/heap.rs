//! Sorts backed by the tree containers.

use crate::collections::heap::{heapify, sift_down};
use crate::collections::BinarySearchTree;

/// In-place heapsort over a max-heap.
pub fn heapsort<T: Ord>(items: &mut [T]) {
    heapify(items);
    for end in (1..items.len()).rev() {
        items.swap(0, end);
        sift_down(items, 0, end);
    }
}

/// Tree sort: insert into a binary search tree and read it back in order.
pub fn tree_sort<T: Ord + Clone>(items: &mut [T]) {
    let tree: BinarySearchTree<T> = items.iter().cloned().collect();
    for (slot, key) in items.iter_mut().zip(tree.into_sorted_vec()) {
        *slot = key;
    }
}
