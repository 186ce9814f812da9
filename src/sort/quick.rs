//! Quicksort with Lomuto partitioning.

/// Quicksort, pivoting on the last element of each range.
///
/// Pending ranges are kept on an explicit stack, smaller range on top, so
/// already-sorted input does not exhaust the call stack.
pub fn quicksort<T: Ord>(items: &mut [T]) {
    let mut ranges = vec![(0, items.len())];
    while let Some((low, high)) = ranges.pop() {
        if high - low <= 1 {
            continue;
        }
        let pivot = partition(&mut items[low..high]) + low;
        let left = (low, pivot);
        let right = (pivot + 1, high);
        if left.1 - left.0 < right.1 - right.0 {
            ranges.push(right);
            ranges.push(left);
        } else {
            ranges.push(left);
            ranges.push(right);
        }
    }
}

/// Partition around the last element, returning its final index.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if items[i] <= items[last] {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
