//! Sequence search.

use std::cmp::Ordering;

/// Index of the first element equal to `key`.
pub fn linear_search<T: PartialEq>(items: &[T], key: &T) -> Option<usize> {
    items.iter().position(|item| item == key)
}

/// Index of an element equal to `key` in an ascending slice.
///
/// With duplicates, any matching index may be returned. The result is
/// unspecified if `items` is not sorted.
pub fn binary_search<T: Ord>(items: &[T], key: &T) -> Option<usize> {
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let middle = low + (high - low) / 2;
        match items[middle].cmp(key) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Some(middle),
        }
    }
    None
}
