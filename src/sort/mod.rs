//! In-place comparison sorts over slices.

pub mod basic;
pub mod heap;
pub mod merge;
pub mod quick;

use serde::Serialize;

pub use basic::{bubble_sort, insertion_sort, selection_sort};
pub use heap::{heapsort, tree_sort};
pub use merge::merge_sort;
pub use quick::quicksort;

/// A selectable sorting routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// Adjacent swaps, stopping early once a pass makes none.
    Bubble,
    /// Shift each element left into the sorted prefix.
    Insertion,
    /// Swap the minimum of the unsorted suffix into place.
    Selection,
    /// Stable top-down merge sort.
    #[default]
    Merge,
    /// Quicksort with a last-element pivot.
    Quick,
    /// In-place heapsort over a max-heap.
    Heap,
    /// Collect into a binary search tree and read it back in order.
    Tree,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 7] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Heap,
        Self::Tree,
    ];

    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Tree => "tree",
        }
    }

    /// Parse an algorithm from its name. A trailing "sort" is accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        let name = name.trim_end_matches("sort").trim_end_matches(['_', '-']);
        match name {
            "bubble" => Some(Self::Bubble),
            "insertion" => Some(Self::Insertion),
            "selection" => Some(Self::Selection),
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            "heap" => Some(Self::Heap),
            "tree" => Some(Self::Tree),
            _ => None,
        }
    }

    /// Sort `items` in place.
    pub fn sort<T: Ord + Clone>(&self, items: &mut [T]) {
        log::trace!("{} sort over {} items", self.name(), items.len());
        match self {
            Self::Bubble => bubble_sort(items),
            Self::Insertion => insertion_sort(items),
            Self::Selection => selection_sort(items),
            Self::Merge => merge_sort(items),
            Self::Quick => quicksort(items),
            Self::Heap => heapsort(items),
            Self::Tree => tree_sort(items),
        }
    }

    /// Return a sorted copy of `items`.
    pub fn sorted<T: Ord + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.sort(&mut copy);
        copy
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
