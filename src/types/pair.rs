//! A two-element container whose order does not matter.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A pair of elements that compares equal in either order.
///
/// The hash is computed from the two element hashes in sorted order, so
/// `(a, b)` and `(b, a)` always land in the same bucket.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedPair<T> {
    first: T,
    second: T,
}

impl<T> UnorderedPair<T> {
    /// Create a new pair.
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// The first element as given at construction.
    pub fn first(&self) -> &T {
        &self.first
    }

    /// The second element as given at construction.
    pub fn second(&self) -> &T {
        &self.second
    }

    /// Whether `element` is one of the two members.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.first == *element || self.second == *element
    }
}

impl<T: PartialEq> PartialEq for UnorderedPair<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<T: Eq> Eq for UnorderedPair<T> {}

impl<T: Hash> Hash for UnorderedPair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut hashes = [element_hash(&self.first), element_hash(&self.second)];
        hashes.sort_unstable();
        hashes.hash(state);
    }
}

impl<T: std::fmt::Display> std::fmt::Display for UnorderedPair<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// Hash a single element with a fixed-key hasher.
fn element_hash<T: Hash>(element: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.hash(&mut hasher);
    hasher.finish()
}
