//! Array-backed binary max-heap.

use super::{Tree, TreeOrder};

/// Index of the left child of `index`.
pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`.
pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Index of the parent of `index` (0 for the root).
pub(crate) fn parent(index: usize) -> usize {
    index.saturating_sub(1) / 2
}

/// Move the element at `start` down until neither child in `items[..end]`
/// is larger.
pub(crate) fn sift_down<T: Ord>(items: &mut [T], start: usize, end: usize) {
    let mut root = start;
    while left_child(root) < end {
        let mut child = left_child(root);
        if child + 1 < end && items[child] < items[child + 1] {
            child += 1;
        }
        if items[root] < items[child] {
            items.swap(root, child);
            root = child;
        } else {
            return;
        }
    }
}

/// Move the element at `index` up while it is larger than its parent.
fn sift_up<T: Ord>(items: &mut [T], mut index: usize) {
    while index > 0 {
        let up = parent(index);
        if items[up] < items[index] {
            items.swap(up, index);
            index = up;
        } else {
            return;
        }
    }
}

/// Arrange `items` in max-heap order, bottom-up.
pub(crate) fn heapify<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    for start in (0..=parent(items.len() - 1)).rev() {
        sift_down(items, start, items.len());
    }
}

/// Binary max-heap stored in level order in a vector.
///
/// The children of slot `i` live at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    buffer: Vec<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Build a heap from arbitrary elements.
    pub fn from_vec(mut items: Vec<T>) -> Self {
        heapify(&mut items);
        Self { buffer: items }
    }

    /// The largest element.
    pub fn peek(&self) -> Option<&T> {
        self.buffer.first()
    }

    /// Remove and return the largest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.buffer.is_empty() {
            return None;
        }
        let top = self.buffer.swap_remove(0);
        let end = self.buffer.len();
        sift_down(&mut self.buffer, 0, end);
        Some(top)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Elements in storage (level) order.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Consume the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.buffer.len()).rev() {
            self.buffer.swap(0, end);
            sift_down(&mut self.buffer, 0, end);
        }
        self.buffer
    }

    fn occupied(&self, index: usize) -> Option<usize> {
        (index < self.buffer.len()).then_some(index)
    }

    fn pre_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.buffer.len());
        let mut stack: Vec<usize> = self.occupied(0).into_iter().collect();
        while let Some(index) = stack.pop() {
            keys.push(&self.buffer[index]);
            stack.extend(self.occupied(right_child(index)));
            stack.extend(self.occupied(left_child(index)));
        }
        keys
    }

    fn in_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.buffer.len());
        let mut stack = Vec::new();
        let mut current = self.occupied(0);
        loop {
            while let Some(index) = current {
                stack.push(index);
                current = self.occupied(left_child(index));
            }
            let Some(index) = stack.pop() else {
                break;
            };
            keys.push(&self.buffer[index]);
            current = self.occupied(right_child(index));
        }
        keys
    }

    fn post_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.buffer.len());
        let mut stack: Vec<usize> = self.occupied(0).into_iter().collect();
        while let Some(index) = stack.pop() {
            keys.push(&self.buffer[index]);
            stack.extend(self.occupied(left_child(index)));
            stack.extend(self.occupied(right_child(index)));
        }
        keys.reverse();
        keys
    }
}

impl<T: Ord> Tree<T> for BinaryHeap<T> {
    fn insert(&mut self, key: T) {
        self.buffer.push(key);
        let last = self.buffer.len() - 1;
        sift_up(&mut self.buffer, last);
    }

    fn delete(&mut self, key: &T) -> bool {
        let Some(position) = self.buffer.iter().position(|k| k == key) else {
            return false;
        };
        self.buffer.swap_remove(position);
        if position < self.buffer.len() {
            let end = self.buffer.len();
            sift_down(&mut self.buffer, position, end);
            sift_up(&mut self.buffer, position);
        }
        true
    }

    fn root(&self) -> Option<&T> {
        self.peek()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn keys(&self, order: TreeOrder) -> Vec<&T> {
        match order {
            TreeOrder::LevelOrder => self.buffer.iter().collect(),
            TreeOrder::PreOrder => self.pre_order(),
            TreeOrder::InOrder => self.in_order(),
            TreeOrder::PostOrder => self.post_order(),
        }
    }

    /// Heaps list their keys in storage order.
    fn iter(&self) -> std::vec::IntoIter<&T> {
        self.keys(TreeOrder::LevelOrder).into_iter()
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
