//! Unbalanced binary search tree.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use super::{Tree, TreeOrder};

struct Node<T> {
    key: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree keeping keys less than or equal to a node in its
/// left subtree.
///
/// In-order iteration yields keys in ascending order. The tree is not
/// rebalanced, so sorted input degrades it to a list. Every operation
/// walks the tree with a loop, so depth is bounded by memory rather than
/// the call stack.
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest key.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Largest key.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Consume the tree, returning its keys in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else {
                break;
            };
            let Node { key, right, .. } = *node;
            keys.push(key);
            current = right;
        }
        keys
    }
}

impl<T> BinarySearchTree<T> {
    fn pre_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        keys
    }

    fn in_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(&node.key);
            current = node.right.as_deref();
        }
        keys
    }

    fn post_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(&node.key);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        keys.reverse();
        keys
    }

    fn level_order(&self) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            keys.push(&node.key);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        keys
    }
}

/// Unlink the first node matching `key` below `slot`.
fn remove<T: Ord>(mut slot: &mut Option<Box<Node<T>>>, key: &T) -> bool {
    loop {
        let ordering = match slot.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return false,
        };
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = slot else {
            return false;
        };
        slot = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }

    let Some(mut node) = slot.take() else {
        return false;
    };
    *slot = match (node.left.take(), node.right.take()) {
        (Some(left), Some(right)) => {
            // Replace with the in-order successor.
            let mut right = Some(right);
            if let Some(successor) = take_min(&mut right) {
                node.key = successor;
            }
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
        (left, right) => left.or(right),
    };
    true
}

/// Detach the smallest key below `slot`, splicing its right child into
/// its place.
fn take_min<T>(mut slot: &mut Option<Box<Node<T>>>) -> Option<T> {
    while slot.as_deref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = slot else {
            return None;
        };
        slot = &mut node.left;
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    let Node { key, .. } = *node;
    Some(key)
}

impl<T: Ord> Tree<T> for BinarySearchTree<T> {
    fn insert(&mut self, key: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key <= node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    fn delete(&mut self, key: &T) -> bool {
        let removed = remove(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.key)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn keys(&self, order: TreeOrder) -> Vec<&T> {
        match order {
            TreeOrder::PreOrder => self.pre_order(),
            TreeOrder::InOrder => self.in_order(),
            TreeOrder::PostOrder => self.post_order(),
            TreeOrder::LevelOrder => self.level_order(),
        }
    }

    fn search(&self, key: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            };
        }
        None
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut pending: Vec<(&Node<T>, &mut Option<Box<Node<T>>>)> = Vec::new();
            if let Some(node) = self.root.as_deref() {
                pending.push((node, &mut root));
            }
            while let Some((source, slot)) = pending.pop() {
                let copy = slot.insert(Box::new(Node::new(source.key.clone())));
                let Node { left, right, .. } = &mut **copy;
                if let Some(child) = source.left.as_deref() {
                    pending.push((child, left));
                }
                if let Some(child) = source.right.as_deref() {
                    pending.push((child, right));
                }
            }
        }
        Self {
            root,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("keys", &self.in_order())
            .finish()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // Unlink iteratively so degenerate trees do not recurse on drop.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
