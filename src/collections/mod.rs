//! Tree and heap containers consumed by the sorting routines.

pub mod heap;
pub mod search_tree;

pub use heap::BinaryHeap;
pub use search_tree::BinarySearchTree;

/// Order in which a tree's keys are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TreeOrder {
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, node, right subtree.
    #[default]
    InOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Level by level, left to right.
    LevelOrder,
}

/// Container contract shared by trees and heaps.
pub trait Tree<T> {
    /// Insert a key. Duplicates are kept.
    fn insert(&mut self, key: T);

    /// Remove one occurrence of `key`. Returns false if it was absent.
    fn delete(&mut self, key: &T) -> bool;

    /// The key at the root, if any.
    fn root(&self) -> Option<&T>;

    /// Number of keys.
    fn size(&self) -> usize;

    /// All keys in the given order.
    fn keys(&self, order: TreeOrder) -> Vec<&T>;

    /// Find a key equal to `key`.
    fn search(&self, key: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.keys(TreeOrder::InOrder).into_iter().find(|k| *k == key)
    }

    /// Keys in the container's natural order (in-order for trees).
    fn iter(&self) -> std::vec::IntoIter<&T> {
        self.keys(TreeOrder::InOrder).into_iter()
    }

    /// True if the container holds no keys.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
