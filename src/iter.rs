//! Traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! Every traversal keeps its own stack (or queue) instead of recursing, so walking a tree that
//! degenerated into a long chain can't overflow the call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Borrowing in-order iterator, yielding values in ascending order.
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter] and
/// [`OrderedTree::inorder`][crate::OrderedTree::inorder].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Borrowing pre-order iterator: a node, then its left subtree, then its right subtree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// Borrowing post-order iterator: left subtree, right subtree, then the node.
pub struct PostOrder<'a, T> {
    /// Each entry remembers whether its children have been pushed already.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded || node.is_leaf() {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Borrowing breadth-first iterator, visiting each level left to right.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Consuming in-order iterator. Created by `OrderedTree::into_iter`.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        Some(value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // The right subtrees still hanging off the stack would otherwise be dropped recursively.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
