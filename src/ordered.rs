//! A link-based BST over any totally ordered `T`. Each value lives in its own heap allocated node
//! and every node exclusively owns its children. Equal values are allowed and always go to the
//! right, so this behaves like a sorted multiset.
//!
//! The tree never rebalances itself. Call [`OrderedTree::rebalance`] to rebuild it with minimal
//! height, e.g. after inserting a long sorted run.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one copy at a time.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert!(tree.contains(&1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::collection::Collection;
use crate::error::{TreeError, TreeResult};
use crate::iter::{InOrder, IntoIter, LevelOrder, PostOrder, PreOrder};
use crate::node::{self, Link, Node, Side};

/// A Binary Search Tree that can be used for adding, finding, and removing values as well as
/// range and neighbour queries.
pub struct OrderedTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    // TODO stack based Clone
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
        }
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree stores nothing.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every node and leaves the tree empty.
    pub fn clear(&mut self) {
        // Drop node by node so a degenerate tree doesn't recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Number of edges on the longest path from the root to a leaf. A lone root has height `0`
    /// and the empty tree has no height at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let root = self.root.as_deref()?;
        let mut stack = vec![(root, 0)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            if node.is_leaf() {
                height = height.max(depth);
                continue;
            }
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        Some(height)
    }

    /// Whether the height is close enough to the minimum possible for this many values, i.e.
    /// `height < 2 * log2(len + 1) - 1`. An empty tree counts as balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=10).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        match self.height() {
            None => true,
            Some(height) => (height as f64) < 2.0 * ((self.size + 1) as f64).log2() - 1.0,
        }
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        self.inorder()
    }

    /// In-order traversal: left subtree, node, right subtree. Yields values in ascending order.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// Pre-order traversal: node, left subtree, right subtree.
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// Post-order traversal: left subtree, right subtree, node.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Level-order traversal: breadth first, each level from left to right.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }

    /// The smallest value, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value, if any. With duplicates this is the last one added.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Adds `item` to the tree. Nothing is ever rejected: an item equal to one already stored is
    /// placed in that value's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(3);
    /// tree.add(3);
    /// tree.add(1);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &3, &3]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Potentially finds the stored value equal to `item`. If no node has an equal value, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 2, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            node = match item.cmp(&n.value) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return Some(&n.value),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        None
    }

    /// Whether a value equal to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Removes one value equal to `item` and returns it.
    ///
    /// A node with two children is never unlinked itself. Instead it takes over the largest value
    /// of its left subtree and the node that held that value is unlinked.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if nothing equal to `item` is stored. The tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{OrderedTree, TreeError};
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(TreeError::NotFound));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> TreeResult<T> {
        let Some(path) = self.path_to(item) else {
            trace!(size = self.size, "removal target not in tree");
            return Err(TreeError::NotFound);
        };

        // Hang the root off a detached pre-root slot so that removing the root is no different
        // from removing any other node. The root is read back from that slot afterwards.
        let mut pre_root = self.root.take();
        let removed = Self::unlink(&mut pre_root, &path);
        self.root = pre_root;

        let removed = removed.ok_or(TreeError::NotFound)?;
        self.size -= 1;
        trace!(size = self.size, depth = path.len(), "removed value");
        Ok(removed)
    }

    /// Overwrites the stored value equal to `item` with `new_item` and returns the old value.
    /// Returns `None`, leaving the tree alone, if `item` isn't stored.
    ///
    /// The node is not moved. If `new_item` doesn't sort into the same position as `item`, the
    /// ordering of the tree is broken and later searches may miss values. Keeping `new_item`
    /// equivalent to `item` is the caller's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [(2, 'b'), (1, 'a')].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'b'), (2, 'c')), Some((2, 'b')));
    /// assert_eq!(tree.replace(&(9, 'z'), (9, 'y')), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let path = self.path_to(item)?;
        let target = node::descend(&mut self.root, &path)?.as_deref_mut()?;
        Some(mem::replace(&mut target.value, new_item))
    }

    /// Every stored value `v` with `low <= v <= high`, in ascending order. An inverted range is
    /// simply empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = (1..=10).collect();
    ///
    /// assert_eq!(tree.range_find(&3, &7), vec![&3, &4, &5, &6, &7]);
    /// assert!(tree.range_find(&7, &3).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        // NB this walks everything below `low`. Pruning subtrees outside the range would avoid
        // that but the in-order walk keeps this simple and still stops as soon as we pass `high`.
        self.inorder()
            .skip_while(|v| *v < low)
            .take_while(|v| *v <= high)
            .collect()
    }

    /// Rebuilds the tree with minimal height for its size, keeping every value (duplicates
    /// included). The values are pulled out in sorted order and added back middle first, so each
    /// half ends up on its own side of its parent. Runs of equal values still all go right, so
    /// only distinct values are guaranteed the minimal shape.
    ///
    /// Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), Some(6));
    ///
    /// assert_eq!(tree.rebalance().height(), Some(2));
    /// assert_eq!(tree.preorder().collect::<Vec<_>>(), vec![&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn rebalance(&mut self) -> &mut Self {
        let height_before = self.height();
        let mut sorted: Vec<Option<T>> = mem::take(self).into_iter().map(Some).collect();
        self.fill_balanced(&mut sorted);
        debug!(
            size = self.size,
            ?height_before,
            height_after = ?self.height(),
            "rebalanced tree"
        );
        self
    }

    /// The smallest stored value strictly greater than `item`. `item` doesn't have to be stored
    /// itself; in that case this is the value that would follow it if it were added.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&10), Some(&20));
    /// assert_eq!(tree.successor(&15), Some(&20));
    /// assert_eq!(tree.successor(&30), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if item < &n.value {
                best = Some(&n.value);
                node = n.left.as_deref();
            } else {
                node = n.right.as_deref();
            }
        }
        best
    }

    /// The largest stored value strictly less than `item`. Like [`OrderedTree::successor`],
    /// `item` doesn't have to be stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&30), Some(&20));
    /// assert_eq!(tree.predecessor(&25), Some(&20));
    /// assert_eq!(tree.predecessor(&10), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T> {
        let mut best = None;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if &n.value < item {
                best = Some(&n.value);
                node = n.right.as_deref();
            } else {
                node = n.left.as_deref();
            }
        }
        best
    }

    /// The sides to take from the root to reach the first node equal to `item`, using the same
    /// ordering `add` does.
    fn path_to(&self, item: &T) -> Option<Vec<Side>> {
        let mut path = Vec::new();
        let mut node = self.root.as_deref()?;
        loop {
            let side = match item.cmp(&node.value) {
                Ordering::Equal => return Some(path),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            node = node.child(side)?;
            path.push(side);
        }
    }

    /// Unlinks the value at the end of `path` below `link`.
    fn unlink(link: &mut Link<T>, path: &[Side]) -> Option<T> {
        let slot = node::descend(link, path)?;
        let target = slot.as_deref_mut()?;

        if target.left.is_some() && target.right.is_some() {
            let max = node::take_max(&mut target.left)?;
            return Some(mem::replace(&mut target.value, max));
        }

        // At most one child: it takes the removed node's place in its parent.
        let Node { value, left, right } = *slot.take()?;
        *slot = left.or(right);
        Some(value)
    }

    /// Adds the middle of `items` and then recurses on either half. Used by `rebalance` on
    /// sorted input.
    fn fill_balanced(&mut self, items: &mut [Option<T>]) {
        if items.is_empty() {
            return;
        }
        let mid = items.len() / 2;
        if let Some(item) = items[mid].take() {
            self.add(item);
        }
        let (left, right) = items.split_at_mut(mid);
        self.fill_balanced(left);
        self.fill_balanced(&mut right[1..]);
    }
}

impl<T: Ord> Collection<T> for OrderedTree<T> {
    type Error = TreeError;

    fn len(&self) -> usize {
        OrderedTree::len(self)
    }

    fn add(&mut self, item: T) {
        OrderedTree::add(self, item)
    }

    fn remove(&mut self, item: &T) -> TreeResult<T> {
        OrderedTree::remove(self, item)
    }

    fn clear(&mut self) {
        OrderedTree::clear(self)
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> From<Vec<T>> for OrderedTree<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.size = 0;
        IntoIter::new(self.root.take())
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the tree rotated 90 degrees counterclockwise: the right subtree above its parent, the
/// left subtree below, and each value indented with one `"| "` per level of depth.
impl<T: fmt::Display> fmt::Display for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order walk (right, node, left) carrying each node's depth.
        let mut stack = Vec::new();
        let mut next = self.root.as_deref().map(|n| (n, 0));
        loop {
            while let Some((node, depth)) = next {
                stack.push((node, depth));
                next = node.right.as_deref().map(|n| (n, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.value)?;
            next = node.left.as_deref().map(|n| (n, depth + 1));
        }
    }
}
