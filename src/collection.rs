//! The base collection contract the ordered tree extends.

/// A sized container of `T` that values can be added to and removed from.
///
/// # Examples
///
/// ```
/// use linked_bst::{Collection, OrderedTree, TreeError};
///
/// fn drain_one<C: Collection<i32, Error = TreeError>>(c: &mut C, x: i32) -> bool {
///     c.remove(&x).is_ok()
/// }
///
/// let mut tree = OrderedTree::new();
/// Collection::add(&mut tree, 4);
/// assert!(drain_one(&mut tree, 4));
/// assert!(!drain_one(&mut tree, 4));
/// assert!(Collection::is_empty(&tree));
/// ```
pub trait Collection<T> {
    /// What `remove` reports when the item isn't present.
    type Error;

    /// How many items are stored.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `item`. Never rejects.
    fn add(&mut self, item: T);

    /// Removes one item equal to `item` and returns it.
    fn remove(&mut self, item: &T) -> Result<T, Self::Error>;

    /// Removes everything.
    fn clear(&mut self);
}
