/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child link a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A `Node` holds one value and exclusively owns its children.
#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub(crate) fn child_link_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Follows `path` down from `link` and returns the link slot it ends on, or `None` if the path
/// runs off the bottom of the tree.
pub(crate) fn descend<'a, T>(mut link: &'a mut Link<T>, path: &[Side]) -> Option<&'a mut Link<T>> {
    for &side in path {
        link = link.as_mut()?.child_link_mut(side);
    }
    Some(link)
}

/// Detaches the rightmost (largest) node of the subtree in `link` and returns its value. The
/// detached node's left child, if any, is spliced into the slot it leaves behind.
pub(crate) fn take_max<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref().is_some_and(|node| node.right.is_some()) {
        if let Some(node) = link {
            link = &mut node.right;
        }
    }

    let max = link.take()?;
    let Node { value, left, .. } = *max;
    *link = left;
    Some(value)
}
