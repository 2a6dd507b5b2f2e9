use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the T to the tree
    Add(T),
    /// Remove one T from the tree
    Remove(T),
    /// Overwrite a T with itself
    Replace(T),
    /// Rebuild the tree with minimal height
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Replace(T::arbitrary(g)),
            3 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
