pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The shape shared by every container in this crate: a fixed number of slots and
/// a single insertion point that never moves past the last slot.
///
/// This trait is sealed and implemented by [`SeqList`](crate::SeqList),
/// [`Stack`](crate::Stack) and [`Queue`](crate::Queue).
pub trait FixedCapacity: sealed::Sealed {
    type Item;

    /// Total number of slots, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of live items.
    fn len(&self) -> usize;

    /// Number of items that can still be inserted before the container is full.
    fn remaining(&self) -> usize;

    /// Returns `true` if the container allocated its own storage.
    fn is_owned(&self) -> bool;

    /// Inserts an item at the insertion point.
    ///
    /// # Safety
    /// `self.has_remaining()` must hold.
    #[doc(hidden)]
    unsafe fn insert_unchecked(&mut self, item: Self::Item);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the container has room for at least one more item.
    fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// If the container [has remaining capacity](Self::has_remaining), returns a
    /// [`VacantEntry`] that can be used to insert one item without further checks.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::{FixedCapacity, Stack};
    /// let mut stack = Stack::with_capacity(1);
    /// stack.with_vacancy().unwrap().write(7);
    /// assert!(stack.with_vacancy().is_none());
    /// assert_eq!(stack.top(), Some(&7));
    /// ```
    fn with_vacancy(&mut self) -> Option<VacantEntry<'_, Self>>
    where
        Self: Sized,
    {
        if self.has_remaining() {
            // SAFETY: `self.has_remaining()` returned `true`
            Some(unsafe { VacantEntry::new_unchecked(self) })
        } else {
            None
        }
    }
}

/// A reserved free slot in a [`FixedCapacity`] container.
#[derive(Debug)]
pub struct VacantEntry<'buf, C: FixedCapacity>(
    // Invariant: `buf.has_remaining()`
    &'buf mut C,
);

impl<'buf, C: FixedCapacity> VacantEntry<'buf, C> {
    pub(crate) unsafe fn new_unchecked(buf: &'buf mut C) -> Self {
        invariant!(buf.has_remaining());
        Self(buf)
    }

    pub fn write(self, item: C::Item) {
        // SAFETY: the invariant of `Self` is that `self.0.has_remaining()`
        unsafe { self.0.insert_unchecked(item) };
    }
}
