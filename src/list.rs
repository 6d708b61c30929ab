use std::{
    fmt::{self, Debug, Formatter},
    ops::{Index, IndexMut},
};

use crate::{
    cursor::Window,
    entry::{sealed::Sealed, FixedCapacity},
    error::FullError,
    storage::Storage,
};

/// Append-only, random-access list that can hold up to `capacity` items of type `T`.
///
/// The list never grows. Its storage is either allocated once at construction
/// ([`with_capacity`](Self::with_capacity), [`filled`](Self::filled)) or borrowed from
/// the caller ([`from_borrowed`](Self::from_borrowed)).
pub struct SeqList<'a, T> {
    // Invariant: items `[0, window.back())` are live, `window.front() == 0`
    storage: Storage<'a, T>,
    window: Window,
}

impl<T: Default> SeqList<'static, T> {
    /// Creates an empty list owning `capacity` default-initialized slots.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::SeqList;
    /// let list = SeqList::<u32>::with_capacity(4);
    /// assert_eq!(list.capacity(), 4);
    /// assert!(list.is_empty());
    /// assert!(list.is_owned());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Storage::with_capacity(capacity))
    }
}

impl<T: Clone> SeqList<'static, T> {
    /// Creates an empty list owning `capacity` slots, each initialized to a clone of `value`.
    pub fn filled(capacity: usize, value: T) -> Self {
        Self::from_storage(Storage::filled(capacity, value))
    }
}

impl<'a, T> SeqList<'a, T> {
    /// Creates an empty list over caller-supplied memory. The capacity is the length of `buf`.
    ///
    /// The list never allocates or releases `buf`; existing contents are treated as
    /// unused slots and overwritten by [`push`](Self::push).
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::SeqList;
    /// let mut mem = [0; 3];
    /// let mut list = SeqList::from_borrowed(&mut mem);
    /// list.push(5);
    /// list.push(6);
    /// assert!(!list.is_owned());
    /// drop(list);
    /// assert_eq!(mem, [5, 6, 0]);
    /// ```
    pub fn from_borrowed(buf: &'a mut [T]) -> Self {
        Self::from_storage(Storage::borrowed(buf))
    }

    fn from_storage(storage: Storage<'a, T>) -> Self {
        let window = Window::zero(storage.len());
        Self { storage, window }
    }

    /// Returns the number of items in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns the number of slots, fixed at construction.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.window.cap()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Returns `true` if every slot is in use.
    #[inline]
    pub const fn is_full(&self) -> bool {
        !self.window.has_remaining()
    }

    /// Returns the number of items that can be appended before the list is full.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.window.remaining()
    }

    /// Returns `true` if the list allocated its own storage.
    pub const fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    /// Appends an item, assuming the list is not [full](Self::is_full).
    ///
    /// # Safety
    /// The following invariant must be held:
    /// - `self.len() < self.capacity()`
    #[doc(alias = "append")]
    #[inline]
    pub unsafe fn push_unchecked(&mut self, item: T) {
        let back = self.window.back();
        invariant!(back < self.capacity(), "push on a full list");
        *self.storage.get_unchecked_mut(back) = item;
        self.window.set_back(back + 1);
    }

    /// Tries to append an item. Returns `Err(FullError)` if the list is full.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::SeqList;
    /// let mut list = SeqList::with_capacity(1);
    /// assert_eq!(list.try_push(1), Ok(()));
    /// assert!(list.try_push(2).is_err());
    /// assert_eq!(list, [1]);
    /// ```
    #[doc(alias = "append")]
    #[inline]
    pub fn try_push(&mut self, item: T) -> Result<(), FullError> {
        if self.is_full() {
            return Err(FullError::new(self.capacity()));
        }
        // SAFETY: the list is not full
        unsafe { self.push_unchecked(item) };
        Ok(())
    }

    /// Appends an item.
    ///
    /// # Panics
    /// Panics if the list [is full](Self::is_full).
    ///
    /// ```should_panic
    /// # use fixed_capacity::SeqList;
    /// let mut list = SeqList::with_capacity(1);
    /// list.push(0);
    /// list.push(1);
    /// ```
    #[doc(alias = "append")]
    #[track_caller]
    #[inline]
    pub fn push(&mut self, item: T) {
        if let Err(err) = self.try_push(item) {
            panic!("{err}");
        }
    }

    /// Forgets all items. The slots keep their contents until overwritten.
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Returns a reference to the item at the given index without doing bounds checks.
    ///
    /// # Safety
    /// The given index must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        invariant!(
            index < self.len(),
            "index {index} out of range for length {}",
            self.len()
        );
        self.storage.get_unchecked(index)
    }

    /// Returns a mutable reference to the item at the given index without doing bounds checks.
    ///
    /// # Safety
    /// The given index must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        invariant!(
            index < self.len(),
            "index {index} out of range for length {}",
            self.len()
        );
        self.storage.get_unchecked_mut(index)
    }

    /// Returns a reference to the item at the given index, or `None` if the index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::SeqList;
    /// let mut list = SeqList::with_capacity(3);
    /// list.extend([0, 1]);
    /// assert_eq!(list.get(1), Some(&1));
    /// assert_eq!(list.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the item at the given index, or `None` if the index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns the live items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `back <= cap == storage.len()`
        unsafe { self.storage.get_unchecked(..self.window.back()) }
    }

    /// Returns the live items as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let back = self.window.back();
        // SAFETY: `back <= cap == storage.len()`
        unsafe { self.storage.get_unchecked_mut(..back) }
    }

    /// Returns the whole underlying storage, including slots past [`len`](Self::len).
    pub fn data(&self) -> &[T] {
        &self.storage
    }

    /// Returns the whole underlying storage mutably, including slots past [`len`](Self::len).
    ///
    /// Writing past `len` does not change the length; a later [`push`](Self::push)
    /// overwrites the slot.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }
}

impl<T> Sealed for SeqList<'_, T> {}

impl<T> FixedCapacity for SeqList<'_, T> {
    type Item = T;

    fn capacity(&self) -> usize {
        self.capacity()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn remaining(&self) -> usize {
        self.remaining()
    }

    fn is_owned(&self) -> bool {
        self.is_owned()
    }

    unsafe fn insert_unchecked(&mut self, item: T) {
        self.push_unchecked(item);
    }
}

impl<T> Index<usize> for SeqList<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for SeqList<'_, T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

/// Appends every item of the iterator.
///
/// # Panics
/// Panics if the iterator yields more items than [remain](SeqList::remaining).
impl<T> Extend<T> for SeqList<'_, T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialEq, B: AsRef<[T]> + ?Sized> PartialEq<B> for SeqList<'_, T> {
    fn eq(&self, other: &B) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl<T: Debug> Debug for SeqList<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test() {
        let mut list = SeqList::with_capacity(3);
        assert_eq!(list, []);
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(list.capacity(), 3);

        list.push(10);
        list.push(11);
        assert_eq!(list, [10, 11]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], 10);
        assert_eq!(list[1], 11);

        list[1] = 21;
        *list.get_mut(0).unwrap() += 10;
        assert_eq!(list, [20, 21]);

        // fill cap
        list.push(22);
        assert!(list.is_full());
        assert_eq!(list.remaining(), 0);
        assert_eq!(list.try_push(23), Err(FullError::new(3)));
        assert_eq!(list, [20, 21, 22]);
    }

    #[test]
    fn test_clear() {
        let mut list = SeqList::filled(3, -1);
        list.extend([1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
        // contents survive until overwritten
        assert_eq!(list.data(), &[1, 2, 3]);

        list.extend([4, 5, 6]);
        assert_eq!(list, [4, 5, 6]);
    }

    #[test]
    fn test_borrowed() {
        let mut mem = vec![String::new(); 2];
        let mut list = SeqList::from_borrowed(&mut mem);
        assert_eq!(list.capacity(), 2);
        assert!(list.is_empty());
        assert!(!list.is_owned());

        list.push("a".to_owned());
        list.push("b".to_owned());
        assert!(list.is_full());
        drop(list);
        assert_eq!(mem, ["a", "b"]);
    }

    #[test]
    fn test_data_mut() {
        let mut list = SeqList::<u8>::with_capacity(4);
        list.data_mut().copy_from_slice(&[9, 9, 9, 9]);
        assert!(list.is_empty());
        list.push(1);
        assert_eq!(list.data(), &[1, 9, 9, 9]);
    }

    #[test]
    fn test_unchecked() {
        let mut list = SeqList::with_capacity(2);
        unsafe {
            list.push_unchecked(1);
            list.push_unchecked(2);
            *list.get_unchecked_mut(0) = 3;
            assert_eq!(*list.get_unchecked(0), 3);
            assert_eq!(*list.get_unchecked(1), 2);
        }
    }

    #[test]
    fn test_zero_cap() {
        let mut list = SeqList::<i32>::with_capacity(0);
        assert!(list.is_empty());
        assert!(list.is_full());
        assert!(list.as_slice().is_empty());
        assert!(list.try_push(0).is_err());
        assert_eq!(format!("{list:?}"), "[]");
    }

    #[test]
    #[should_panic = "buffer is full (capacity 2)"]
    fn test_push_overflow() {
        let mut list = SeqList::with_capacity(2);
        list.extend([0, 1, 2]);
    }

    #[test]
    #[should_panic = "push on a full list"]
    fn test_push_unchecked_overflow_asserts() {
        let mut list = SeqList::with_capacity(1);
        unsafe {
            list.push_unchecked(0);
            list.push_unchecked(1);
        }
    }

    #[test]
    #[should_panic = "index 1 out of range for length 1"]
    fn test_get_unchecked_asserts() {
        let mut list = SeqList::with_capacity(2);
        list.push(0);
        unsafe { list.get_unchecked(1) };
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let mut list = SeqList::with_capacity(2);
        list.push(0);
        let _ = list[1];
    }
}
