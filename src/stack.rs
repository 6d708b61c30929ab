use std::fmt::{self, Debug, Formatter};

use crate::{
    cursor::Window,
    entry::{sealed::Sealed, FixedCapacity},
    error::FullError,
    storage::Storage,
};

/// LIFO stack that can hold up to `capacity` items of type `T`.
///
/// # Examples
/// ```
/// # use fixed_capacity::Stack;
/// let mut stack = Stack::with_capacity(3);
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(&2));
/// assert_eq!(stack.top(), Some(&1));
/// ```
pub struct Stack<'a, T> {
    // Invariant: items `[0, window.back())` are live, bottom to top, `window.front() == 0`
    storage: Storage<'a, T>,
    window: Window,
}

impl<T: Default> Stack<'static, T> {
    /// Creates an empty stack owning `capacity` default-initialized slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Storage::with_capacity(capacity))
    }
}

impl<T: Clone> Stack<'static, T> {
    /// Creates an empty stack owning `capacity` slots, each initialized to a clone of `value`.
    pub fn filled(capacity: usize, value: T) -> Self {
        Self::from_storage(Storage::filled(capacity, value))
    }
}

impl<'a, T> Stack<'a, T> {
    /// Creates an empty stack over caller-supplied memory. The capacity is the length of `buf`.
    pub fn from_borrowed(buf: &'a mut [T]) -> Self {
        Self::from_storage(Storage::borrowed(buf))
    }

    fn from_storage(storage: Storage<'a, T>) -> Self {
        let window = Window::zero(storage.len());
        Self { storage, window }
    }

    /// Returns the depth of the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.window.cap()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        !self.window.has_remaining()
    }

    #[inline]
    pub const fn remaining(&self) -> usize {
        self.window.remaining()
    }

    pub const fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    /// Pushes an item, assuming the stack is not [full](Self::is_full).
    ///
    /// # Safety
    /// The following invariant must be held:
    /// - `self.len() < self.capacity()`
    #[inline]
    pub unsafe fn push_unchecked(&mut self, item: T) {
        let back = self.window.back();
        invariant!(back < self.capacity(), "push on a full stack");
        *self.storage.get_unchecked_mut(back) = item;
        self.window.set_back(back + 1);
    }

    /// Tries to push an item. Returns `Err(FullError)` if the stack is full.
    #[inline]
    pub fn try_push(&mut self, item: T) -> Result<(), FullError> {
        if self.is_full() {
            return Err(FullError::new(self.capacity()));
        }
        // SAFETY: the stack is not full
        unsafe { self.push_unchecked(item) };
        Ok(())
    }

    /// Pushes an item.
    ///
    /// # Panics
    /// Panics if the stack [is full](Self::is_full).
    #[track_caller]
    #[inline]
    pub fn push(&mut self, item: T) {
        if let Err(err) = self.try_push(item) {
            panic!("{err}");
        }
    }

    /// Removes the top item without looking at it.
    ///
    /// # Safety
    /// The stack must not be empty.
    #[inline]
    pub unsafe fn pop_unchecked(&mut self) {
        invariant!(!self.is_empty(), "pop on an empty stack");
        self.window.set_back(self.window.back() - 1);
    }

    /// Removes the top item and returns a reference to it, or `None` if the stack is empty.
    ///
    /// The item stays in its slot until a later push overwrites it.
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity::Stack;
    /// let mut stack = Stack::with_capacity(2);
    /// stack.extend(["a", "b"]);
    /// assert_eq!(stack.pop(), Some(&"b"));
    /// assert_eq!(stack.pop(), Some(&"a"));
    /// assert_eq!(stack.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the stack is not empty
        unsafe { self.pop_unchecked() };
        // SAFETY: the popped slot `back` is below `cap`
        Some(unsafe { self.storage.get_unchecked(self.window.back()) })
    }

    /// Returns a reference to the top item without checking that the stack is non-empty.
    ///
    /// # Safety
    /// The stack must not be empty.
    #[inline]
    pub unsafe fn top_unchecked(&self) -> &T {
        invariant!(!self.is_empty(), "top of an empty stack");
        self.storage.get_unchecked(self.window.back() - 1)
    }

    /// Returns a mutable reference to the top item without checking that the stack is non-empty.
    ///
    /// # Safety
    /// The stack must not be empty.
    #[inline]
    pub unsafe fn top_unchecked_mut(&mut self) -> &mut T {
        invariant!(!self.is_empty(), "top of an empty stack");
        let back = self.window.back();
        self.storage.get_unchecked_mut(back - 1)
    }

    /// Returns a reference to the top item, or `None` if the stack is empty.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the top item, or `None` if the stack is empty.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Removes all items. The slots keep their contents until overwritten.
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Returns the live items as a slice, bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `back <= cap == storage.len()`
        unsafe { self.storage.get_unchecked(..self.window.back()) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        let back = self.window.back();
        // SAFETY: `back <= cap == storage.len()`
        unsafe { self.storage.get_unchecked_mut(..back) }
    }
}

impl<T> Sealed for Stack<'_, T> {}

impl<T> FixedCapacity for Stack<'_, T> {
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

/// Pushes every item of the iterator, the last one ending up on top.
///
/// # Panics
/// Panics if the iterator yields more items than [remain](Stack::remaining).
impl<T> Extend<T> for Stack<'_, T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialEq, B: AsRef<[T]> + ?Sized> PartialEq<B> for Stack<'_, T> {
    fn eq(&self, other: &B) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl<T: Debug> Debug for Stack<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
