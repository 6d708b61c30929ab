use std::fmt::{self, Debug, Formatter};

use crate::{
    cursor::Window,
    entry::{sealed::Sealed, FixedCapacity},
    error::FullError,
    storage::Storage,
};

/// FIFO queue over a one-shot window of `capacity` slots.
///
/// The back cursor never wraps around: at most `capacity` items can be enqueued
/// between two calls to [`clear`](Self::clear), no matter how many were dequeued in
/// the meantime. This fits workloads that enqueue every item at most once per round,
/// such as a breadth-first frontier.
///
/// # Examples
/// ```
/// # use fixed_capacity::Queue;
/// let mut queue = Queue::with_capacity(3);
/// queue.extend([1, 2, 3]);
/// assert_eq!(queue.dequeue(), Some(&1));
/// assert_eq!(queue.front(), Some(&2));
/// assert_eq!(queue.len(), 2);
/// // the window is exhausted even though a slot was dequeued
/// assert!(queue.try_enqueue(4).is_err());
/// queue.clear();
/// assert!(queue.try_enqueue(4).is_ok());
/// ```
pub struct Queue<'a, T> {
    // Invariant: items `[window.front(), window.back())` are live, front to back
    storage: Storage<'a, T>,
    window: Window,
}

impl<T: Default> Queue<'static, T> {
    /// Creates an empty queue owning `capacity` default-initialized slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Storage::with_capacity(capacity))
    }
}

impl<T: Clone> Queue<'static, T> {
    /// Creates an empty queue owning `capacity` slots, each initialized to a clone of `value`.
    pub fn filled(capacity: usize, value: T) -> Self {
        Self::from_storage(Storage::filled(capacity, value))
    }
}

impl<'a, T> Queue<'a, T> {
    /// Creates an empty queue over caller-supplied memory. The capacity is the length of `buf`.
    pub fn from_borrowed(buf: &'a mut [T]) -> Self {
        Self::from_storage(Storage::borrowed(buf))
    }

    fn from_storage(storage: Storage<'a, T>) -> Self {
        let window = Window::zero(storage.len());
        Self { storage, window }
    }

    /// Returns the number of items waiting in the queue.
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

    /// Returns the number of items that can still be enqueued before [`clear`](Self::clear).
    ///
    /// Dequeuing does not give slots back.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.window.remaining()
    }

    /// Returns `true` if the back cursor reached the end of the window.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        !self.window.has_remaining()
    }

    pub const fn is_owned(&self) -> bool {
        self.storage.is_owned()
    }

    /// Enqueues an item, assuming the window is not [exhausted](Self::is_exhausted).
    ///
    /// # Safety
    /// The following invariant must be held:
    /// - `self.remaining() > 0`
    #[inline]
    pub unsafe fn enqueue_unchecked(&mut self, item: T) {
        let back = self.window.back();
        invariant!(back < self.capacity(), "enqueue on an exhausted queue");
        *self.storage.get_unchecked_mut(back) = item;
        self.window.set_back(back + 1);
    }

    /// Tries to enqueue an item. Returns `Err(FullError)` if the window is exhausted.
    #[inline]
    pub fn try_enqueue(&mut self, item: T) -> Result<(), FullError> {
        if self.is_exhausted() {
            return Err(FullError::new(self.capacity()));
        }
        // SAFETY: the window is not exhausted
        unsafe { self.enqueue_unchecked(item) };
        Ok(())
    }

    /// Enqueues an item.
    ///
    /// # Panics
    /// Panics if the window [is exhausted](Self::is_exhausted).
    #[track_caller]
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        if let Err(err) = self.try_enqueue(item) {
            panic!("{err}");
        }
    }

    /// Removes the front item without looking at it.
    ///
    /// # Safety
    /// The queue must not be empty.
    #[inline]
    pub unsafe fn dequeue_unchecked(&mut self) {
        invariant!(!self.is_empty(), "dequeue on an empty queue");
        self.window.set_front(self.window.front() + 1);
    }

    /// Removes the front item and returns a reference to it, or `None` if the queue is empty.
    ///
    /// The item stays in its slot until [`clear`](Self::clear) and a later enqueue
    /// overwrite it.
    #[inline]
    pub fn dequeue(&mut self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let front = self.window.front();
        // SAFETY: the queue is not empty
        unsafe { self.dequeue_unchecked() };
        // SAFETY: `front < back <= cap`
        Some(unsafe { self.storage.get_unchecked(front) })
    }

    /// Returns a reference to the front item without checking that the queue is non-empty.
    ///
    /// # Safety
    /// The queue must not be empty.
    #[inline]
    pub unsafe fn front_unchecked(&self) -> &T {
        invariant!(!self.is_empty(), "front of an empty queue");
        self.storage.get_unchecked(self.window.front())
    }

    /// Returns a mutable reference to the front item without checking that the queue is non-empty.
    ///
    /// # Safety
    /// The queue must not be empty.
    #[inline]
    pub unsafe fn front_unchecked_mut(&mut self) -> &mut T {
        invariant!(!self.is_empty(), "front of an empty queue");
        let front = self.window.front();
        self.storage.get_unchecked_mut(front)
    }

    /// Returns a reference to the front item, or `None` if the queue is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the front item, or `None` if the queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let (front, back) = (self.window.front(), self.window.back());
        // SAFETY: `front <= back <= cap == storage.len()`
        let live = unsafe { self.storage.get_unchecked_mut(front..back) };
        live.first_mut()
    }

    /// Resets both cursors, reclaiming the whole window. The slots keep their contents
    /// until overwritten.
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Returns the waiting items as a slice, front to back.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `front <= back <= cap == storage.len()`
        unsafe {
            self.storage
                .get_unchecked(self.window.front()..self.window.back())
        }
    }
}

impl<T> Sealed for Queue<'_, T> {}

impl<T> FixedCapacity for Queue<'_, T> {
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
        self.enqueue_unchecked(item);
    }
}

/// Enqueues every item of the iterator.
///
/// # Panics
/// Panics if the iterator yields more items than [remain](Queue::remaining).
impl<T> Extend<T> for Queue<'_, T> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: PartialEq, B: AsRef<[T]> + ?Sized> PartialEq<B> for Queue<'_, T> {
    fn eq(&self, other: &B) -> bool {
        self.as_slice() == other.as_ref()
    }
}

impl<T: Debug> Debug for Queue<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
