use std::{
    fmt::{self, Debug, Formatter},
    mem,
    ops::{Deref, DerefMut},
};

/// Contiguous, always-initialized element storage of a fixed length.
///
/// The storage is either allocated by the container (and released when it is
/// dropped) or borrowed from the caller, in which case the container never
/// allocates or releases the memory.
pub(crate) enum Storage<'a, T> {
    Owned(Box<[T]>),
    Borrowed(&'a mut [T]),
}

impl<T> Storage<'static, T> {
    /// Allocates `capacity` default-initialized elements.
    pub fn with_capacity(capacity: usize) -> Self
    where
        T: Default,
    {
        Self::owned((0..capacity).map(|_| T::default()).collect())
    }

    /// Allocates `capacity` clones of `value`.
    pub fn filled(capacity: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::owned(vec![value; capacity].into_boxed_slice())
    }

    fn owned(buf: Box<[T]>) -> Self {
        tracing::trace!(
            capacity = buf.len(),
            elem_size = mem::size_of::<T>(),
            "allocated owned storage"
        );
        Self::Owned(buf)
    }
}

impl<'a, T> Storage<'a, T> {
    pub fn borrowed(buf: &'a mut [T]) -> Self {
        Self::Borrowed(buf)
    }

    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

impl<T> Deref for Storage<'_, T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        match self {
            Self::Owned(buf) => buf,
            Self::Borrowed(buf) => buf,
        }
    }
}

impl<T> DerefMut for Storage<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Self::Owned(buf) => buf,
            Self::Borrowed(buf) => buf,
        }
    }
}

impl<T> Debug for Storage<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let kind = if self.is_owned() { "Owned" } else { "Borrowed" };
        write!(f, "{kind}({})", self.len())
    }
}
