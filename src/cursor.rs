/// Front and back cursors over a buffer of `cap` slots.
///
/// Lists and stacks only ever move `back`; queues move both.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Window {
    // Invariant: `front <= back <= cap`
    front: usize,
    back: usize,
    cap: usize,
}

impl Window {
    pub const fn zero(cap: usize) -> Self {
        Self {
            front: 0,
            back: 0,
            cap,
        }
    }

    #[inline(always)]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub const fn front(&self) -> usize {
        self.front
    }

    #[inline(always)]
    pub const fn back(&self) -> usize {
        self.back
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.back - self.front
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.front == self.back
    }

    /// Number of slots the back cursor can still advance over.
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.cap - self.back
    }

    #[inline(always)]
    pub const fn has_remaining(&self) -> bool {
        self.back < self.cap
    }

    /// # Safety
    /// The following invariant must be held:
    /// - `front <= back <= cap`
    #[inline(always)]
    pub unsafe fn set_back(&mut self, back: usize) {
        invariant!(
            self.front <= back && back <= self.cap,
            "back cursor {back} outside of [{}, {}]",
            self.front,
            self.cap
        );
        self.back = back;
    }

    /// # Safety
    /// The following invariant must be held:
    /// - `front <= back`
    #[inline(always)]
    pub unsafe fn set_front(&mut self, front: usize) {
        invariant!(
            front <= self.back,
            "front cursor {front} past back cursor {}",
            self.back
        );
        self.front = front;
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.front = 0;
        self.back = 0;
    }
}
