//! Fixed-capacity containers over a single contiguous buffer.
//!
//! [`SeqList`], [`Stack`] and [`Queue`] never grow. Their storage is either allocated
//! once when the container is built (`with_capacity`, `filled`) and released when it
//! is dropped, or borrowed from the caller (`from_borrowed`) and never allocated or
//! released at all.
//!
//! Every operation with a precondition comes in two flavors:
//! - an `unsafe` `*_unchecked` method without any runtime check in release builds,
//! - a safe method that reports the violation (`try_*`, `Option` returns) or panics.
//!
//! The preconditions of the unchecked methods are asserted in debug builds, and in
//! release builds with the `assert-invariants` feature.
//!
//! The [`graph`] module builds per-node neighbor lists out of edge lists on top of
//! these containers.

/// Asserts a precondition of an unchecked fast path when invariant checking is enabled.
macro_rules! invariant {
    ($($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "assert-invariants")) {
            assert!($($arg)+);
        }
    };
}

mod cursor;
pub mod entry;
pub mod error;
pub mod graph;
mod list;
mod queue;
mod stack;
mod storage;

pub use self::{
    entry::{FixedCapacity, VacantEntry},
    error::{FullError, GraphError},
    list::SeqList,
    queue::Queue,
    stack::Stack,
};
