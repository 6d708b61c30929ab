use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use fixed_capacity::{Queue, SeqList, Stack};

thread_local! {
    static ALLOCS: Cell<usize> = const { Cell::new(0) };
    static DEALLOCS: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    let _ = counter.try_with(|n| n.set(n.get() + 1));
}

fn get(counter: &'static std::thread::LocalKey<Cell<usize>>) -> usize {
    counter.with(Cell::get)
}

/// Counts allocations per thread, so tests running in parallel do not see each other.
struct CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        bump(&ALLOCS);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        bump(&DEALLOCS);
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

/// Runs `f` and returns its result with the number of allocations and deallocations it made.
fn measure<R>(f: impl FnOnce() -> R) -> (R, usize, usize) {
    let (a, d) = (get(&ALLOCS), get(&DEALLOCS));
    let r = f();
    (r, get(&ALLOCS) - a, get(&DEALLOCS) - d)
}

/// Element that counts how many times it is dropped.
#[derive(Debug, Default)]
struct Tracked(u32);

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&DROPS);
    }
}

#[test]
fn test_owned_allocates_once() {
    // warm up anything lazily initialized on first use
    drop(SeqList::<u64>::with_capacity(1));

    let (mut list, allocs, deallocs) = measure(|| SeqList::<u64>::with_capacity(16));
    assert_eq!((allocs, deallocs), (1, 0));

    let ((), allocs, deallocs) = measure(|| {
        list.extend(0..16);
        list.clear();
        list.extend(16..32);
    });
    assert_eq!((allocs, deallocs), (0, 0));
    assert_eq!(list[15], 31);

    let ((), allocs, deallocs) = measure(|| drop(list));
    assert_eq!((allocs, deallocs), (0, 1));

    let ((), allocs, deallocs) = measure(|| {
        let mut stack = Stack::filled(8, 0u8);
        stack.extend([1, 2, 3]);
        stack.pop();
        let mut queue = Queue::<i64>::with_capacity(8);
        queue.extend([1, 2, 3]);
        queue.dequeue();
    });
    assert_eq!((allocs, deallocs), (2, 2));
}

#[test]
fn test_zero_capacity_does_not_allocate() {
    let ((), allocs, deallocs) = measure(|| {
        let list = SeqList::<u64>::with_capacity(0);
        assert!(list.is_full());
    });
    assert_eq!((allocs, deallocs), (0, 0));
}

#[test]
fn test_borrowed_never_allocates() {
    let mut mem = [0u64; 8];
    let ((), allocs, deallocs) = measure(|| {
        let mut list = SeqList::from_borrowed(&mut mem[..4]);
        list.extend([1, 2, 3, 4]);
        drop(list);

        let mut stack = Stack::from_borrowed(&mut mem[4..6]);
        stack.push(5);
        stack.push(6);
        stack.pop();
        drop(stack);

        let mut queue = Queue::from_borrowed(&mut mem[6..]);
        queue.extend([7, 8]);
        queue.dequeue();
    });
    assert_eq!((allocs, deallocs), (0, 0));
    assert_eq!(mem, [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_owned_releases_elements_once() {
    let before = get(&DROPS);
    let mut list = SeqList::<Tracked>::with_capacity(4);
    assert_eq!(get(&DROPS) - before, 0);

    // each push replaces a default element
    list.push(Tracked(1));
    list.push(Tracked(2));
    assert_eq!(get(&DROPS) - before, 2);

    drop(list);
    assert_eq!(get(&DROPS) - before, 2 + 4);
}

#[test]
fn test_borrowed_leaves_elements_to_owner() {
    let before = get(&DROPS);
    let mut mem: [Tracked; 4] = Default::default();

    let mut queue = Queue::from_borrowed(&mut mem);
    queue.enqueue(Tracked(1));
    queue.enqueue(Tracked(2));
    assert_eq!(queue.dequeue().map(|t| t.0), Some(1));
    assert_eq!(get(&DROPS) - before, 2);

    drop(queue);
    assert_eq!(get(&DROPS) - before, 2);
    assert_eq!(mem[1].0, 2);

    drop(mem);
    assert_eq!(get(&DROPS) - before, 2 + 4);
}
