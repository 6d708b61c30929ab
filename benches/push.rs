use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_capacity::{
    graph::{AdjacencyList, Direction, EdgeList, Traversal},
    SeqList,
};

const N: usize = 4096;

fn push_benchmark(c: &mut Criterion) {
    let mut list = SeqList::<u32>::with_capacity(N);

    c.bench_function("seq_list_push", |b| {
        b.iter(|| {
            list.clear();
            for i in 0..black_box(N as u32) {
                list.push(i);
            }
        });
    });

    c.bench_function("seq_list_push_unchecked", |b| {
        b.iter(|| {
            list.clear();
            for i in 0..black_box(N as u32) {
                // SAFETY: the list was cleared and has room for `N` items
                unsafe { list.push_unchecked(i) };
            }
        });
    });
}

fn traversal_benchmark(c: &mut Criterion) {
    // every node points at the next three, wrapping around
    let sources: Vec<usize> = (0..N).flat_map(|u| [u; 3]).collect();
    let targets: Vec<usize> = (0..N).flat_map(|u| [1, 2, 3].map(|d| (u + d) % N)).collect();
    let g = EdgeList::new(N, &sources, &targets).unwrap();
    let adj = AdjacencyList::build(&g, Direction::Outgoing);
    let mut walk = Traversal::new(N);

    c.bench_function("breadth_first", |b| {
        b.iter(|| walk.breadth_first(black_box(&adj), &[0]).unwrap().len());
    });
}

criterion_group!(benches, push_benchmark, traversal_benchmark);
criterion_main!(benches);
