use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttt_tree::{
    build_tree, print_breadth_first, release_breadth_first, BoardState, ValueFormat,
};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for &(rows, cols) in &[(2usize, 2usize), (2, 3), (3, 2)] {
        let root = BoardState::new(rows, cols).unwrap();
        group.bench_function(format!("{rows}x{cols}"), |b| {
            b.iter(|| build_tree(black_box(root.clone())).unwrap())
        });
    }
    group.finish();

    // The full board is slow enough that a handful of samples suffices.
    let mut group = c.benchmark_group("build_tree_full");
    group.sample_size(10);
    let root = BoardState::new(3, 3).unwrap();
    group.bench_function("3x3", |b| {
        b.iter(|| release_breadth_first(build_tree(black_box(root.clone())).unwrap()))
    });
    group.finish();
}

fn bench_walks(c: &mut Criterion) {
    let tree = build_tree(BoardState::new(2, 3).unwrap()).unwrap();
    c.bench_function("print_breadth_first_2x3", |b| {
        b.iter(|| print_breadth_first(black_box(&tree), Vec::new(), ValueFormat::Code).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_walks);
criterion_main!(benches);
