//! Compares the different ways of walking a tree stored in a `NodeArena` against the same tree
//! built out of boxed nodes

use rand::prelude::*;
use criterion::{
    BenchmarkGroup,
    BenchmarkId,
    Criterion,
    black_box,
    criterion_group,
    criterion_main,
    measurement::WallTime,
};

use bintree::{NodeArena, NodeId, Side};

/// Randomly generates a tree with `len` nodes, built in both the arena and as boxed nodes
fn generate_tree(len: usize) -> (NodeArena<u64>, NodeId, simple_bintree::Node<u64>) {
    // Use seed to make this deterministic
    let mut rng = StdRng::seed_from_u64(27645219);

    let mut arena = NodeArena::with_capacity(len);
    let root = arena.insert_root(0);
    let mut boxed = simple_bintree::Node::new(0);

    for value in 1..len as u64 {
        // Random walk down from the root until an empty slot turns up
        let mut node = arena.node_mut(root).unwrap();
        let mut boxed_node = &mut boxed;
        loop {
            let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
            if node.as_node().child(side).is_none() {
                match side {
                    Side::Left => {
                        node.insert_left_child(value).unwrap();
                        boxed_node.insert_left(value);
                    },
                    Side::Right => {
                        node.insert_right_child(value).unwrap();
                        boxed_node.insert_right(value);
                    },
                }
                break;
            }

            node = node.into_child(side).unwrap();
            boxed_node = match side {
                Side::Left => boxed_node.left_mut(),
                Side::Right => boxed_node.right_mut(),
            }.unwrap();
        }
    }

    (arena, root, boxed)
}

pub fn bench_inorder(c: &mut Criterion) {
    const SIZES: &[usize] = &[100, 1000, 10000, 100000];

    fn bench(group: &mut BenchmarkGroup<WallTime>, len: &usize) {
        let (arena, root, boxed) = generate_tree(*len);

        group.bench_with_input(BenchmarkId::new("visitor", len), len, |b, _| {
            let node = arena.node(root).unwrap();
            b.iter(|| {
                let mut sum = 0u64;
                node.trav_in_order(|&value| sum = sum.wrapping_add(value));
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("iterator", len), len, |b, _| {
            let node = arena.node(root).unwrap();
            b.iter(|| {
                let sum = node.iter_inorder().fold(0u64, |sum, node| sum.wrapping_add(*node.value()));
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("cursor", len), len, |b, _| {
            let first = arena.node(root).unwrap().leftmost().id();
            b.iter(|| {
                let sum = arena.cursor(first).fold(0u64, |sum, &value| sum.wrapping_add(value));
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("simple_bintree", len), len, |b, _| {
            b.iter(|| black_box(boxed.inorder()))
        });
    }

    let mut group = c.benchmark_group("inorder");
    for len in SIZES {
        bench(&mut group, len);
    }
    group.finish();
}

pub fn bench_orders(c: &mut Criterion) {
    const LEN: usize = 10000;

    let (arena, root, _) = generate_tree(LEN);
    let node = arena.node(root).unwrap();

    let mut group = c.benchmark_group("traversal orders");
    group.bench_function("preorder", |b| b.iter(|| black_box(node.iter_preorder().count())));
    group.bench_function("inorder", |b| b.iter(|| black_box(node.iter_inorder().count())));
    group.bench_function("postorder", |b| b.iter(|| black_box(node.iter_postorder().count())));
    group.bench_function("levelorder", |b| b.iter(|| black_box(node.iter_levelorder().count())));
    group.bench_function("size", |b| b.iter(|| black_box(node.size())));
    group.finish();
}

pub fn bench_build_and_remove(c: &mut Criterion) {
    const SIZES: &[usize] = &[1000, 10000];

    let mut group = c.benchmark_group("build and remove");
    for len in SIZES {
        group.bench_with_input(BenchmarkId::new("NodeArena", len), len, |b, &len| {
            b.iter(|| {
                let (mut arena, root, _) = generate_tree(len);
                black_box(arena.remove_subtree(root))
            })
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_inorder,
    bench_orders,
    bench_build_and_remove,
);

criterion_main!(benches);
