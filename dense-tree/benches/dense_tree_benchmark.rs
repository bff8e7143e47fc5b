#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use rand::seq::IndexedRandom;
use treedigest_dense_tree::DenseMerkleTree;
use treedigest_hash::Blake3TreeHasher;

fn prepare_tree(count: u32) -> DenseMerkleTree<Blake3TreeHasher> {
    let mut tree = DenseMerkleTree::new();
    for i in 0..count {
        tree.insert(&i.to_le_bytes());
    }
    tree
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("dense tree insertion");
        let inputs = [1_000, 10_000, 100_000];
        for input in inputs.iter() {
            group.bench_with_input(BenchmarkId::new("leaves", input), &input, |b, &&size| {
                b.iter(|| prepare_tree(size));
            });
        }
    }

    c.bench_function("dense tree gen proof", |b| {
        let tree = prepare_tree(100_000);
        let indices: Vec<u64> = (0..100_000).collect();
        let mut rng = rand::rng();
        b.iter(|| {
            tree.proof(*indices.choose(&mut rng).expect("non-empty"))
                .expect("proof")
        });
    });

    c.bench_function("dense tree verify", |b| {
        let tree = prepare_tree(100_000);
        let digest = tree.tree_digest().expect("non-empty tree").clone();
        let mut rng = rand::rng();
        let indices: Vec<u64> = (0..100_000).collect();
        let proofs: Vec<_> = (0..1_000)
            .map(|_| {
                let index = *indices.choose(&mut rng).expect("index");
                let data = (index as u32).to_le_bytes();
                (data, tree.proof(index).expect("proof"))
            })
            .collect();
        b.iter(|| {
            for (data, proof) in &proofs {
                assert!(proof.verify::<Blake3TreeHasher>(&digest, data));
            }
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
