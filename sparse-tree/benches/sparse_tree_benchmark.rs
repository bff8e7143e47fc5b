#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use rand::seq::IndexedRandom;
use treedigest_hash::{Digest, Sha256TreeHasher, TreeHasher};
use treedigest_sparse_tree::SparseMerkleTree;

fn digests(count: u32) -> Vec<Digest> {
    (0..count)
        .map(|i| Sha256TreeHasher::digest(&i.to_le_bytes()))
        .collect()
}

fn prepare_tree(marked: &[Digest]) -> SparseMerkleTree<Sha256TreeHasher> {
    let mut smt = SparseMerkleTree::new();
    for data in marked {
        smt.mark(data).expect("valid digest");
    }
    smt
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("sparse tree marking");
        let inputs = [100, 1_000, 10_000];
        for input in inputs.iter() {
            let marked = digests(*input);
            group.bench_with_input(BenchmarkId::new("digests", input), &marked, |b, marked| {
                b.iter(|| prepare_tree(marked));
            });
        }
    }

    c.bench_function("sparse tree gen proof", |b| {
        let marked = digests(10_000);
        let smt = prepare_tree(&marked);
        let mut rng = rand::rng();
        b.iter(|| {
            smt.proof(marked.choose(&mut rng).expect("non-empty"))
                .expect("proof")
        });
    });

    c.bench_function("sparse tree verify", |b| {
        let marked = digests(10_000);
        let smt = prepare_tree(&marked);
        let mut rng = rand::rng();
        let proofs: Vec<_> = (0..1_000)
            .map(|_| {
                let data = marked.choose(&mut rng).expect("non-empty");
                smt.proof(data).expect("proof")
            })
            .collect();
        let root = smt.tree_digest();
        b.iter(|| {
            for proof in &proofs {
                assert!(proof.verify::<Sha256TreeHasher>(root, true));
            }
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
