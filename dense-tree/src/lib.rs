//! Append-only dense Merkle tree with leaf inclusion proofs.
//!
//! A [`DenseMerkleTree`] commits to an ordered sequence of opaque byte
//! payloads: a single root digest authenticates every leaf ever inserted,
//! and a logarithmic [`LeafProof`] convinces a verifier holding only the
//! root digest that a specific payload is one of the leaves.
//!
//! # Structure
//!
//! Leaves are attached in insertion order while keeping the left subtree of
//! every internal node full (`leaf_count == 2^height`). An insertion finds
//! the unique rightmost non-full node (the *split node*), and splices a new
//! internal *merge node* above it with the new leaf as its right child.
//! Only the single path from the merge node to the root is rehashed, so
//! insertion, proof generation, and verification are all O(log n).
//!
//! # Digests
//!
//! A leaf digest is `H(data)`; an internal digest is `H(left ++ right)` over
//! the hex byte forms (see [`treedigest_hash::combine`]). The tree is generic
//! over the [`TreeHasher`](treedigest_hash::TreeHasher), and proofs embed
//! the hasher identity so verification with a different hash fails closed.

#![warn(missing_docs)]

mod error;
mod proof;
mod tree;
mod verify;


pub use error::DenseTreeError;
pub use proof::LeafProof;
pub use tree::DenseMerkleTree;
// Re-export the types appearing in this crate's API.
pub use treedigest_hash::{Digest, TreeHasher};
pub use treedigest_node::Direction;
