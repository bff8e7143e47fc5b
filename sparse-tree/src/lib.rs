//! Fixed-depth sparse Merkle tree over the digest universe.
//!
//! A [`SparseMerkleTree`] is conceptually a complete binary tree of depth
//! equal to the hash output width: every possible digest value addresses one
//! height-0 position, reached by reading the digest's bits as left/right
//! turns. Marking a digest sets its position to the "exists" sentinel and
//! rehashes the path to the root; every other position implicitly holds the
//! "does not exist" sentinel.
//!
//! Storing 2^256 nodes is obviously out of the question, so only the paths
//! to marked digests are materialized. Everything else is represented by a
//! per-height *default digest* — the digest of a fully-empty subtree of that
//! height — precomputed once per hash function and shared process-wide (see
//! [`DummyDigests`]).
//!
//! A [`MarkProof`] authenticates a digest's membership against the root: for
//! a marked digest it is a full-depth sibling chain; for an unmarked digest
//! it is the (possibly shorter) chain down to the empty subtree its path
//! dead-ends in. Unlike the dense tree's proof, it carries no embedded tree
//! digest — the verifier supplies the root out-of-band.
//!
//! U = digest universe size. Marking is O(log U) node visits; tree storage
//! is O(marked · log U).

#![warn(missing_docs)]

mod dummy;
mod error;
mod proof;
mod tree;
mod verify;


pub use dummy::DummyDigests;
pub use error::SparseTreeError;
pub use proof::MarkProof;
pub use tree::{SparseMerkleTree, EXISTING_LEAF, NON_EXISTING_LEAF};
// Re-export the types appearing in this crate's API.
pub use treedigest_hash::{Digest, TreeHasher};
pub use treedigest_node::Direction;
