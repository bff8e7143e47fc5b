//! Leaf inclusion proof for the dense Merkle tree.

use bincode::{Decode, Encode};
use treedigest_hash::Digest;
use treedigest_node::Direction;

use crate::DenseTreeError;

/// Cap on proof length accepted from untrusted bytes. A dense proof holds
/// one entry per tree level, so even a tree with `u64::MAX` leaves stays
/// far below this.
const MAX_PROOF_LEVELS: usize = 256;

/// An inclusion proof for one leaf of a dense Merkle tree.
///
/// Entries run leaf-to-root: each records the sibling digest at that level
/// and the side the sibling is on. The proof is bound to the tree digest at
/// generation time, so it is a snapshot — inserting more leaves afterwards
/// invalidates it against the new root (regenerate, or verify against the
/// old digest).
///
/// Proofs are independent value objects with no reference into the tree;
/// they outlive tree mutations and can be shipped to a verifier holding
/// only the root digest.
///
/// Fields are private to prevent construction of proofs that bypass
/// generation; use [`DenseMerkleTree::proof`](crate::DenseMerkleTree::proof)
/// and [`decode_from_slice`](LeafProof::decode_from_slice).
#[derive(Debug, Clone, Encode, Decode)]
pub struct LeafProof {
    pub(crate) tree_digest: Digest,
    pub(crate) hash_id: String,
    pub(crate) hashes: Vec<Digest>,
    pub(crate) directions: Vec<Direction>,
}

impl LeafProof {
    pub(crate) fn new(
        tree_digest: Digest,
        hash_id: String,
        hashes: Vec<Digest>,
        directions: Vec<Direction>,
    ) -> Self {
        LeafProof {
            tree_digest,
            hash_id,
            hashes,
            directions,
        }
    }

    /// The tree digest this proof was generated against.
    pub fn tree_digest(&self) -> &Digest {
        &self.tree_digest
    }

    /// Identifier of the hash function the tree was built with.
    pub fn hash_id(&self) -> &str {
        &self.hash_id
    }

    /// Sibling digests, leaf-to-root.
    pub fn hashes(&self) -> &[Digest] {
        &self.hashes
    }

    /// Sibling sides, leaf-to-root, matching [`hashes`](Self::hashes).
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Number of levels covered by this proof.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns `true` for the proof of a single-leaf tree's only leaf.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, DenseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| DenseTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode, validating the proof shape.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, DenseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| DenseTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.hashes.len() != proof.directions.len() {
            return Err(DenseTreeError::InvalidProof(format!(
                "{} hashes but {} directions",
                proof.hashes.len(),
                proof.directions.len()
            )));
        }
        if proof.hashes.len() > MAX_PROOF_LEVELS {
            return Err(DenseTreeError::InvalidProof(format!(
                "proof has {} levels (max {})",
                proof.hashes.len(),
                MAX_PROOF_LEVELS
            )));
        }
        Ok(proof)
    }
}
