//! Membership proof for the sparse Merkle tree.

use bincode::{Decode, Encode};
use treedigest_hash::Digest;
use treedigest_node::Direction;

use crate::SparseTreeError;

/// Cap on proof length accepted from untrusted bytes. A sparse proof holds
/// at most one entry per bit of the hash output.
const MAX_PROOF_LEVELS: usize = 1024;

/// A membership proof for one digest of a sparse Merkle tree.
///
/// Entries run leaf-to-root: each records the sibling digest at that level
/// and the side the sibling is on. A full-depth proof supports a presence
/// claim; a proof that stops short (the path dead-ended in an empty
/// subtree) supports an absence claim — the verifier starts the replay from
/// the default digest of the height where materialization ended.
///
/// The proof carries the hasher identity but — unlike the dense tree's
/// [`LeafProof`] — no embedded tree digest; the verifier must supply the
/// root it trusts out-of-band.
///
/// [`LeafProof`]: https://docs.rs/treedigest-dense-tree
#[derive(Debug, Clone, Encode, Decode)]
pub struct MarkProof {
    pub(crate) hash_id: String,
    pub(crate) hashes: Vec<Digest>,
    pub(crate) directions: Vec<Direction>,
}

impl MarkProof {
    pub(crate) fn new(hash_id: String, hashes: Vec<Digest>, directions: Vec<Direction>) -> Self {
        MarkProof {
            hash_id,
            hashes,
            directions,
        }
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

    /// Returns `true` for a proof generated from an empty tree.
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, SparseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| SparseTreeError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode, validating the proof shape.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self, SparseTreeError> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 16 * 1024 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| SparseTreeError::InvalidProof(format!("decode error: {}", e)))?;
        if proof.hashes.len() != proof.directions.len() {
            return Err(SparseTreeError::InvalidProof(format!(
                "{} hashes but {} directions",
                proof.hashes.len(),
                proof.directions.len()
            )));
        }
        if proof.hashes.len() > MAX_PROOF_LEVELS {
            return Err(SparseTreeError::InvalidProof(format!(
                "proof has {} levels (max {})",
                proof.hashes.len(),
                MAX_PROOF_LEVELS
            )));
        }
        Ok(proof)
    }
}
