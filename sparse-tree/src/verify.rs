//! Proof verification for the sparse Merkle tree.
//!
//! Pure function over the proof, the claimed membership, and the trusted
//! root digest. The only extra state a verifier needs is the per-height
//! default digest table, which it derives from the hash function alone.

use treedigest_hash::{combine, Digest, TreeHasher};
use treedigest_node::Direction;

use crate::{DummyDigests, MarkProof, EXISTING_LEAF};

impl MarkProof {
    /// Verify that the digest this proof was generated for is present
    /// (`is_marked == true`) or absent (`is_marked == false`) in the tree
    /// committed to by `tree_digest`.
    ///
    /// The replay starts from the "exists" sentinel for a presence claim,
    /// or from the default digest of the height where the proof's path
    /// ended for an absence claim, then folds in the recorded siblings.
    /// Returns `false` — never an error — for any mismatch, including a
    /// proof produced under a different hash function.
    pub fn verify<H: TreeHasher>(&self, tree_digest: &Digest, is_marked: bool) -> bool {
        if self.hash_id != H::ID {
            return false;
        }
        if self.hashes.len() != self.directions.len() {
            return false;
        }
        if self.hashes.len() > H::OUTPUT_BITS {
            return false;
        }

        let dummy = DummyDigests::for_hasher::<H>();
        let mut running = if is_marked {
            Digest::from(EXISTING_LEAF)
        } else {
            dummy.level(H::OUTPUT_BITS - self.hashes.len()).clone()
        };

        for (sibling, direction) in self.hashes.iter().zip(&self.directions) {
            running = match direction {
                Direction::Right => combine::<H>(&running, sibling),
                Direction::Left => combine::<H>(sibling, &running),
            };
        }

        &running == tree_digest
    }
}
