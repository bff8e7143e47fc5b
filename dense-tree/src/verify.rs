//! Proof verification for the dense Merkle tree.
//!
//! Pure function — no tree access required. Replays the hash chain from the
//! claimed leaf payload through the recorded siblings and compares the
//! result to the expected tree digest.

use treedigest_hash::{combine, Digest, TreeHasher};
use treedigest_node::Direction;

use crate::LeafProof;

impl LeafProof {
    /// Verify that `data` is a leaf of the tree committed to by
    /// `tree_digest`.
    ///
    /// Returns `false` — never an error — for any mismatch: a proof bound to
    /// a different tree digest, a proof produced under a different hash
    /// function, an inconsistent proof shape, or a hash chain that does not
    /// reproduce `tree_digest`.
    pub fn verify<H: TreeHasher>(&self, tree_digest: &Digest, data: &[u8]) -> bool {
        if self.hash_id != H::ID {
            return false;
        }
        // Stale or foreign proof: binding check short-circuits the replay.
        if &self.tree_digest != tree_digest {
            return false;
        }
        if self.hashes.len() != self.directions.len() {
            return false;
        }

        let mut running = H::digest(data);
        for (sibling, direction) in self.hashes.iter().zip(&self.directions) {
            running = match direction {
                // The sibling is on the right, so the running digest is the
                // left input, and vice versa.
                Direction::Right => combine::<H>(&running, sibling),
                Direction::Left => combine::<H>(sibling, &running),
            };
        }

        &running == tree_digest
    }
}
