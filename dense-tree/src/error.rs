use thiserror::Error;

/// Errors from dense Merkle tree operations.
#[derive(Debug, Error)]
pub enum DenseTreeError {
    /// Proof or lookup requested for a leaf index outside `[0, leaf_count)`.
    #[error("leaf index {index} out of range (leaf count {leaf_count})")]
    LeafIndexOutOfRange {
        /// The requested index.
        index: u64,
        /// Number of leaves in the tree at request time.
        leaf_count: u64,
    },

    /// A proof failed to encode or decode, or decoded into an inconsistent
    /// shape.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
