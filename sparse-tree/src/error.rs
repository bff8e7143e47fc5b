use thiserror::Error;

/// Errors from sparse Merkle tree operations.
///
/// All digest preconditions are checked before any structural change, so a
/// failed operation leaves the tree exactly as it was.
#[derive(Debug, Error)]
pub enum SparseTreeError {
    /// The supplied digest is not hexadecimal text.
    #[error("digest byte {byte:#04x} at offset {offset} is not a hex character")]
    InvalidDigestByte {
        /// The offending byte.
        byte: u8,
        /// Its offset within the digest.
        offset: usize,
    },

    /// The supplied digest has the wrong length for the tree's hash
    /// function.
    #[error("digest has {len} hex characters, expected {expected}")]
    DigestLength {
        /// Length of the supplied digest.
        len: usize,
        /// Expected hex length (`OUTPUT_BITS / 4`).
        expected: usize,
    },

    /// A proof failed to encode or decode, or decoded into an inconsistent
    /// shape.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
