use sha2::{Digest as _, Sha256};

use crate::Digest;

/// A deterministic, one-way hash function usable as a tree commitment
/// primitive.
///
/// Implementations must be collision-resistant for the trees' guarantees to
/// hold. The output is rendered as lowercase hexadecimal text and treated as
/// bytes thereafter, so `OUTPUT_BITS / 4` equals the digest length in bytes.
pub trait TreeHasher {
    /// Stable identifier embedded in proofs so that verification with a
    /// different hash function fails closed.
    const ID: &'static str;

    /// Hash output width in bits. This is also the depth of the sparse
    /// Merkle tree built over this hasher's digest universe.
    const OUTPUT_BITS: usize;

    /// Hash an arbitrary byte sequence into a hex-form digest.
    fn digest(data: &[u8]) -> Digest;
}

/// SHA-256 tree hasher.
pub struct Sha256TreeHasher;

impl TreeHasher for Sha256TreeHasher {
    const ID: &'static str = "sha256";
    const OUTPUT_BITS: usize = 256;

    fn digest(data: &[u8]) -> Digest {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Digest::hex_of(&hasher.finalize())
    }
}

/// Combine two child digests into their parent digest:
/// `H(left ++ right)` over the hex byte forms.
///
/// This is the internal-node rule for both tree variants.
pub fn combine<H: TreeHasher>(left: &Digest, right: &Digest) -> Digest {
    let mut data = Vec::with_capacity(left.len() + right.len());
    data.extend_from_slice(left.as_bytes());
    data.extend_from_slice(right.as_bytes());
    H::digest(&data)
}

/// Blake3 tree hasher.
pub struct Blake3TreeHasher;

impl TreeHasher for Blake3TreeHasher {
    const ID: &'static str = "blake3";
    const OUTPUT_BITS: usize = 256;

    fn digest(data: &[u8]) -> Digest {
        Digest::hex_of(blake3::hash(data).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            Sha256TreeHasher::digest(b"0").as_bytes(),
            b"5feceb66ffc86f38d952786c6d696c79c2dbc239dd4e91b46729d73a27fb57e9"
        );
        assert_eq!(
            Sha256TreeHasher::digest(b"1").as_bytes(),
            b"6b86b273ff34fce19d6b804eff5a3f5747ada4eaa22f1d49c01e52ddb7875b4b"
        );
    }

    #[test]
    fn test_output_length_matches_bits() {
        let digest = Sha256TreeHasher::digest(b"data");
        assert_eq!(digest.len() * 4, Sha256TreeHasher::OUTPUT_BITS);

        let digest = Blake3TreeHasher::digest(b"data");
        assert_eq!(digest.len() * 4, Blake3TreeHasher::OUTPUT_BITS);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            Blake3TreeHasher::digest(b"same input"),
            Blake3TreeHasher::digest(b"same input")
        );
    }

    #[test]
    fn test_combine_known_vector() {
        // sha256(hex(sha256("0")) ++ hex(sha256("1")))
        let left = Sha256TreeHasher::digest(b"0");
        let right = Sha256TreeHasher::digest(b"1");
        assert_eq!(
            combine::<Sha256TreeHasher>(&left, &right).as_bytes(),
            b"fa13bb36c022a6943f37c638126a2c88fc8d008eb5a9fe8fcde17026807feae4"
        );
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let left = Blake3TreeHasher::digest(b"left");
        let right = Blake3TreeHasher::digest(b"right");
        assert_ne!(
            combine::<Blake3TreeHasher>(&left, &right),
            combine::<Blake3TreeHasher>(&right, &left)
        );
    }

    #[test]
    fn test_hashers_disagree() {
        assert_ne!(
            Sha256TreeHasher::digest(b"x"),
            Blake3TreeHasher::digest(b"x")
        );
        assert_ne!(Sha256TreeHasher::ID, Blake3TreeHasher::ID);
    }
}
