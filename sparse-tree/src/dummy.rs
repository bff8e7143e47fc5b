//! Default digests of fully-empty subtrees.
//!
//! An empty subtree of height `h` always hashes to the same value:
//! `dummy[0]` is the "does not exist" sentinel, and
//! `dummy[h] = H(dummy[h-1] ++ dummy[h-1])`. These depend only on the hash
//! function, so they are computed once per hasher and shared process-wide —
//! every tree over the same hasher, and every verifier, reads the same
//! table.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock},
};

use treedigest_hash::{combine, Digest, TreeHasher};

use crate::tree::NON_EXISTING_LEAF;

/// Process-wide registry of dummy tables, keyed by hasher identity.
/// Populated lazily under the mutex; entries are immutable once inserted.
static REGISTRY: OnceLock<Mutex<HashMap<&'static str, Arc<DummyDigests>>>> = OnceLock::new();

/// The per-height default digests for one hash function.
///
/// `level(h)` is the digest of a fully-empty subtree of height `h`, for
/// `h` in `0..=OUTPUT_BITS`. `level(OUTPUT_BITS)` is the root digest of an
/// empty tree.
#[derive(Debug)]
pub struct DummyDigests {
    levels: Vec<Digest>,
}

impl DummyDigests {
    /// The shared table for `H`, building it on first use.
    pub fn for_hasher<H: TreeHasher>() -> Arc<DummyDigests> {
        let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
        let mut registry = registry.lock().expect("dummy digest registry poisoned");
        registry
            .entry(H::ID)
            .or_insert_with(|| Arc::new(Self::generate::<H>()))
            .clone()
    }

    fn generate<H: TreeHasher>() -> DummyDigests {
        let mut levels = Vec::with_capacity(H::OUTPUT_BITS + 1);
        levels.push(Digest::from(NON_EXISTING_LEAF));
        for _ in 0..H::OUTPUT_BITS {
            let below = levels.last().expect("seeded with the height-0 sentinel");
            levels.push(combine::<H>(below, below));
        }
        DummyDigests { levels }
    }

    /// Default digest for an empty subtree of `height`.
    ///
    /// # Panics
    ///
    /// Panics if `height` exceeds the hasher's output width.
    pub fn level(&self, height: usize) -> &Digest {
        &self.levels[height]
    }

    /// Number of levels in the table (`OUTPUT_BITS + 1`).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Never true; present for API completeness alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use treedigest_hash::Sha256TreeHasher;

    use super::*;

    #[test]
    fn test_known_levels() {
        let dummy = DummyDigests::for_hasher::<Sha256TreeHasher>();
        assert_eq!(dummy.len(), 257);
        assert_eq!(dummy.level(0).as_bytes(), b"0");
        // sha256("00")
        assert_eq!(
            dummy.level(1).as_bytes(),
            b"f1534392279bddbf9d43dde8701cb5be14b82f76ec6607bf8d6ad557f60f304e"
        );
        assert_eq!(
            dummy.level(2).as_bytes(),
            b"7437365578b682de87174ba8a7f5eaa30ee982b7d8e9e3c6e86d263518ffc493"
        );
    }

    #[test]
    fn test_shared_across_trees() {
        let a = DummyDigests::for_hasher::<Sha256TreeHasher>();
        let b = DummyDigests::for_hasher::<Sha256TreeHasher>();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
