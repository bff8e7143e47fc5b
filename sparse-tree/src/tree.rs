use std::{marker::PhantomData, sync::Arc};

use treedigest_hash::{combine, Digest, TreeHasher};
use treedigest_node::{Arena, Direction, NodeId};

use crate::{DummyDigests, MarkProof, SparseTreeError};

/// Digest held by a height-0 position whose digest has been marked present.
pub const EXISTING_LEAF: &[u8] = b"1";

/// Digest implicitly held by every untouched height-0 position.
pub const NON_EXISTING_LEAF: &[u8] = b"0";

/// Payload of a materialized sparse tree node.
///
/// `digest` is unset for dummy nodes (it resolves through the shared
/// [`DummyDigests`] table by height, never stored per node) and for
/// placeholders mid-mark; after every mutation, unset implies dummy.
#[derive(Debug, Clone)]
pub(crate) struct SparseNode {
    pub(crate) height: usize,
    pub(crate) is_dummy: bool,
    pub(crate) digest: Option<Digest>,
}

/// A sparse Merkle tree of depth `H::OUTPUT_BITS` over the digest universe
/// of `H`.
///
/// Only paths to marked digests are materialized; untouched subtrees
/// resolve to precomputed per-height default digests. Marking is
/// idempotent, and there is no unmarking.
pub struct SparseMerkleTree<H: TreeHasher> {
    arena: Arena<SparseNode>,
    root: NodeId,
    dummy: Arc<DummyDigests>,
    _hasher: PhantomData<H>,
}

impl<H: TreeHasher> Default for SparseMerkleTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TreeHasher> SparseMerkleTree<H> {
    /// Create an empty tree. The root digest of an empty tree is the
    /// default digest for height `OUTPUT_BITS`.
    pub fn new() -> Self {
        let dummy = DummyDigests::for_hasher::<H>();
        let mut arena = Arena::new();
        let root = arena.alloc(SparseNode {
            height: H::OUTPUT_BITS,
            is_dummy: true,
            digest: None,
        });
        SparseMerkleTree {
            arena,
            root,
            dummy,
            _hasher: PhantomData,
        }
    }

    /// Depth of the virtual tree (the hash output width in bits).
    pub fn bits(&self) -> usize {
        H::OUTPUT_BITS
    }

    /// The root digest committing to the set of marked digests.
    pub fn tree_digest(&self) -> &Digest {
        self.node_digest(self.root)
    }

    /// Mark `digest` as present.
    ///
    /// Materializes the path from the root to the digest's height-0
    /// position (each step also materializes the off-path sibling as a
    /// dummy), sets the "exists" sentinel, and rehashes the path bottom-up.
    /// Re-marking an already-marked digest is a no-op on the tree digest.
    pub fn mark(&mut self, digest: &Digest) -> Result<(), SparseTreeError> {
        let path = Self::bit_path(digest)?;

        let mut scanner = self.root;
        for direction in path {
            if self.arena.node(scanner).is_leaf() {
                self.materialize_children(scanner, direction);
            }
            scanner = self
                .arena
                .node(scanner)
                .child(direction)
                .expect("children were just materialized");
        }

        self.mark_existing(scanner);
        self.refresh_path(scanner);
        Ok(())
    }

    /// Whether `digest` has been marked.
    pub fn is_marked(&self, digest: &Digest) -> Result<bool, SparseTreeError> {
        let path = Self::bit_path(digest)?;

        let mut scanner = self.root;
        for direction in path {
            match self.arena.node(scanner).child(direction) {
                Some(child) => scanner = child,
                // Ran off the materialized structure: nothing below here
                // was ever marked.
                None => return Ok(false),
            }
        }
        Ok(self.node_digest(scanner).as_bytes() == EXISTING_LEAF)
    }

    /// Generate a membership proof for `digest`.
    ///
    /// The proof records the sibling digest/side of every node entered on
    /// the descent, leaf-to-root. If the descent dead-ends in an
    /// unmaterialized subtree the proof is shorter than `OUTPUT_BITS`; the
    /// missing levels are implied by the default digest the verifier starts
    /// from. On an empty tree the proof is empty.
    pub fn proof(&self, digest: &Digest) -> Result<MarkProof, SparseTreeError> {
        let path = Self::bit_path(digest)?;

        let mut hashes = Vec::new();
        let mut directions = Vec::new();
        let mut scanner = self.root;
        for direction in path {
            let node = self.arena.node(scanner);
            if node.is_leaf() {
                break;
            }
            let sibling_direction = direction.opposite();
            let sibling = node
                .child(sibling_direction)
                .expect("materialized internal nodes have both children");
            hashes.push(self.node_digest(sibling).clone());
            directions.push(sibling_direction);
            scanner = node
                .child(direction)
                .expect("materialized internal nodes have both children");
        }

        hashes.reverse();
        directions.reverse();
        Ok(MarkProof::new(H::ID.to_string(), hashes, directions))
    }

    /// Digest of a node, resolving dummies through the shared table.
    fn node_digest(&self, id: NodeId) -> &Digest {
        let value = &self.arena.node(id).value;
        if value.is_dummy {
            self.dummy.level(value.height)
        } else {
            value
                .digest
                .as_ref()
                .expect("non-dummy nodes hold a digest once a mark completes")
        }
    }

    /// Materialize both children of a node: the path-continuing child as a
    /// real placeholder, the other as a dummy.
    fn materialize_children(&mut self, parent: NodeId, continuing: Direction) {
        let child_height = self.arena.node(parent).value.height - 1;
        for side in [Direction::Left, Direction::Right] {
            let child = self.arena.alloc(SparseNode {
                height: child_height,
                is_dummy: side != continuing,
                digest: None,
            });
            self.arena.set_child(parent, side, child);
        }
    }

    /// Set the "exists" sentinel on a height-0 node.
    ///
    /// Calling this for any other node is a violation of the descent
    /// contract, not caller misuse, hence the assertion.
    fn mark_existing(&mut self, id: NodeId) {
        let value = self.arena.value_mut(id);
        assert_eq!(
            value.height, 0,
            "only height-0 positions can be marked as existing"
        );
        value.digest = Some(Digest::from(EXISTING_LEAF));
        value.is_dummy = false;
    }

    /// Recompute ancestor digests from `from`'s parent up to the root. A
    /// node stops being a dummy once a descendant is marked.
    fn refresh_path(&mut self, from: NodeId) {
        let mut scanner = self.arena.node(from).parent();
        while let Some(id) = scanner {
            let node = self.arena.node(id);
            let left = node
                .child(Direction::Left)
                .expect("refreshed nodes have both children");
            let right = node
                .child(Direction::Right)
                .expect("refreshed nodes have both children");
            let digest = combine::<H>(self.node_digest(left), self.node_digest(right));

            let value = self.arena.value_mut(id);
            value.digest = Some(digest);
            value.is_dummy = false;

            scanner = self.arena.node(id).parent();
        }
    }

    /// Read `digest` as a root-to-leaf turn sequence: the digest's value
    /// bits with leading zeros stripped, right-padded with zero bits to
    /// `OUTPUT_BITS`. Bit 0 turns left, bit 1 turns right.
    fn bit_path(digest: &Digest) -> Result<Vec<Direction>, SparseTreeError> {
        let expected = H::OUTPUT_BITS / 4;
        if digest.len() != expected {
            return Err(SparseTreeError::DigestLength {
                len: digest.len(),
                expected,
            });
        }

        let mut bits = Vec::with_capacity(H::OUTPUT_BITS);
        let mut seen_one = false;
        for (offset, &byte) in digest.as_bytes().iter().enumerate() {
            let nibble = (byte as char)
                .to_digit(16)
                .ok_or(SparseTreeError::InvalidDigestByte { byte, offset })?;
            for shift in (0..4).rev() {
                let bit = (nibble >> shift) & 1 == 1;
                if !seen_one && !bit {
                    continue;
                }
                seen_one = true;
                bits.push(if bit { Direction::Right } else { Direction::Left });
            }
        }
        bits.resize(H::OUTPUT_BITS, Direction::Left);
        Ok(bits)
    }
}
