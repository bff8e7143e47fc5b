use std::marker::PhantomData;

use treedigest_hash::{combine, Digest, TreeHasher};
use treedigest_node::{Arena, Direction, NodeId};

use crate::{DenseTreeError, LeafProof};

/// Payload of a dense tree node.
///
/// Structural links (parent, left, right) live in the arena node; the
/// payload carries the Merkle bookkeeping. `kind` makes the leaf/internal
/// distinction explicit instead of inferring it from missing children.
#[derive(Debug, Clone)]
pub(crate) struct DenseNode {
    pub(crate) kind: NodeKind,
    pub(crate) digest: Digest,
    pub(crate) height: u32,
    pub(crate) leaf_count: u64,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    /// A leaf holding the raw inserted payload.
    Leaf { data: Vec<u8> },
    /// An internal node; its digest covers the children's digests.
    Internal,
}

impl DenseNode {
    /// A subtree is full when it holds `2^height` leaves. The insertion
    /// descent turns at the first non-full node.
    fn is_full(&self) -> bool {
        self.leaf_count == 1u64 << self.height
    }
}

/// An append-only dense Merkle tree over an ordered sequence of byte
/// payloads.
///
/// All operations are O(log n). There is no deletion and no update of
/// existing leaves; the tree only grows.
pub struct DenseMerkleTree<H: TreeHasher> {
    arena: Arena<DenseNode>,
    root: Option<NodeId>,
    /// Insertion-ordered leaf ids for O(log n) proof lookup by index.
    leaves: Vec<NodeId>,
    _hasher: PhantomData<H>,
}

impl<H: TreeHasher> Default for DenseMerkleTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: TreeHasher> DenseMerkleTree<H> {
    /// Create an empty tree.
    pub fn new() -> Self {
        DenseMerkleTree {
            arena: Arena::new(),
            root: None,
            leaves: Vec::new(),
            _hasher: PhantomData,
        }
    }

    /// Number of leaves inserted so far.
    pub fn leaf_count(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root digest committing to every inserted leaf, `None` when empty.
    pub fn tree_digest(&self) -> Option<&Digest> {
        self.root.map(|root| &self.arena.node(root).value.digest)
    }

    /// Height of the root node, `None` when empty. A single leaf has
    /// height 0.
    pub fn height(&self) -> Option<u32> {
        self.root.map(|root| self.arena.node(root).value.height)
    }

    /// Digest of the leaf at `leaf_index`, in insertion order.
    pub fn leaf_digest(&self, leaf_index: u64) -> Option<&Digest> {
        let id = *self.leaves.get(leaf_index as usize)?;
        Some(&self.arena.node(id).value.digest)
    }

    /// Insert a new leaf and return its 0-based insertion-order index.
    ///
    /// The index is stable for the lifetime of the tree and is the handle
    /// for later [`proof`](Self::proof) requests.
    pub fn insert(&mut self, data: &[u8]) -> u64 {
        let leaf = self.arena.alloc(DenseNode {
            kind: NodeKind::Leaf {
                data: data.to_vec(),
            },
            digest: H::digest(data),
            height: 0,
            leaf_count: 1,
        });

        match self.root {
            None => self.root = Some(leaf),
            Some(root) => {
                let split = self.find_split_node(root);
                self.splice_merge_node(split, leaf);
            }
        }

        self.leaves.push(leaf);
        self.leaves.len() as u64 - 1
    }

    /// Generate an inclusion proof for the leaf at `leaf_index`.
    ///
    /// The proof records the sibling digest and sibling side at every level
    /// from the leaf up to (excluding) the root, bound to the current tree
    /// digest.
    pub fn proof(&self, leaf_index: u64) -> Result<LeafProof, DenseTreeError> {
        let leaf = self
            .leaves
            .get(leaf_index as usize)
            .copied()
            .ok_or(DenseTreeError::LeafIndexOutOfRange {
                index: leaf_index,
                leaf_count: self.leaf_count(),
            })?;

        let mut hashes = Vec::new();
        let mut directions = Vec::new();
        let mut scanner = leaf;
        while let Some(parent) = self.arena.node(scanner).parent() {
            let sibling = self
                .arena
                .sibling(scanner)
                .expect("internal dense nodes have two children");
            hashes.push(self.arena.node(sibling).value.digest.clone());
            directions.push(
                self.arena
                    .direction_of(sibling)
                    .expect("sibling is linked under the same parent"),
            );
            scanner = parent;
        }

        let tree_digest = self
            .tree_digest()
            .expect("tree with a leaf has a root")
            .clone();
        Ok(LeafProof::new(tree_digest, H::ID.to_string(), hashes, directions))
    }

    /// Descend from the root, always taking the right child, until the
    /// left-fullness invariant forces a turn: the first full subtree on the
    /// rightmost path is where the new leaf attaches.
    fn find_split_node(&self, root: NodeId) -> NodeId {
        let mut scanner = root;
        while !self.arena.node(scanner).value.is_full() {
            scanner = self
                .arena
                .node(scanner)
                .child(Direction::Right)
                .expect("non-full dense nodes are internal");
        }
        scanner
    }

    /// Splice a new merge node above `split`, with `split` as its left child
    /// and `leaf` as its right child, then rehash the path back to the root.
    fn splice_merge_node(&mut self, split: NodeId, leaf: NodeId) {
        let parent = self.arena.node(split).parent();

        let merge = {
            let split_value = &self.arena.node(split).value;
            let leaf_value = &self.arena.node(leaf).value;
            DenseNode {
                kind: NodeKind::Internal,
                digest: combine::<H>(&split_value.digest, &leaf_value.digest),
                height: split_value.height + 1,
                leaf_count: split_value.leaf_count + 1,
            }
        };
        let merge = self.arena.alloc(merge);
        self.arena.set_child(merge, Direction::Left, split);
        self.arena.set_child(merge, Direction::Right, leaf);

        match parent {
            None => {
                // The split node was the root; the merge node takes over.
                self.root = Some(merge);
            }
            Some(parent) => {
                // The split descent only ever turns right, so the split node
                // sat in its parent's right slot.
                self.arena.set_child(parent, Direction::Right, merge);
                self.refresh_path(parent);
            }
        }
    }

    /// Recompute height, leaf count, and digest from `node` up to the root.
    fn refresh_path(&mut self, node: NodeId) {
        let mut scanner = Some(node);
        while let Some(id) = scanner {
            let left = self
                .arena
                .node(id)
                .child(Direction::Left)
                .expect("refreshed nodes are internal");
            let right = self
                .arena
                .node(id)
                .child(Direction::Right)
                .expect("refreshed nodes are internal");

            let (height, leaf_count, digest) = {
                let left_value = &self.arena.node(left).value;
                let right_value = &self.arena.node(right).value;
                (
                    left_value.height.max(right_value.height) + 1,
                    left_value.leaf_count + right_value.leaf_count,
                    combine::<H>(&left_value.digest, &right_value.digest),
                )
            };

            let value = self.arena.value_mut(id);
            value.height = height;
            value.leaf_count = leaf_count;
            value.digest = digest;

            scanner = self.arena.node(id).parent();
        }
    }

    /// Raw payload of the leaf at `leaf_index`, in insertion order.
    pub fn leaf_data(&self, leaf_index: u64) -> Option<&[u8]> {
        let id = *self.leaves.get(leaf_index as usize)?;
        match &self.arena.node(id).value.kind {
            NodeKind::Leaf { data } => Some(data),
            NodeKind::Internal => None,
        }
    }
}
