//! Tree node types

use crate::model::Digest;
use std::fmt;

/// Index of a node within a [`MerkleTree`] arena
///
/// Children are addressed by index rather than owning pointers, which lets
/// the odd-duplication rule reference one child from both slots of its
/// parent without cloning the node.
///
/// [`MerkleTree`]: crate::MerkleTree
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The arena index
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A node in the merkle tree
///
/// Either a leaf (no children) or an internal node with exactly two
/// children. A node with one real child never occurs: an unpaired node is
/// referenced from both child slots of its parent. Nodes are immutable
/// once created.
#[derive(Clone, Debug)]
pub struct Node {
    digest: Digest,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Original text (leaf) or concatenated descendant text, kept only for
    /// inspection. Never an input to internal-node hashing.
    payload: Option<String>,
}

impl Node {
    /// Create a leaf node
    pub fn leaf(digest: Digest, payload: Option<String>) -> Self {
        Node {
            digest,
            left: None,
            right: None,
            payload,
        }
    }

    /// Create an internal node with two children
    pub fn internal(digest: Digest, left: NodeId, right: NodeId, payload: Option<String>) -> Self {
        Node {
            digest,
            left: Some(left),
            right: Some(right),
            payload,
        }
    }

    /// The digest committed by this node
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Left child, if this is an internal node
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, if this is an internal node
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The debugging payload, if one was retained
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Whether this node is a leaf
    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}
