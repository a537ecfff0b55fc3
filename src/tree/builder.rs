//! Bottom-up merkle tree builder
//!
//! Leaves are hashed in input order, then reduced layer by layer until one
//! node remains. Two contract details are externally observable and must
//! not change without changing every recorded root:
//!
//! - A parent hashes the concatenated **hex strings** of its children's
//!   digests (128 ASCII bytes), not the raw 64 digest bytes.
//! - An odd-length layer pairs its last node with itself: the parent's
//!   input is that node's hex twice, and both child slots reference the
//!   same node.

use crate::model::{Digest, Node, NodeId, HEX_LEN};
use crate::{Error, Result};
use tracing::{debug, trace};

/// An immutable merkle tree over an ordered sequence of values
///
/// All nodes live in one arena, leaves first in input order, then each
/// reduced layer left to right, the root last. Nothing is mutated after
/// construction and the whole tree is dropped as a unit.
#[derive(Debug)]
pub struct MerkleTree {
    nodes: Vec<Node>,
    root: NodeId,
    leaf_count: usize,
    height: usize,
}

impl MerkleTree {
    /// Build a tree over `values`, in order
    ///
    /// Each value becomes one leaf with `digest(value)`; the sequence order
    /// is part of what the root commits to. Returns [`Error::EmptyInput`]
    /// for an empty sequence, for which no root is defined.
    pub fn build<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut nodes = Vec::new();
        let mut layer = Vec::new();

        for value in values {
            let bytes = value.as_ref();
            let payload = String::from_utf8_lossy(bytes).into_owned();
            let node = Node::leaf(Digest::digest(bytes), Some(payload));
            trace!(leaf = %node.digest().short(), "hashed leaf");
            layer.push(Self::push(&mut nodes, node));
        }

        if layer.is_empty() {
            return Err(Error::EmptyInput);
        }

        let leaf_count = layer.len();
        debug!(leaves = leaf_count, "built leaf layer");

        let mut height = 0;
        while layer.len() > 1 {
            layer = Self::reduce(&mut nodes, &layer);
            height += 1;
            debug!(layer = height, nodes = layer.len(), "reduced layer");
        }

        Ok(MerkleTree {
            nodes,
            root: layer[0],
            leaf_count,
            height,
        })
    }

    /// The root node
    pub fn root(&self) -> &Node {
        &self.nodes[self.root.0]
    }

    /// The root digest
    pub fn root_digest(&self) -> Digest {
        self.root().digest()
    }

    /// The root digest as a 64-character hex string
    ///
    /// This is the externally visible result: the only value needed to
    /// compare trees or check that a re-computation matches.
    pub fn root_hex(&self) -> String {
        self.root_digest().to_hex()
    }

    /// Number of leaves the tree was built from
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Total number of nodes in the arena
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of reduction steps from the leaf layer to the root
    ///
    /// Equals `ceil(log2(leaf_count))`; 0 for a single leaf.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Iterate the leaves in input order
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.nodes[..self.leaf_count].iter()
    }

    // === Internal helpers ===

    /// Reduce one layer to the next, pairwise and in order
    fn reduce(nodes: &mut Vec<Node>, layer: &[NodeId]) -> Vec<NodeId> {
        // ceil, not floor: an odd layer still produces a slot for its
        // unpaired last node
        let mut next = Vec::with_capacity(layer.len().div_ceil(2));

        for pair in layer.chunks(2) {
            let left = pair[0];
            // An unpaired node is its own partner
            let right = pair.get(1).copied().unwrap_or(left);

            let parent = Self::join(nodes, left, right);
            next.push(Self::push(nodes, parent));
        }

        next
    }

    /// Form a parent node over `left` and `right`
    fn join(nodes: &[Node], left: NodeId, right: NodeId) -> Node {
        let left_node = &nodes[left.0];
        let right_node = &nodes[right.0];

        // The hash input is the two hex digests as one 128-byte ASCII
        // string, not the raw digest bytes
        let mut input = String::with_capacity(2 * HEX_LEN);
        input.push_str(&left_node.digest().to_hex());
        input.push_str(&right_node.digest().to_hex());
        let digest = Digest::digest(input.as_bytes());

        let payload = match (left_node.payload(), right_node.payload()) {
            _ if left == right => left_node.payload().map(str::to_string),
            (Some(l), Some(r)) => Some(format!("{}{}", l, r)),
            _ => None,
        };

        trace!(
            left = %left_node.digest().short(),
            right = %right_node.digest().short(),
            parent = %digest.short(),
            "joined pair"
        );

        Node::internal(digest, left, right, payload)
    }

    fn push(nodes: &mut Vec<Node>, node: Node) -> NodeId {
        let id = NodeId(nodes.len());
        nodes.push(node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha2 test vectors, also pinned in the reference tool's output
    const ALPHA: &str = "8ed3f6ad685b959ead7022518e1af76cd816f8e8ec7ccdda1ed4018e8f2223f8";
    const BETA: &str = "f44e64e75f3948e9f73f8dfa94721c4ce8cbb4f265c4790c702b2d41cfbf2753";
    const ALPHA_BETA_ROOT: &str =
        "0cb0309affcf4f994813ec26b8afc7e0b758605a04641de9871e04363de5e6b8";
    const ONLY: &str = "f905b19542ed08c9a9c26543cca32e5711d207dcffb81b4cdb44ce0b989431c9";

    fn hex_join(left: &Digest, right: &Digest) -> Digest {
        let input = format!("{}{}", left.to_hex(), right.to_hex());
        Digest::digest(input.as_bytes())
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = MerkleTree::build(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_single_leaf_root_is_leaf_digest() {
        let tree = MerkleTree::build(["only"]).unwrap();
        assert_eq!(tree.root_hex(), ONLY);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.height(), 0);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_two_leaves_golden_root() {
        let tree = MerkleTree::build(["alpha", "beta"]).unwrap();

        let leaves: Vec<_> = tree.leaves().collect();
        assert_eq!(leaves[0].digest().to_hex(), ALPHA);
        assert_eq!(leaves[1].digest().to_hex(), BETA);
        assert_eq!(tree.root_hex(), ALPHA_BETA_ROOT);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_root_hashes_hex_not_raw_bytes() {
        let tree = MerkleTree::build(["alpha", "beta"]).unwrap();

        // 128 hex characters hashed as ASCII
        let expected = Digest::digest(format!("{}{}", ALPHA, BETA).as_bytes());
        assert_eq!(tree.root_digest(), expected);

        // The raw-byte concatenation is a different root
        let mut raw = Vec::new();
        raw.extend_from_slice(Digest::from_hex(ALPHA).unwrap().as_bytes());
        raw.extend_from_slice(Digest::from_hex(BETA).unwrap().as_bytes());
        assert_ne!(tree.root_digest(), Digest::digest(&raw));
    }

    #[test]
    fn test_deterministic() {
        let words = ["In", "Pursuit", "Of", "His", "Own", "Hat"];
        let t1 = MerkleTree::build(words).unwrap();
        let t2 = MerkleTree::build(words).unwrap();
        assert_eq!(t1.root_hex(), t2.root_hex());
    }

    #[test]
    fn test_six_word_golden_root() {
        let tree = MerkleTree::build(["In", "Pursuit", "Of", "His", "Own", "Hat"]).unwrap();
        assert_eq!(
            tree.root_hex(),
            "9901680d38054239a472ede76939856174e7cc1e7180ebe665c64a11ede2e60f"
        );
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_order_sensitivity() {
        let ab = MerkleTree::build(["alpha", "beta"]).unwrap();
        let ba = MerkleTree::build(["beta", "alpha"]).unwrap();
        assert_ne!(ab.root_hex(), ba.root_hex());
        assert_eq!(
            ba.root_hex(),
            "73fce89052dc99cf946d0b9eed05f032c1911743421303628e9df455c273334d"
        );
    }

    #[test]
    fn test_odd_layer_duplication() {
        let tree = MerkleTree::build(["a", "b", "c"]).unwrap();

        let ha = Digest::digest(b"a");
        let hb = Digest::digest(b"b");
        let hc = Digest::digest(b"c");
        let p1 = hex_join(&ha, &hb);
        let p2 = hex_join(&hc, &hc);
        assert_eq!(tree.root_digest(), hex_join(&p1, &p2));
        assert_eq!(
            tree.root_hex(),
            "0bdf27bf7ec894ca7cadfe491ec1a3ece840f117989e8c5e9bd7086467bf6c38"
        );
    }

    #[test]
    fn test_duplicated_parent_shares_one_child() {
        let tree = MerkleTree::build(["a", "b", "c"]).unwrap();

        // Arena order: 3 leaves, then the two parents, then the root
        let root = tree.root();
        let right_parent = tree.node(root.right().unwrap());
        assert_eq!(right_parent.left(), right_parent.right());
        assert_eq!(
            tree.node(right_parent.left().unwrap()).digest(),
            Digest::digest(b"c")
        );
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn test_duplicated_parent_digest_is_fresh() {
        // The odd parent's digest is hash(hex || hex), never a copy of the
        // child's digest
        let tree = MerkleTree::build(["a", "b", "c"]).unwrap();
        let right_parent = tree.node(tree.root().right().unwrap());
        let child = tree.node(right_parent.left().unwrap());
        assert_ne!(right_parent.digest(), child.digest());
        assert_eq!(right_parent.digest(), hex_join(&child.digest(), &child.digest()));
    }

    #[test]
    fn test_height_is_ceil_log2() {
        let expected = [(1, 0), (2, 1), (3, 2), (4, 2), (5, 3), (6, 3), (7, 3), (8, 3), (9, 4)];
        for (n, height) in expected {
            let words: Vec<String> = (0..n).map(|i| format!("w{}", i)).collect();
            let tree = MerkleTree::build(&words).unwrap();
            assert_eq!(tree.height(), height, "height for {} leaves", n);
            assert_eq!(tree.leaf_count(), n);
        }
    }

    #[test]
    fn test_payloads_concatenate_in_order() {
        let tree = MerkleTree::build(["ab", "cd", "ef"]).unwrap();

        assert_eq!(tree.root().payload(), Some("abcdef"));
        let right_parent = tree.node(tree.root().right().unwrap());
        // The self-paired node's text is carried once, not doubled
        assert_eq!(right_parent.payload(), Some("ef"));
    }

    #[test]
    fn test_every_internal_node_has_two_children() {
        let words: Vec<String> = (0..13).map(|i| format!("w{}", i)).collect();
        let tree = MerkleTree::build(&words).unwrap();

        for i in 0..tree.node_count() {
            let node = tree.node(NodeId(i));
            assert_eq!(node.left().is_some(), node.right().is_some());
        }
    }
}
