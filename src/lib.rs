//! # wordroot
//!
//! Merkle tree summary hashes for ordered word lists.
//!
//! wordroot builds a binary hash tree over an ordered collection of text
//! records and reduces it to a single root digest. The root commits to
//! every record *and* to the order of records: change one word, or swap
//! two, and the root changes.
//!
//! ## Core Concepts
//!
//! - **Digest**: a SHA-256 hash with a 64-character lowercase hex form
//! - **Node**: one tree entry, a leaf (no children) or an internal node
//!   with exactly two children
//! - **MerkleTree**: an arena of nodes built bottom-up, layer by layer,
//!   terminating in a single root
//!
//! Parent digests are computed over the *hex string* forms of the two
//! child digests concatenated (128 ASCII bytes), not the raw digest
//! bytes. An odd-length layer pairs its last node with itself. Both rules
//! are part of the external contract: they make roots reproducible
//! against the reference tool.
//!
//! ## Example
//!
//! ```ignore
//! use wordroot::MerkleTree;
//!
//! let tree = MerkleTree::build(["alpha", "beta"])?;
//! println!("{}", tree.root_hex());
//! ```

pub mod model;
pub mod tree;
pub mod words;

mod error;

pub use error::{Error, Result};
pub use model::{Digest, Node, NodeId};
pub use tree::MerkleTree;
