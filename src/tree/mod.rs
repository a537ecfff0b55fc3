//! Merkle tree construction

mod builder;

pub use builder::MerkleTree;
