//! Core data model types for wordroot

mod digest;
mod node;

pub use digest::{Digest, DIGEST_LEN, HEX_LEN};
pub use node::{Node, NodeId};
