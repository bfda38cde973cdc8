//! Document arena: slotmap-backed head tree that receives style fragments.

pub mod node;
pub mod tree;
pub mod query;
pub mod document;

pub use node::{NodeId, NodeData};
pub use tree::Dom;
