//! Element tree: slotmap-backed arena that components render into.

pub mod markup;
pub mod node;
pub mod query;
pub mod tree;

pub use node::{Element, NodeId};
pub use tree::Dom;
