mod node;
mod tree;

pub use node::Nodes;
pub use tree::Iter;
