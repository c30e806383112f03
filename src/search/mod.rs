mod hop_graph;
mod node;
mod outcome;

pub use hop_graph::*;
pub use node::*;
pub use outcome::*;
