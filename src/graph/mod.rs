pub mod model;
pub mod extract;

pub use model::{GraphData, Link, NodeId};
pub use extract::{extract_components, GraphComponents};
