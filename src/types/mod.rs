//! Vertex, edge and error types shared by the graph modules.

pub mod edge;
pub mod error;
pub mod pair;
pub mod vertex;

pub use edge::{Edge, EdgeKey, EdgeOptions};
pub use error::{AlgoError, AlgoResult};
pub use pair::UnorderedPair;
pub use vertex::Vertex;
