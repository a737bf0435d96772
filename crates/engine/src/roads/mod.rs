//! Road network: ribbon geometry, building collision, graph edits, junction
//! fills and drag-to-place pathfinding.

pub mod collision;
pub mod junction;
pub mod network;
pub mod preview;
pub mod ribbon;
pub mod types;


pub use collision::*;
pub use junction::*;
pub use network::*;
pub use preview::*;
pub use ribbon::*;
pub use types::*;
