//! Safe SQL builder: identifiers from the crate's own column vocabulary only,
//! values as parameters.

mod builder;
pub mod params;

pub use builder::*;
pub use params::*;
