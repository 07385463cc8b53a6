//! Field catalog: the closed enumerations constraining every categorical field.
//! Pure data; load-once, no mutation path.

mod enums;
mod localities;

pub use enums::*;
pub use localities::*;
