//! Route assembly for the admin back office.

mod common;
mod property;

pub use common::{common_routes, common_routes_with_ready};
pub use property::property_routes;
