//! RoomSaathi listing core: property data model, validation engine, and persistence gateway.

pub mod catalog;
pub mod details;
pub mod draft;
pub mod error;
pub mod form;
pub mod gateway;
pub mod handlers;
pub mod notify;
pub mod record;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;
pub mod validate;

pub use catalog::{City, PropertyType};
pub use details::{DetailGroup, TypeDetails};
pub use draft::PropertyDraft;
pub use error::AppError;
pub use form::{PropertyForm, SaveOutcome, SavePolicy};
pub use gateway::{PersistedProperty, PgPropertyStore, PropertyGateway};
pub use notify::{Notification, NotificationSink, Severity, TracingSink};
pub use record::{normalize, PropertyRecord};
pub use response::{success_many, success_one};
pub use routes::{common_routes, common_routes_with_ready, property_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_property_tables};
pub use validate::{validate, validate_with, ErrorMap, ValidationOptions};
