//! Admin back-office handlers.

pub mod property;
