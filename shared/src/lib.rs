//! Shared types and core rules for the Stockroom inventory backend
//!
//! This crate contains the data contracts and the pure business rules
//! (stock admission, timeline ordering, input validation) used by the
//! backend server and its test suite.

pub mod models;
pub mod stock;
pub mod validation;

pub use models::*;
pub use stock::*;
pub use validation::*;
