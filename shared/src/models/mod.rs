//! Domain models for the Stockroom inventory backend

mod inventory;

pub use inventory::*;
