//! HTTP handlers for the Stockroom inventory backend

pub mod health;
pub mod inventory;
pub mod product;
pub mod purchase;
pub mod sale;

pub use health::*;
pub use inventory::*;
pub use product::*;
pub use purchase::*;
pub use sale::*;
