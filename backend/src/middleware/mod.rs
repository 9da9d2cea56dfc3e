//! Request middleware for the Stockroom inventory backend

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
