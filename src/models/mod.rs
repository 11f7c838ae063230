//! Display models for CLI output
//!
//! Domain entities from `client::models` are rendered through the traits
//! here: [`TableRow`] for list tables, [`Describe`] for single-entity views.
//! JSON output serializes the entities themselves and bypasses both.

pub mod display;

pub use display::{AuthStatus, Describe, TableRow};
