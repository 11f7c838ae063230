//! API trait definitions split by responsibility
//!
//! This module organizes the Linear API surface into focused sub-traits:
//! - [`ViewerApi`] - Who am I, and which workspace
//! - [`ListingApi`] - Collection listing operations
//! - [`DetailApi`] - Single-entity lookups
//!
//! The [`LinearApi`](super::LinearApi) super-trait combines all three.

mod detail;
mod listing;
mod viewer;

pub use detail::DetailApi;
pub use listing::ListingApi;
pub use viewer::ViewerApi;
