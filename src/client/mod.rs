//! Linear API client
//!
//! Layered bottom-up:
//! - [`transport`] and [`rate_limit`]: the HTTP pipeline (auth, 429 retry)
//! - [`graphql`]: envelope encoding, status and error mapping, deadline
//! - [`schema`] and [`mapper`]: raw response shapes and their conversion
//!   into [`models`]
//! - [`filters`] and [`pagination`]: client-side narrowing and page sizes
//! - [`api`] and [`linear`]: the typed operations the CLI calls

pub mod api;
pub mod cancel;
pub mod filters;
pub mod graphql;
pub mod linear;
pub mod mapper;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod rate_limit;
pub mod schema;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use api::{DetailApi, ListingApi, ViewerApi};
pub use cancel::CancelToken;
pub use linear::LinearClient;
#[cfg(test)]
pub use mock::MockLinearClient;
pub use pagination::{IssueListOptions, Page, ProjectListOptions};

/// Everything the CLI needs from an API client.
///
/// Implemented automatically for any type implementing the three sub-traits.
pub trait LinearApi: ViewerApi + ListingApi + DetailApi {}

impl<T: ViewerApi + ListingApi + DetailApi + ?Sized> LinearApi for T {}
