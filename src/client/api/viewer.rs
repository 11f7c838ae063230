//! Viewer API trait for identity operations

use async_trait::async_trait;

use crate::client::models::{Organisation, User};
use crate::error::Result;

/// Operations about the API key's owner
#[async_trait]
pub trait ViewerApi: Send + Sync {
    /// The user the API key belongs to
    async fn viewer(&self) -> Result<User>;

    /// The workspace the API key belongs to, fetched fresh each call
    async fn organisation(&self) -> Result<Organisation>;
}
