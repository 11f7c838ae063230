//! User model

use serde::{Deserialize, Serialize};

/// Workspace member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: String,

    /// Full name
    pub name: String,

    /// Short name shown in the Linear UI
    pub display_name: String,

    /// Email address
    pub email: String,

    /// False once the user has been deactivated
    pub active: bool,

    /// Workspace administrator
    pub admin: bool,

    pub avatar_url: Option<String>,
}
