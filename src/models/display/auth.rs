//! Authentication status display model

use serde::Serialize;

use super::Describe;
use crate::client::models::{Organisation, User};
use crate::output::detail::DetailField;

/// Result of `auth status`: who the key belongs to and where.
#[derive(Debug, Clone, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: User,
    pub organisation: Organisation,
}

impl AuthStatus {
    pub fn new(user: User, organisation: Organisation) -> Self {
        Self {
            authenticated: true,
            user,
            organisation,
        }
    }
}

impl Describe for AuthStatus {
    fn detail_fields(&self) -> Vec<DetailField> {
        let mut fields = vec![
            DetailField::new("User", format!("{} ({})", self.user.name, self.user.email)),
            DetailField::new("Organisation", &self.organisation.name),
            DetailField::new("Users", self.organisation.user_count.to_string()),
        ];
        if self.user.admin {
            fields.push(DetailField::new("Role", "Admin"));
        }
        fields
    }
}
