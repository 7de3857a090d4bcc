//! Account domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::permission::{PermissionLevel, ReimbursementAction};

/// The authenticated identity making a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    #[schema(example = 1)]
    pub id: i64,
    /// Login of the user this account belongs to (the token subject)
    #[schema(example = "maria")]
    pub login: String,
    pub permission: PermissionLevel,
}

impl Account {
    pub fn new(id: i64, login: impl Into<String>, permission: PermissionLevel) -> Self {
        Self {
            id,
            login: login.into(),
            permission,
        }
    }

    /// Check whether this account's permission level allows `action`
    pub fn can(&self, action: ReimbursementAction) -> bool {
        self.permission.permits(action)
    }
}
