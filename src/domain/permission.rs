//! Permission levels and the reimbursement access rules.
//!
//! Every authorization decision on the reimbursement resource goes through
//! [`PermissionLevel::permits`]. The rules are asymmetric:
//! operators may create, list and read any record, but only administrators
//! may update or delete.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::config::{PERMISSION_ADMIN, PERMISSION_OPERATOR, PERMISSION_REGULAR};

/// Account permission levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    Admin,
    Operator,
    #[default]
    Regular,
}

/// Operations guarded by a permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReimbursementAction {
    Create,
    Update,
    Delete,
    /// See every record in a listing
    ListAll,
    /// Read a record owned by another account
    ViewAny,
}

impl PermissionLevel {
    /// Whether this level may perform `action`.
    pub fn permits(self, action: ReimbursementAction) -> bool {
        use PermissionLevel::*;
        use ReimbursementAction::*;

        match (self, action) {
            (Admin, _) => true,
            (Operator, Create | ListAll | ViewAny) => true,
            (Operator, Update | Delete) => false,
            (Regular, Create | Update | Delete | ListAll | ViewAny) => false,
        }
    }

    /// Stored representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::Admin => PERMISSION_ADMIN,
            PermissionLevel::Operator => PERMISSION_OPERATOR,
            PermissionLevel::Regular => PERMISSION_REGULAR,
        }
    }
}

/// Unknown values fall back to `Regular`.
impl From<&str> for PermissionLevel {
    fn from(s: &str) -> Self {
        match s {
            PERMISSION_ADMIN => PermissionLevel::Admin,
            PERMISSION_OPERATOR => PermissionLevel::Operator,
            _ => PermissionLevel::Regular,
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which records a listing returns to callers lacking [`ReimbursementAction::ListAll`].
///
/// `All` keeps the historical behavior: the owner filter was computed and then
/// thrown away, so everyone received the full list. `Owned` applies the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListScope {
    #[default]
    All,
    Owned,
}

impl FromStr for ListScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ListScope::All),
            "owned" => Ok(ListScope::Owned),
            other => Err(format!("unknown list scope: {}", other)),
        }
    }
}

impl fmt::Display for ListScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListScope::All => f.write_str("all"),
            ListScope::Owned => f.write_str("owned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PermissionLevel::*;
    use ReimbursementAction::*;

    const ACTIONS: [ReimbursementAction; 5] = [Create, Update, Delete, ListAll, ViewAny];

    #[test]
    fn admin_is_permitted_everything() {
        for action in ACTIONS {
            assert!(Admin.permits(action), "admin denied {:?}", action);
        }
    }

    #[test]
    fn operator_can_create_and_read_but_not_modify() {
        assert!(Operator.permits(Create));
        assert!(Operator.permits(ListAll));
        assert!(Operator.permits(ViewAny));
        assert!(!Operator.permits(Update));
        assert!(!Operator.permits(Delete));
    }

    #[test]
    fn regular_is_denied_everything() {
        for action in ACTIONS {
            assert!(!Regular.permits(action), "regular allowed {:?}", action);
        }
    }

    #[test]
    fn unknown_stored_value_reads_as_regular() {
        assert_eq!(PermissionLevel::from("ADMIN"), Admin);
        assert_eq!(PermissionLevel::from("OPERATOR"), Operator);
        assert_eq!(PermissionLevel::from("REGULAR"), Regular);
        assert_eq!(PermissionLevel::from("admin"), Regular);
        assert_eq!(PermissionLevel::from(""), Regular);
    }

    #[test]
    fn serializes_as_screaming_case() {
        let json = serde_json::to_string(&Operator).unwrap();
        assert_eq!(json, "\"OPERATOR\"");
        assert_eq!(Operator.to_string(), "OPERATOR");
    }

    #[test]
    fn list_scope_parses_case_insensitively() {
        assert_eq!("owned".parse::<ListScope>(), Ok(ListScope::Owned));
        assert_eq!(" ALL ".parse::<ListScope>(), Ok(ListScope::All));
        assert!("mine".parse::<ListScope>().is_err());
        assert_eq!(ListScope::default(), ListScope::All);
    }
}
