//! Role-based access control for dashboard operators.
//!
//! The grant tables are static configuration: roles, permissions and the
//! route requirements never change at runtime. Both checks are pure
//! functions so the same predicate gates a route transition and a single
//! button, and an absent role always resolves to a denial.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operator role, assigned at login and immutable for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Superadmin,
    Admin,
    Support,
    Viewer,
}

impl AdminRole {
    pub const ALL: [AdminRole; 4] = [
        AdminRole::Superadmin,
        AdminRole::Admin,
        AdminRole::Support,
        AdminRole::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "superadmin",
            AdminRole::Admin => "admin",
            AdminRole::Support => "support",
            AdminRole::Viewer => "viewer",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Atomic capability token. Permissions are never combined dynamically; the
/// role -> permissions mapping below is the whole story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    KycView,
    KycUpdate,
    KycApprove,
    UserView,
    UserUpdate,
    UserBlock,
    UserDelete,
    TransactionView,
    TransactionAction,
}

impl Permission {
    pub const ALL: [Permission; 9] = [
        Permission::KycView,
        Permission::KycUpdate,
        Permission::KycApprove,
        Permission::UserView,
        Permission::UserUpdate,
        Permission::UserBlock,
        Permission::UserDelete,
        Permission::TransactionView,
        Permission::TransactionAction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::KycView => "kyc:view",
            Permission::KycUpdate => "kyc:update",
            Permission::KycApprove => "kyc:approve",
            Permission::UserView => "user:view",
            Permission::UserUpdate => "user:update",
            Permission::UserBlock => "user:block",
            Permission::UserDelete => "user:delete",
            Permission::TransactionView => "transaction:view",
            Permission::TransactionAction => "transaction:action",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SUPERADMIN_PERMISSIONS: &[Permission] = &[
    Permission::KycView,
    Permission::KycUpdate,
    Permission::KycApprove,
    Permission::UserView,
    Permission::UserUpdate,
    Permission::UserBlock,
    Permission::UserDelete,
    Permission::TransactionView,
    Permission::TransactionAction,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::KycView,
    Permission::KycUpdate,
    Permission::KycApprove,
    Permission::UserView,
    Permission::UserUpdate,
    Permission::UserBlock,
    Permission::TransactionView,
    Permission::TransactionAction,
];

// support and viewer currently hold the same read-only grants.
const READ_ONLY_PERMISSIONS: &[Permission] = &[
    Permission::KycView,
    Permission::UserView,
    Permission::TransactionView,
];

/// Routes that require a permission to enter. A route absent from this table
/// is open to any authenticated operator. When a route lists several
/// permissions, holding any one of them is enough.
const ROUTE_PERMISSIONS: &[(&str, &[Permission])] = &[
    ("/kyc/pending", &[Permission::KycView]),
    ("/users/search", &[Permission::UserView]),
    ("/users/blocked", &[Permission::UserView]),
    ("/transactions/search", &[Permission::TransactionView]),
    ("/transactions/disputed", &[Permission::TransactionView]),
];

/// The static grant table for a role.
pub fn role_permissions(role: AdminRole) -> &'static [Permission] {
    match role {
        AdminRole::Superadmin => SUPERADMIN_PERMISSIONS,
        AdminRole::Admin => ADMIN_PERMISSIONS,
        AdminRole::Support | AdminRole::Viewer => READ_ONLY_PERMISSIONS,
    }
}

/// Whether `role` holds `permission`. An absent role (no authenticated
/// operator) never holds anything.
pub fn has_permission(role: Option<AdminRole>, permission: Permission) -> bool {
    match role {
        Some(role) => role_permissions(role).contains(&permission),
        None => false,
    }
}

/// Whether `role` may enter `route`. Unauthenticated operators are denied
/// everywhere; authenticated ones pass unless the route lists requirements
/// and the role holds none of them.
pub fn can_access_route(role: Option<AdminRole>, route: &str) -> bool {
    let Some(role) = role else {
        return false;
    };

    match ROUTE_PERMISSIONS.iter().find(|(path, _)| *path == route) {
        Some((_, required)) => required
            .iter()
            .any(|permission| has_permission(Some(role), *permission)),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superadmin_holds_every_permission() {
        for permission in Permission::ALL {
            assert!(has_permission(Some(AdminRole::Superadmin), permission));
        }
    }

    #[test]
    fn admin_holds_everything_except_user_delete() {
        for permission in Permission::ALL {
            let expected = permission != Permission::UserDelete;
            assert_eq!(has_permission(Some(AdminRole::Admin), permission), expected);
        }
    }

    #[test]
    fn support_and_viewer_share_the_read_only_grants() {
        for permission in Permission::ALL {
            assert_eq!(
                has_permission(Some(AdminRole::Support), permission),
                has_permission(Some(AdminRole::Viewer), permission),
            );
        }
        assert!(has_permission(Some(AdminRole::Viewer), Permission::KycView));
        assert!(has_permission(Some(AdminRole::Viewer), Permission::UserView));
        assert!(has_permission(
            Some(AdminRole::Viewer),
            Permission::TransactionView
        ));
        assert!(!has_permission(Some(AdminRole::Viewer), Permission::UserDelete));
        assert!(!has_permission(
            Some(AdminRole::Support),
            Permission::TransactionAction
        ));
    }

    #[test]
    fn absent_role_never_holds_any_permission() {
        for permission in Permission::ALL {
            assert!(!has_permission(None, permission));
        }
    }

    #[test]
    fn gated_routes_require_the_listed_permission() {
        assert!(can_access_route(Some(AdminRole::Support), "/users/blocked"));
        assert!(can_access_route(Some(AdminRole::Support), "/users/search"));
        assert!(can_access_route(Some(AdminRole::Viewer), "/kyc/pending"));
        assert!(can_access_route(
            Some(AdminRole::Admin),
            "/transactions/disputed"
        ));
    }

    #[test]
    fn absent_role_is_denied_everywhere() {
        assert!(!can_access_route(None, "/kyc/pending"));
        assert!(!can_access_route(None, "/"));
        assert!(!can_access_route(None, "/transactions/disputed"));
    }

    #[test]
    fn unlisted_routes_are_open_to_any_authenticated_role() {
        for role in AdminRole::ALL {
            assert!(can_access_route(Some(role), "/"));
            assert!(can_access_route(Some(role), "/profile"));
        }
    }

    #[test]
    fn permission_tokens_have_canonical_string_forms() {
        assert_eq!(Permission::KycApprove.as_str(), "kyc:approve");
        assert_eq!(Permission::TransactionAction.as_str(), "transaction:action");
        assert_eq!(AdminRole::Superadmin.as_str(), "superadmin");
    }

    #[test]
    fn role_deserializes_from_lowercase_session_value() {
        let role: AdminRole = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, AdminRole::Superadmin);
        assert!(serde_json::from_str::<AdminRole>("\"root\"").is_err());
    }
}
