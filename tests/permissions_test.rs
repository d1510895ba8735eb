use escrow_admin_core::auth::{
    can_access_route, has_permission, role_permissions, AdminRole, Permission,
};

#[test]
fn permission_checks_match_the_grant_table_exactly() {
    assert!(!has_permission(Some(AdminRole::Viewer), Permission::UserDelete));
    assert!(has_permission(Some(AdminRole::Superadmin), Permission::UserDelete));
    assert!(has_permission(Some(AdminRole::Admin), Permission::UserBlock));
    assert!(!has_permission(Some(AdminRole::Admin), Permission::UserDelete));
    assert!(has_permission(Some(AdminRole::Support), Permission::KycView));
    assert!(!has_permission(Some(AdminRole::Support), Permission::KycUpdate));
}

#[test]
fn check_is_a_pure_table_lookup() {
    // calling repeatedly, in any order, never changes the verdict
    for _ in 0..3 {
        for role in AdminRole::ALL {
            for permission in Permission::ALL {
                assert_eq!(
                    has_permission(Some(role), permission),
                    role_permissions(role).contains(&permission),
                );
            }
        }
    }
}

#[test]
fn absent_role_is_denied_every_permission() {
    for permission in Permission::ALL {
        assert!(!has_permission(None, permission));
    }
}

#[test]
fn grant_table_sizes_reflect_the_superset_ordering() {
    assert_eq!(role_permissions(AdminRole::Superadmin).len(), 9);
    assert_eq!(role_permissions(AdminRole::Admin).len(), 8);
    assert_eq!(role_permissions(AdminRole::Support).len(), 3);
    assert_eq!(
        role_permissions(AdminRole::Support),
        role_permissions(AdminRole::Viewer)
    );
    for permission in role_permissions(AdminRole::Admin) {
        assert!(role_permissions(AdminRole::Superadmin).contains(permission));
    }
    for permission in role_permissions(AdminRole::Support) {
        assert!(role_permissions(AdminRole::Admin).contains(permission));
    }
}

#[test]
fn route_access_follows_the_route_table() {
    assert!(can_access_route(Some(AdminRole::Support), "/users/blocked"));
    assert!(can_access_route(Some(AdminRole::Support), "/users/search"));
    assert!(!can_access_route(None, "/kyc/pending"));
    assert!(can_access_route(Some(AdminRole::Viewer), "/transactions/search"));
    assert!(can_access_route(Some(AdminRole::Viewer), "/transactions/disputed"));
}

#[test]
fn unlisted_routes_are_open_to_any_authenticated_operator() {
    for role in AdminRole::ALL {
        assert!(can_access_route(Some(role), "/"));
    }
    assert!(!can_access_route(None, "/"));
}
