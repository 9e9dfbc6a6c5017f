//! End-to-end checks of the access layer: auth state in, routing/render/menu
//! decisions out, through a single shared PermissionContext.

use std::sync::Arc;

use staffgate::catalog::{permissions as p, Role, RolePermissionMap, ALL_PERMISSIONS};
use staffgate::gating::{builtin_menu, filter_menu, guard, Gate, GuardOutcome, Route};
use staffgate::{AccessConfig, AccessError, AccessPolicy, AuthState, AuthUser, PermissionContext, RequestContext, UnknownRouteDefault};

fn app(cfg: AccessConfig) -> (Arc<PermissionContext>, RequestContext) {
    let pc = Arc::new(PermissionContext::new(Arc::new(AccessPolicy::builtin(cfg))));
    let rc = RequestContext::new(pc.clone());
    (pc, rc)
}

#[test]
fn role_map_invariants_hold() {
    let m = RolePermissionMap::builtin();
    for r in Role::ALL {
        assert!(m.len_for(r) > 0);
        for perm in m.permissions_for(r) { assert!(m.grants(Role::SuperAdmin, perm)); }
    }
    for perm in ALL_PERMISSIONS { assert!(m.grants(Role::SuperAdmin, perm)); }
}

#[test]
fn hr_specialist_scenario() {
    let (pc, _) = app(AccessConfig::default());
    let user: AuthUser = serde_json::from_str(r#"{"role": "hr_specialist", "permissions": []}"#).unwrap();
    pc.sync(&AuthState::signed_in(user));
    let ev = pc.current();
    let expected: Vec<&str> = {
        let mut v: Vec<&str> = RolePermissionMap::builtin().permissions_for(Role::HrSpecialist).collect();
        v.sort_unstable();
        v
    };
    assert_eq!(ev.permissions(), expected);
    assert!(!ev.has_permission(p::LICENSES_DELETE));
    assert!(ev.has_permission(p::LICENSES_VIEW));
}

#[test]
fn explicit_grants_scenario() {
    let (pc, _) = app(AccessConfig::default());
    pc.sync(&AuthState::signed_in(AuthUser::with_role("admin").with_permissions([p::EMPLOYEES_VIEW])));
    let ev = pc.current();
    assert_eq!(ev.permissions(), vec![p::EMPLOYEES_VIEW]);
    assert!(!ev.has_permission(p::EMPLOYEES_CREATE));
}

#[test]
fn unauthenticated_scenario() {
    let (pc, rc) = app(AccessConfig::default());
    pc.sync(&serde_json::from_str::<AuthState>(r#"{"user": null, "isAuthenticated": false, "isLoading": false}"#).unwrap());
    let ev = pc.current();
    for r in Role::ALL { assert!(!ev.has_role(r)); }
    assert!(!ev.has_permission(p::DASHBOARD_VIEW));
    assert!(ev.can_access_page("/not-declared"));
    assert!(ev.can_use_feature("not_declared"));
    assert!(matches!(guard(&rc, &Route::new("/employees")).unwrap(), GuardOutcome::RedirectToLogin { .. }));
}

#[test]
fn page_any_feature_all() {
    let (pc, _) = app(AccessConfig::default());
    // leaves.edit without leaves.approve
    pc.sync(&AuthState::signed_in(AuthUser::default().with_permissions([p::LEAVES_EDIT, p::LEAVES_VIEW])));
    let ev = pc.current();
    assert!(ev.can_access_page("/leaves/approvals"));
    assert!(!ev.can_use_feature("leave_approval"));
}

#[test]
fn session_flow_login_switch_logout() {
    let (pc, rc) = app(AccessConfig { unknown_route_default: UnknownRouteDefault::Deny, ..Default::default() });
    let route = Route::new("/employees/new").requires("/employees/new");
    let add_button = Gate::builder().permission(p::EMPLOYEES_CREATE).build();

    pc.sync(&AuthState::loading());
    assert_eq!(guard(&rc, &route).unwrap(), GuardOutcome::Loading);
    assert_eq!(add_button.render(&rc, "add", None).unwrap(), None);

    pc.sync(&AuthState::signed_in(AuthUser::with_role("admin")));
    assert_eq!(guard(&rc, &route).unwrap(), GuardOutcome::Render);
    assert_eq!(add_button.render(&rc, "add", None).unwrap(), Some("add"));

    pc.sync(&AuthState::signed_in(AuthUser::with_role("viewer")));
    assert_eq!(guard(&rc, &route).unwrap(), GuardOutcome::Denied);
    assert_eq!(add_button.render(&rc, "add", Some("no")).unwrap(), Some("no"));
    let menu = filter_menu(&rc, &builtin_menu()).unwrap();
    assert!(menu.iter().all(|m| m.key != "employees" || m.submenu.iter().all(|s| s.key != "employees.new")));

    pc.logout();
    assert_eq!(
        guard(&rc, &route).unwrap(),
        GuardOutcome::RedirectToLogin { to: "/login".into(), from: "/employees/new".into() }
    );
}

#[test]
fn consumers_without_provider_fail_loudly() {
    let rc = RequestContext::default();
    assert!(matches!(guard(&rc, &Route::new("/")), Err(AccessError::ContextMissing)));
    assert!(matches!(filter_menu(&rc, &builtin_menu()), Err(AccessError::ContextMissing)));
    assert!(matches!(Gate::builder().build().render(&rc, (), None), Err(AccessError::ContextMissing)));
}
