use super::*;
use crate::config::AccessConfig;
use crate::identity::AuthUser;

fn policy() -> Arc<AccessPolicy> { Arc::new(AccessPolicy::default()) }

fn signed_in(user: AuthUser) -> PermissionEvaluator {
    PermissionEvaluator::from_auth(policy(), &AuthState::signed_in(user))
}

#[test]
fn empty_lists_any_false_all_true() {
    let ev = signed_in(AuthUser::with_role("super_admin"));
    let none: [&str; 0] = [];
    assert!(ev.has_all_permissions(&none));
    assert!(!ev.has_any_permission(&none));
    let anon = PermissionEvaluator::anonymous(policy());
    assert!(anon.has_all_permissions(&none));
    assert!(!anon.has_any_permission(&none));
}

#[test]
fn any_vs_all() {
    let ev = signed_in(AuthUser::default().with_permissions([p::LEAVES_VIEW]));
    assert!(ev.has_any_permission(&[p::LEAVES_APPROVE, p::LEAVES_VIEW]));
    assert!(!ev.has_all_permissions(&[p::LEAVES_APPROVE, p::LEAVES_VIEW]));
    assert!(ev.has_all_permissions(&[p::LEAVES_VIEW]));
}

#[test]
fn hr_specialist_defaults() {
    let ev = signed_in(AuthUser::with_role("hr_specialist").with_permissions(Vec::<String>::new()));
    assert_eq!(ev.source(), SourceKind::RoleDefault(Role::HrSpecialist));
    assert!(ev.has_permission(p::LICENSES_VIEW));
    assert!(!ev.has_permission(p::LICENSES_DELETE));
    let expected: Vec<&str> = {
        let mut v: Vec<&str> = ev.policy().roles.permissions_for(Role::HrSpecialist).collect();
        v.sort_unstable();
        v
    };
    assert_eq!(ev.permissions(), expected);
}

#[test]
fn explicit_list_replaces_role_defaults() {
    let ev = signed_in(AuthUser::with_role("admin").with_permissions([p::EMPLOYEES_VIEW]));
    assert_eq!(ev.permissions(), vec![p::EMPLOYEES_VIEW]);
    assert!(!ev.has_permission(p::EMPLOYEES_CREATE));
    // Role claims still answer role checks.
    assert!(ev.is_admin());
    assert!(!ev.can_add_employees());
}

#[test]
fn role_checks_are_exact() {
    let ev = signed_in(AuthUser::with_role("hr_manager"));
    assert!(ev.has_role(Role::HrManager));
    assert!(!ev.has_role(Role::Admin));
    assert!(ev.has_any_role(&[Role::Viewer, Role::HrManager]));
    assert!(!ev.has_any_role(&[]));
    assert!(ev.is_manager());
    assert!(!ev.is_admin());
}

#[test]
fn unknown_role_has_role_string_but_no_permissions() {
    let ev = signed_in(AuthUser::with_role("Admin"));
    assert_eq!(ev.role(), Some("Admin"));
    assert!(!ev.has_role(Role::Admin));
    assert!(ev.has_role_str("Admin"));
    assert!(!ev.has_role_str("admin"));
    assert_eq!(ev.source(), SourceKind::Unresolved);
    assert!(ev.permissions().is_empty());
}

#[test]
fn anonymous_denies_everything_but_undeclared_gates() {
    let ev = PermissionEvaluator::from_auth(policy(), &AuthState::anonymous());
    for r in Role::ALL { assert!(!ev.has_role(r)); }
    for x in crate::catalog::ALL_PERMISSIONS { assert!(!ev.has_permission(x)); }
    assert!(ev.can_access_page("/profile"));
    assert!(ev.can_use_feature("dark_mode"));
    assert!(!ev.can_access_page("/employees"));
}

#[test]
fn loading_state_is_empty_even_with_user() {
    let mut auth = AuthState::signed_in(AuthUser::with_role("super_admin"));
    auth.is_loading = true;
    let ev = PermissionEvaluator::from_auth(policy(), &auth);
    assert!(ev.is_loading());
    assert!(ev.permissions().is_empty());
    assert_eq!(ev.role(), None);
}

#[test]
fn can_access_builds_identifier() {
    let ev = signed_in(AuthUser::with_role("hr_specialist"));
    assert!(ev.can_access("licenses", "edit"));
    assert!(!ev.can_access("licenses", "delete"));
    assert_eq!(ev.try_can_access("payroll", "run").unwrap(), false);
}

#[test]
fn strict_can_access_rejects_unknown_identifiers() {
    let cfg = AccessConfig { validate_dynamic_permissions: true, ..Default::default() };
    let pol = Arc::new(AccessPolicy::builtin(cfg));
    let ev = PermissionEvaluator::from_auth(pol, &AuthState::signed_in(AuthUser::with_role("super_admin")));
    assert!(matches!(ev.try_can_access("payroll", "run"), Err(AccessError::UnknownPermission(_))));
    assert!(matches!(ev.try_can_access("Payroll", ""), Err(AccessError::MalformedPermission(_))));
    assert!(!ev.can_access("payroll", "run"));
    assert!(ev.can_access("licenses", "delete"));
}

#[test]
fn convenience_predicates() {
    let sa = signed_in(AuthUser::with_role("super_admin"));
    assert!(sa.is_super_admin() && sa.is_admin() && sa.is_manager());
    assert!(sa.can_edit_licenses() && sa.can_add_employees() && sa.can_approve_leaves());
    assert!(sa.can_manage_users() && sa.can_access_reports() && sa.can_manage_documents());

    let emp = signed_in(AuthUser::with_role("employee"));
    assert!(!emp.is_manager());
    assert!(!emp.can_edit_licenses());
    assert!(!emp.can_approve_leaves());
    assert!(!emp.can_manage_users());
    assert!(!emp.can_access_reports());
    assert!(!emp.can_manage_documents());

    let specialist = signed_in(AuthUser::with_role("hr_specialist"));
    assert!(specialist.can_manage_documents());
    assert!(specialist.can_add_employees());
    assert!(!specialist.can_manage_users());
}

#[test]
fn unrecognised_role_claims_are_queryable() {
    let ev = signed_in(AuthUser::with_role("manager"));
    assert!(ev.has_role_str("manager"));
    assert!(!ev.is_manager());
    let anon = PermissionEvaluator::anonymous(policy());
    assert!(!anon.has_role_str(""));
    assert!(!anon.has_role_str("manager"));
}

#[test]
fn source_kind_tracks_winner() {
    assert_eq!(signed_in(AuthUser::with_role("admin").with_permissions([p::EMPLOYEES_VIEW])).source(), SourceKind::Explicit);
    assert_eq!(signed_in(AuthUser::with_role("admin").with_role_data([p::LEAVES_VIEW])).source(), SourceKind::RoleData);
    assert_eq!(PermissionEvaluator::loading(policy()).source(), SourceKind::Unresolved);
}
