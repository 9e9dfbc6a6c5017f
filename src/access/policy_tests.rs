use super::*;
use crate::config::UnknownRouteDefault;

#[test]
fn builtin_policy_validates() {
    AccessPolicy::default().validate().unwrap();
}

#[test]
fn empty_file_is_builtin() {
    let p = AccessPolicy::from_json_str("{}").unwrap();
    assert_eq!(p, AccessPolicy::default());
}

#[test]
fn sections_override_independently() {
    let p = AccessPolicy::from_json_str(r#"{
        "config": {"unknownRouteDefault": "deny"},
        "pages": {"/payroll": ["reports.view"]}
    }"#).unwrap();
    assert_eq!(p.config.unknown_route_default, UnknownRouteDefault::Deny);
    assert_eq!(p.pages.len(), 1);
    assert_eq!(p.features, builtin_features());
}

#[test]
fn rejects_unknown_permission_in_map() {
    let err = AccessPolicy::from_json_str(r#"{"features": {"payroll": ["payroll.run"]}}"#).unwrap_err();
    assert!(matches!(err, AccessError::UnknownPermission(_)));
}

#[test]
fn rejects_malformed_permission_in_map() {
    let err = AccessPolicy::from_json_str(r#"{"pages": {"/x": ["everything"]}}"#).unwrap_err();
    assert!(matches!(err, AccessError::MalformedPermission(_)));
}

#[test]
fn rejects_unknown_sections() {
    assert!(AccessPolicy::from_json_str(r#"{"menus": {}}"#).is_err());
}

#[test]
fn rejects_role_map_missing_roles() {
    let err = AccessPolicy::from_json_str(r#"{"roles": {"viewer": ["dashboard.view"]}}"#).unwrap_err();
    assert!(matches!(err, AccessError::InvalidPolicy(_)));
}

#[test]
fn base_config_fills_missing_section_only() {
    let base = AccessConfig { unknown_route_default: UnknownRouteDefault::Deny, ..Default::default() };
    let p = AccessPolicy::from_json_str_with("{}", base.clone()).unwrap();
    assert_eq!(p.config, base);
    let p = AccessPolicy::from_json_str_with(r#"{"config": {"unknownRouteDefault": "allow"}}"#, base).unwrap();
    assert_eq!(p.config.unknown_route_default, UnknownRouteDefault::Allow);
}
