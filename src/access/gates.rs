//! Page and feature gates.
//!
//! Pages use OR semantics: any one listed permission opens the page, since a
//! page may be reached through alternative permissions (edit or approve).
//! Features use AND semantics: a feature composes several atomic permissions
//! and is never granted on partial qualification. Keep the two apart.
//!
//! Keys with no declared requirement fall back to `config.unknown_route_default`
//! (allow unless configured otherwise).

use tracing::debug;

use super::AccessPolicy;
use crate::identity::PermissionEvaluator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    Page,
    Feature,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self { GateKind::Page => "page", GateKind::Feature => "feature" }
    }
}

/// Declared requirement for `key` under `kind`, `None` when undeclared.
pub fn requirement<'a>(policy: &'a AccessPolicy, kind: GateKind, key: &str) -> Option<&'a [String]> {
    match kind {
        GateKind::Page => policy.pages.required(key),
        GateKind::Feature => policy.features.required(key),
    }
}

fn evaluate(ev: &PermissionEvaluator, kind: GateKind, key: &str) -> bool {
    let policy = ev.policy();
    let Some(required) = requirement(policy, kind, key) else {
        return policy.config.unknown_route_default.allows();
    };
    let ok = match kind {
        GateKind::Page => ev.has_any_permission(required),
        GateKind::Feature => ev.has_all_permissions(required),
    };
    if !ok {
        debug!(target: "staffgate::access", "{} gate denied key='{}' role={:?} required={:?}", kind.as_str(), key, ev.role(), required);
    }
    ok
}

pub fn can_access_page(ev: &PermissionEvaluator, path: &str) -> bool { evaluate(ev, GateKind::Page, path) }

pub fn can_use_feature(ev: &PermissionEvaluator, name: &str) -> bool { evaluate(ev, GateKind::Feature, name) }

/// Page gate OR feature gate for the same key. Used where a declared
/// requirement may name either a route or a feature.
pub fn can_reach(ev: &PermissionEvaluator, key: &str) -> bool {
    can_access_page(ev, key) || can_use_feature(ev, key)
}

#[cfg(test)]
#[path = "gates_tests.rs"]
mod gates_tests;
