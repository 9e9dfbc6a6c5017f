//! Permission evaluator: an immutable snapshot of one principal's effective
//! permissions plus the policy it was derived under. All queries are pure and
//! boolean; unknown identifiers simply evaluate to false.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use super::principal::{AuthState, AuthStatus};
use super::resolver::{self, SourceKind};
use crate::access::{self, AccessPolicy};
use crate::catalog::{self, permissions as p, Role};
use crate::error::{AccessError, AccessResult};

#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    policy: Arc<AccessPolicy>,
    status: AuthStatus,
    role: Option<String>,
    source: SourceKind,
    granted: HashSet<String>,
}

impl PermissionEvaluator {
    fn empty(policy: Arc<AccessPolicy>, status: AuthStatus) -> Self {
        Self { policy, status, role: None, source: SourceKind::Unresolved, granted: HashSet::new() }
    }

    /// Denying snapshot presented while authentication is still resolving.
    pub fn loading(policy: Arc<AccessPolicy>) -> Self { Self::empty(policy, AuthStatus::Loading) }

    pub fn anonymous(policy: Arc<AccessPolicy>) -> Self { Self::empty(policy, AuthStatus::Anonymous) }

    /// Derive the snapshot for an auth state. Loading or user-less states yield
    /// an empty set; otherwise the highest-priority permission source wins.
    pub fn from_auth(policy: Arc<AccessPolicy>, auth: &AuthState) -> Self {
        let status = auth.status();
        if status == AuthStatus::Loading { return Self::loading(policy); }
        let Some(user) = auth.user.as_ref() else { return Self::empty(policy, status); };
        let source = resolver::resolve(Some(user));
        let granted = source.materialize(&policy.roles);
        Self { status, role: user.role.clone(), source: source.kind(), granted, policy }
    }

    pub fn policy(&self) -> &AccessPolicy { &self.policy }

    pub fn status(&self) -> AuthStatus { self.status }

    pub fn is_loading(&self) -> bool { self.status == AuthStatus::Loading }

    pub fn is_authenticated(&self) -> bool { self.status == AuthStatus::Authenticated }

    /// Role identifier exactly as claimed by the user, if any.
    pub fn role(&self) -> Option<&str> { self.role.as_deref() }

    /// Which permission source produced this snapshot.
    pub fn source(&self) -> SourceKind { self.source }

    /// Effective permissions, sorted.
    pub fn permissions(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.granted.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    pub fn has_permission(&self, permission: &str) -> bool { self.granted.contains(permission) }

    /// OR over `permissions`; an empty list is never satisfied.
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().any(|x| self.has_permission(x.as_ref()))
    }

    /// AND over `permissions`; an empty list is vacuously satisfied.
    pub fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        permissions.iter().all(|x| self.has_permission(x.as_ref()))
    }

    pub fn has_role(&self, role: Role) -> bool { self.has_role_str(role.as_str()) }

    /// Exact match on the claimed role identifier, including claims that name
    /// no catalog role.
    pub fn has_role_str(&self, role: &str) -> bool { self.role.as_deref() == Some(role) }

    pub fn has_any_role(&self, roles: &[Role]) -> bool { roles.iter().any(|r| self.has_role(*r)) }

    /// `resource.action` shorthand. Under `validate_dynamic_permissions` an
    /// identifier outside the catalog is logged and denied.
    pub fn can_access(&self, resource: &str, action: &str) -> bool {
        match self.try_can_access(resource, action) {
            Ok(v) => v,
            Err(e) => {
                warn!(target: "staffgate::identity", "can_access({}, {}) rejected: {}", resource, action, e);
                false
            }
        }
    }

    /// Like `can_access` but reports catalog violations when strict mode is on.
    pub fn try_can_access(&self, resource: &str, action: &str) -> AccessResult<bool> {
        let permission = format!("{}.{}", resource, action);
        if self.policy.config.validate_dynamic_permissions {
            if !catalog::is_well_formed(&permission) { return Err(AccessError::MalformedPermission(permission)); }
            if !catalog::is_known(&permission) { return Err(AccessError::UnknownPermission(permission)); }
        }
        Ok(self.has_permission(&permission))
    }

    pub fn can_access_page(&self, path: &str) -> bool { access::can_access_page(self, path) }

    pub fn can_use_feature(&self, name: &str) -> bool { access::can_use_feature(self, name) }

    /// Page gate OR feature gate for the same key.
    pub fn can_reach(&self, key: &str) -> bool { access::can_reach(self, key) }

    pub fn is_manager(&self) -> bool { self.has_any_role(&[Role::SuperAdmin, Role::Admin, Role::HrManager]) }

    pub fn is_admin(&self) -> bool { self.has_any_role(&[Role::SuperAdmin, Role::Admin]) }

    pub fn is_super_admin(&self) -> bool { self.has_role(Role::SuperAdmin) }

    pub fn can_edit_licenses(&self) -> bool { self.has_permission(p::LICENSES_EDIT) }

    pub fn can_add_employees(&self) -> bool { self.has_permission(p::EMPLOYEES_CREATE) }

    pub fn can_approve_leaves(&self) -> bool { self.has_permission(p::LEAVES_APPROVE) }

    pub fn can_manage_users(&self) -> bool { self.has_any_permission(&[p::USERS_CREATE, p::USERS_EDIT, p::USERS_DELETE]) }

    pub fn can_access_reports(&self) -> bool { self.has_permission(p::REPORTS_VIEW) }

    pub fn can_manage_documents(&self) -> bool { self.has_any_permission(&[p::DOCUMENTS_UPLOAD, p::DOCUMENTS_DELETE]) }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod evaluator_tests;
