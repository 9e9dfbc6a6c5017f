//! Role -> default permission bundles.

use std::collections::{BTreeMap, BTreeSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::permissions::{self as p, ALL_PERMISSIONS};
use super::Role;
use crate::error::{AccessError, AccessResult};

/// Total function Role -> set of permissions.
/// Maintenance invariants (checked by `validate`): every role has a non-empty
/// entry and `super_admin` holds a superset of every other role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePermissionMap {
    roles: BTreeMap<Role, BTreeSet<String>>,
}

static BUILTIN: Lazy<RolePermissionMap> = Lazy::new(RolePermissionMap::build_builtin);

fn set(items: &[&str]) -> BTreeSet<String> { items.iter().map(|s| s.to_string()).collect() }

impl RolePermissionMap {
    /// The console's default bundles.
    pub fn builtin() -> &'static RolePermissionMap { &BUILTIN }

    fn build_builtin() -> RolePermissionMap {
        let mut roles = BTreeMap::new();
        roles.insert(Role::SuperAdmin, set(ALL_PERMISSIONS));
        // Everything except role administration and system settings writes.
        roles.insert(Role::Admin, ALL_PERMISSIONS
            .iter()
            .filter(|x| **x != p::ROLES_MANAGE && **x != p::SETTINGS_EDIT)
            .map(|s| s.to_string())
            .collect());
        roles.insert(Role::HrManager, set(&[
            p::DASHBOARD_VIEW,
            p::EMPLOYEES_VIEW, p::EMPLOYEES_CREATE, p::EMPLOYEES_EDIT, p::EMPLOYEES_EXPORT,
            p::COMPANIES_VIEW, p::COMPANIES_EDIT,
            p::LICENSES_VIEW, p::LICENSES_CREATE, p::LICENSES_EDIT, p::LICENSES_RENEW,
            p::LEAVES_VIEW, p::LEAVES_CREATE, p::LEAVES_EDIT, p::LEAVES_DELETE, p::LEAVES_APPROVE,
            p::VIOLATIONS_VIEW, p::VIOLATIONS_CREATE, p::VIOLATIONS_EDIT, p::VIOLATIONS_DELETE,
            p::REWARDS_VIEW, p::REWARDS_CREATE, p::REWARDS_EDIT, p::REWARDS_DELETE, p::REWARDS_APPROVE,
            p::REPORTS_VIEW, p::REPORTS_EXPORT,
            p::DOCUMENTS_VIEW, p::DOCUMENTS_UPLOAD,
            p::USERS_VIEW,
        ]));
        roles.insert(Role::HrSpecialist, set(&[
            p::DASHBOARD_VIEW,
            p::EMPLOYEES_VIEW, p::EMPLOYEES_CREATE, p::EMPLOYEES_EDIT,
            p::COMPANIES_VIEW,
            p::LICENSES_VIEW, p::LICENSES_CREATE, p::LICENSES_EDIT,
            p::LEAVES_VIEW, p::LEAVES_CREATE, p::LEAVES_EDIT,
            p::VIOLATIONS_VIEW, p::VIOLATIONS_CREATE,
            p::REWARDS_VIEW,
            p::REPORTS_VIEW,
            p::DOCUMENTS_VIEW, p::DOCUMENTS_UPLOAD,
        ]));
        roles.insert(Role::Employee, set(&[
            p::DASHBOARD_VIEW,
            p::LEAVES_VIEW, p::LEAVES_CREATE,
            p::REWARDS_VIEW,
            p::DOCUMENTS_VIEW,
        ]));
        roles.insert(Role::Viewer, set(&[
            p::DASHBOARD_VIEW,
            p::EMPLOYEES_VIEW, p::COMPANIES_VIEW, p::LICENSES_VIEW, p::LEAVES_VIEW,
            p::VIOLATIONS_VIEW, p::REWARDS_VIEW, p::REPORTS_VIEW, p::DOCUMENTS_VIEW,
        ]));
        RolePermissionMap { roles }
    }

    /// Default permissions for `role`; empty when the role has no entry.
    pub fn permissions_for(&self, role: Role) -> impl Iterator<Item = &str> + '_ {
        self.roles.get(&role).into_iter().flat_map(|s| s.iter().map(String::as_str))
    }

    pub fn grants(&self, role: Role, permission: &str) -> bool {
        self.roles.get(&role).is_some_and(|s| s.contains(permission))
    }

    pub fn len_for(&self, role: Role) -> usize { self.roles.get(&role).map_or(0, BTreeSet::len) }

    /// Check the maintenance invariants and that every entry is a catalog permission.
    pub fn validate(&self) -> AccessResult<()> {
        for r in Role::ALL {
            match self.roles.get(&r) {
                None => return Err(AccessError::InvalidPolicy(format!("role '{}' has no permission entry", r))),
                Some(s) if s.is_empty() => return Err(AccessError::InvalidPolicy(format!("role '{}' has an empty permission set", r))),
                Some(s) => {
                    if let Some(bad) = s.iter().find(|x| !super::is_known(x)) {
                        return Err(AccessError::UnknownPermission(format!("{} (granted to '{}')", bad, r)));
                    }
                }
            }
        }
        let top = self.roles.get(&Role::SuperAdmin).cloned().unwrap_or_default();
        let missing: Vec<&str> = ALL_PERMISSIONS.iter().copied().filter(|x| !top.contains(*x)).collect();
        if !missing.is_empty() {
            return Err(AccessError::InvalidPolicy(format!("super_admin is missing catalog permissions: {}", missing.join(", "))));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "role_map_tests.rs"]
mod role_map_tests;
