//! Where a principal's effective permissions come from.
//! Sources are tried in a fixed order and exactly one wins; they are never merged.

use std::collections::HashSet;
use std::fmt;
use serde::Serialize;
use tracing::warn;

use super::principal::AuthUser;
use crate::catalog::{Role, RolePermissionMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSource {
    /// Per-user grant list (only when non-empty).
    Explicit(Vec<String>),
    /// List embedded in the role-data payload (wins whenever present, even empty).
    RoleData(Vec<String>),
    /// Defaults for a recognised role.
    RoleDefault(Role),
    /// Nothing usable: no user, or an unrecognised role with no lists.
    Unresolved,
}

/// Which `PermissionSource` variant won, without its payload. Kept on the
/// evaluator snapshot for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Explicit,
    RoleData,
    RoleDefault(Role),
    Unresolved,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Explicit => "explicit",
            SourceKind::RoleData => "role_data",
            SourceKind::RoleDefault(_) => "role_default",
            SourceKind::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl PermissionSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            PermissionSource::Explicit(_) => SourceKind::Explicit,
            PermissionSource::RoleData(_) => SourceKind::RoleData,
            PermissionSource::RoleDefault(r) => SourceKind::RoleDefault(*r),
            PermissionSource::Unresolved => SourceKind::Unresolved,
        }
    }

    pub fn materialize(&self, roles: &RolePermissionMap) -> HashSet<String> {
        match self {
            PermissionSource::Explicit(list) | PermissionSource::RoleData(list) => list.iter().cloned().collect(),
            PermissionSource::RoleDefault(r) => roles.permissions_for(*r).map(str::to_string).collect(),
            PermissionSource::Unresolved => HashSet::new(),
        }
    }
}

pub fn resolve(user: Option<&AuthUser>) -> PermissionSource {
    let Some(user) = user else { return PermissionSource::Unresolved; };
    if let Some(list) = user.permissions.as_ref().filter(|l| !l.is_empty()) {
        return PermissionSource::Explicit(list.clone());
    }
    if let Some(list) = user.role_data.as_ref().and_then(|d| d.permissions.as_ref()) {
        return PermissionSource::RoleData(list.clone());
    }
    match user.role.as_deref() {
        Some(name) => match name.parse::<Role>() {
            Ok(r) => PermissionSource::RoleDefault(r),
            Err(_) => {
                warn!(target: "staffgate::identity", "unrecognised role '{}' for user {:?}; no default permissions", name, user.id);
                PermissionSource::Unresolved
            }
        },
        None => PermissionSource::Unresolved,
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
