use std::path::Path;
use serde::Deserialize;
use tracing::info;

use super::map::{builtin_features, builtin_pages, AccessMap};
use crate::catalog::{self, RolePermissionMap};
use crate::config::AccessConfig;
use crate::error::{AccessError, AccessResult};

/// Everything the evaluator and gates consult: role defaults, page and feature
/// maps, and the policy flags. Loaded once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPolicy {
    pub config: AccessConfig,
    pub roles: RolePermissionMap,
    pub pages: AccessMap,
    pub features: AccessMap,
}

/// On-disk shape. Omitted sections fall back to the built-ins.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(default)]
    config: Option<AccessConfig>,
    #[serde(default)]
    roles: Option<RolePermissionMap>,
    #[serde(default)]
    pages: Option<AccessMap>,
    #[serde(default)]
    features: Option<AccessMap>,
}

impl Default for AccessPolicy {
    fn default() -> Self { Self::builtin(AccessConfig::default()) }
}

impl AccessPolicy {
    pub fn builtin(config: AccessConfig) -> Self {
        Self {
            config,
            roles: RolePermissionMap::builtin().clone(),
            pages: builtin_pages(),
            features: builtin_features(),
        }
    }

    pub fn from_json_str(s: &str) -> AccessResult<Self> { Self::from_json_str_with(s, AccessConfig::default()) }

    /// Parse a policy file; `base` is used when the file has no `config` section.
    pub fn from_json_str_with(s: &str, base: AccessConfig) -> AccessResult<Self> {
        let file: PolicyFile = serde_json::from_str(s)?;
        let policy = Self {
            config: file.config.unwrap_or(base),
            roles: file.roles.unwrap_or_else(|| RolePermissionMap::builtin().clone()),
            pages: file.pages.unwrap_or_else(builtin_pages),
            features: file.features.unwrap_or_else(builtin_features),
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_file(path: &Path) -> AccessResult<Self> { Self::from_file_with(path, AccessConfig::default()) }

    /// Load a policy file, falling back to `base` for an omitted `config` section.
    pub fn from_file_with(path: &Path, base: AccessConfig) -> AccessResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let policy = Self::from_json_str_with(&text, base)?;
        info!(target: "staffgate::access", "access policy loaded from '{}': pages={} features={}", path.display(), policy.pages.len(), policy.features.len());
        Ok(policy)
    }

    /// Role invariants plus: every map entry names a well-formed catalog permission.
    pub fn validate(&self) -> AccessResult<()> {
        self.config.check()?;
        self.roles.validate()?;
        for (label, map) in [("page", &self.pages), ("feature", &self.features)] {
            for (key, required) in map.iter() {
                for r in required {
                    if !catalog::is_well_formed(r) {
                        return Err(AccessError::MalformedPermission(format!("{} (required by {} '{}')", r, label, key)));
                    }
                    if !catalog::is_known(r) {
                        return Err(AccessError::UnknownPermission(format!("{} (required by {} '{}')", r, label, key)));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
