//! Access-layer settings: unknown-route policy, strict permission construction,
//! and the login route used by the route guard.

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, AccessResult};

pub const ENV_UNKNOWN_ROUTE_DEFAULT: &str = "STAFFGATE_UNKNOWN_ROUTE_DEFAULT";
pub const ENV_VALIDATE_PERMISSIONS: &str = "STAFFGATE_VALIDATE_PERMISSIONS";
pub const ENV_LOGIN_ROUTE: &str = "STAFFGATE_LOGIN_ROUTE";

/// Outcome for a page or feature that declares no requirement.
/// `Allow` is the console's historical behaviour and stays the default; `Deny`
/// is the fail-closed alternative pending product-owner review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRouteDefault {
    #[default]
    Allow,
    Deny,
}

impl UnknownRouteDefault {
    pub fn allows(self) -> bool { matches!(self, UnknownRouteDefault::Allow) }

    pub fn parse(s: &str) -> AccessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(UnknownRouteDefault::Allow),
            "deny" => Ok(UnknownRouteDefault::Deny),
            other => Err(AccessError::Config(format!("unknownRouteDefault must be 'allow' or 'deny', got '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessConfig {
    pub unknown_route_default: UnknownRouteDefault,
    /// When set, `can_access(resource, action)` refuses identifiers outside the catalog.
    pub validate_dynamic_permissions: bool,
    pub login_route: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            unknown_route_default: UnknownRouteDefault::Allow,
            validate_dynamic_permissions: false,
            login_route: "/login".to_string(),
        }
    }
}

fn parse_bool(key: &str, v: &str) -> AccessResult<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AccessError::Config(format!("{} expects a boolean, got '{}'", key, other))),
    }
}

impl AccessConfig {
    /// Defaults overridden by `STAFFGATE_*` environment variables.
    pub fn from_env() -> AccessResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as `from_env` but reading through `lookup`, so callers can supply
    /// any key/value source.
    pub fn from_lookup<F>(lookup: F) -> AccessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = AccessConfig::default();
        if let Some(v) = lookup(ENV_UNKNOWN_ROUTE_DEFAULT) { cfg.unknown_route_default = UnknownRouteDefault::parse(&v)?; }
        if let Some(v) = lookup(ENV_VALIDATE_PERMISSIONS) { cfg.validate_dynamic_permissions = parse_bool(ENV_VALIDATE_PERMISSIONS, &v)?; }
        if let Some(v) = lookup(ENV_LOGIN_ROUTE) { cfg.login_route = v; }
        cfg.check()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> AccessResult<Self> {
        let cfg: AccessConfig = serde_json::from_str(s)?;
        cfg.check()?;
        Ok(cfg)
    }

    pub fn check(&self) -> AccessResult<()> {
        if !self.login_route.starts_with('/') {
            return Err(AccessError::Config(format!("loginRoute must be an absolute path, got '{}'", self.login_route)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
