use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::catalog::permissions as p;

/// Key -> required permissions. Keys are matched exactly; there is no prefix or
/// pattern matching. A key with no entry (or an empty list) declares no requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl AccessMap {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, key: &str, required: &[&str]) -> Self {
        self.insert(key, required.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn insert(&mut self, key: &str, required: Vec<String>) { self.entries.insert(key.to_string(), required); }

    /// Required permissions for `key`; `None` when nothing is declared.
    pub fn required(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice).filter(|r| !r.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool { self.entries.contains_key(key) }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ { self.entries.keys().map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// Console routes. Pages are reachable when any one of the listed permissions is held.
pub fn builtin_pages() -> AccessMap {
    AccessMap::new()
        .with("/dashboard", &[p::DASHBOARD_VIEW])
        .with("/employees", &[p::EMPLOYEES_VIEW])
        .with("/employees/new", &[p::EMPLOYEES_CREATE])
        .with("/employees/edit", &[p::EMPLOYEES_EDIT])
        .with("/companies", &[p::COMPANIES_VIEW])
        .with("/companies/new", &[p::COMPANIES_CREATE])
        .with("/licenses", &[p::LICENSES_VIEW])
        .with("/licenses/new", &[p::LICENSES_CREATE])
        .with("/licenses/renew", &[p::LICENSES_EDIT, p::LICENSES_RENEW])
        .with("/leaves", &[p::LEAVES_VIEW])
        .with("/leaves/approvals", &[p::LEAVES_EDIT, p::LEAVES_APPROVE])
        .with("/violations", &[p::VIOLATIONS_VIEW])
        .with("/rewards", &[p::REWARDS_VIEW])
        .with("/reports", &[p::REPORTS_VIEW, p::REPORTS_EXPORT])
        .with("/documents", &[p::DOCUMENTS_VIEW])
        .with("/users", &[p::USERS_VIEW])
        .with("/roles", &[p::ROLES_MANAGE])
        .with("/settings", &[p::SETTINGS_VIEW, p::SETTINGS_EDIT])
        .with("/audit", &[p::AUDIT_VIEW])
}

/// UI capabilities narrower than a page. Features need every listed permission.
pub fn builtin_features() -> AccessMap {
    AccessMap::new()
        .with("bulk_delete_employees", &[p::EMPLOYEES_DELETE, p::EMPLOYEES_EDIT])
        .with("export_employees", &[p::EMPLOYEES_VIEW, p::EMPLOYEES_EXPORT])
        .with("license_renewal", &[p::LICENSES_EDIT, p::LICENSES_RENEW])
        .with("leave_approval", &[p::LEAVES_VIEW, p::LEAVES_APPROVE])
        .with("reward_approval", &[p::REWARDS_VIEW, p::REWARDS_APPROVE])
        .with("export_reports_pdf", &[p::REPORTS_VIEW, p::REPORTS_EXPORT])
        .with("document_management", &[p::DOCUMENTS_UPLOAD, p::DOCUMENTS_DELETE])
        .with("user_management", &[p::USERS_VIEW, p::USERS_CREATE, p::USERS_EDIT])
}
