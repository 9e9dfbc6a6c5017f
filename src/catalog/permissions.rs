//! Permission identifiers in `resource.action` form.
//! Every identifier used by the console is declared here once and listed in
//! `ALL_PERMISSIONS`; `super_admin` is defined as that whole list.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DASHBOARD_VIEW: &str = "dashboard.view";

pub const EMPLOYEES_VIEW: &str = "employees.view";
pub const EMPLOYEES_CREATE: &str = "employees.create";
pub const EMPLOYEES_EDIT: &str = "employees.edit";
pub const EMPLOYEES_DELETE: &str = "employees.delete";
pub const EMPLOYEES_EXPORT: &str = "employees.export";

pub const COMPANIES_VIEW: &str = "companies.view";
pub const COMPANIES_CREATE: &str = "companies.create";
pub const COMPANIES_EDIT: &str = "companies.edit";
pub const COMPANIES_DELETE: &str = "companies.delete";

pub const LICENSES_VIEW: &str = "licenses.view";
pub const LICENSES_CREATE: &str = "licenses.create";
pub const LICENSES_EDIT: &str = "licenses.edit";
pub const LICENSES_DELETE: &str = "licenses.delete";
pub const LICENSES_RENEW: &str = "licenses.renew";

pub const LEAVES_VIEW: &str = "leaves.view";
pub const LEAVES_CREATE: &str = "leaves.create";
pub const LEAVES_EDIT: &str = "leaves.edit";
pub const LEAVES_DELETE: &str = "leaves.delete";
pub const LEAVES_APPROVE: &str = "leaves.approve";

pub const VIOLATIONS_VIEW: &str = "violations.view";
pub const VIOLATIONS_CREATE: &str = "violations.create";
pub const VIOLATIONS_EDIT: &str = "violations.edit";
pub const VIOLATIONS_DELETE: &str = "violations.delete";

pub const REWARDS_VIEW: &str = "rewards.view";
pub const REWARDS_CREATE: &str = "rewards.create";
pub const REWARDS_EDIT: &str = "rewards.edit";
pub const REWARDS_DELETE: &str = "rewards.delete";
pub const REWARDS_APPROVE: &str = "rewards.approve";

pub const REPORTS_VIEW: &str = "reports.view";
pub const REPORTS_EXPORT: &str = "reports.export";

pub const DOCUMENTS_VIEW: &str = "documents.view";
pub const DOCUMENTS_UPLOAD: &str = "documents.upload";
pub const DOCUMENTS_DELETE: &str = "documents.delete";

pub const USERS_VIEW: &str = "users.view";
pub const USERS_CREATE: &str = "users.create";
pub const USERS_EDIT: &str = "users.edit";
pub const USERS_DELETE: &str = "users.delete";

pub const ROLES_MANAGE: &str = "roles.manage";

pub const SETTINGS_VIEW: &str = "settings.view";
pub const SETTINGS_EDIT: &str = "settings.edit";

pub const AUDIT_VIEW: &str = "audit.view";

/// The full catalog in declaration order.
pub const ALL_PERMISSIONS: &[&str] = &[
    DASHBOARD_VIEW,
    EMPLOYEES_VIEW, EMPLOYEES_CREATE, EMPLOYEES_EDIT, EMPLOYEES_DELETE, EMPLOYEES_EXPORT,
    COMPANIES_VIEW, COMPANIES_CREATE, COMPANIES_EDIT, COMPANIES_DELETE,
    LICENSES_VIEW, LICENSES_CREATE, LICENSES_EDIT, LICENSES_DELETE, LICENSES_RENEW,
    LEAVES_VIEW, LEAVES_CREATE, LEAVES_EDIT, LEAVES_DELETE, LEAVES_APPROVE,
    VIOLATIONS_VIEW, VIOLATIONS_CREATE, VIOLATIONS_EDIT, VIOLATIONS_DELETE,
    REWARDS_VIEW, REWARDS_CREATE, REWARDS_EDIT, REWARDS_DELETE, REWARDS_APPROVE,
    REPORTS_VIEW, REPORTS_EXPORT,
    DOCUMENTS_VIEW, DOCUMENTS_UPLOAD, DOCUMENTS_DELETE,
    USERS_VIEW, USERS_CREATE, USERS_EDIT, USERS_DELETE,
    ROLES_MANAGE,
    SETTINGS_VIEW, SETTINGS_EDIT,
    AUDIT_VIEW,
];

static WELL_FORMED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*\.[a-z][a-z0-9_]*$").unwrap_or_else(|_| Regex::new("^$").unwrap())
});

/// True when `p` is declared in the catalog.
pub fn is_known(p: &str) -> bool { ALL_PERMISSIONS.contains(&p) }

/// True when `p` has the `resource.action` shape (lowercase, one dot).
pub fn is_well_formed(p: &str) -> bool { WELL_FORMED.is_match(p) }

#[cfg(test)]
#[path = "permissions_tests.rs"]
mod permissions_tests;
