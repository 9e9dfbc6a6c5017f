//! Sidebar filtering. Items declare an optional gate key (page path or feature
//! name); an item is shown when `can_reach(key)` holds or it declares nothing.

use serde::{Deserialize, Serialize};

use crate::error::AccessResult;
use crate::identity::{PermissionEvaluator, RequestContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(key: &str, label: &str) -> Self {
        Self { key: key.to_string(), label: label.to_string(), path: None, permission: None, submenu: Vec::new() }
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn permission(mut self, key: &str) -> Self {
        self.permission = Some(key.to_string());
        self
    }

    pub fn submenu(mut self, items: Vec<MenuItem>) -> Self {
        self.submenu = items;
        self
    }

    /// Leaf shorthand: path doubles as the page gate key.
    fn page(key: &str, label: &str, path: &str) -> Self { Self::new(key, label).path(path).permission(path) }
}

fn visible(ev: &PermissionEvaluator, item: &MenuItem) -> bool {
    item.permission.as_deref().map_or(true, |k| ev.can_reach(k))
}

/// Filter `items` against `ev`. Each kept item's submenu is filtered with the
/// same rule, independently of the parent; a parent stays even when all of its
/// children are removed.
pub fn filter_items(ev: &PermissionEvaluator, items: &[MenuItem]) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|it| visible(ev, it))
        .map(|it| MenuItem { submenu: filter_items(ev, &it.submenu), ..it.clone() })
        .collect()
}

pub fn filter_menu(ctx: &RequestContext, items: &[MenuItem]) -> AccessResult<Vec<MenuItem>> {
    let ev = ctx.evaluator()?;
    Ok(filter_items(&ev, items))
}

/// Console sidebar.
pub fn builtin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::page("dashboard", "Dashboard", "/dashboard"),
        MenuItem::new("employees", "Employees").permission("/employees").submenu(vec![
            MenuItem::page("employees.list", "All employees", "/employees"),
            MenuItem::page("employees.new", "Add employee", "/employees/new"),
            MenuItem::new("employees.export", "Export").permission("export_employees"),
        ]),
        MenuItem::page("companies", "Companies", "/companies"),
        MenuItem::new("licenses", "Licenses").permission("/licenses").submenu(vec![
            MenuItem::page("licenses.list", "All licenses", "/licenses"),
            MenuItem::page("licenses.new", "New license", "/licenses/new"),
            MenuItem::page("licenses.renew", "Renewals", "/licenses/renew"),
        ]),
        MenuItem::new("leaves", "Leaves").permission("/leaves").submenu(vec![
            MenuItem::page("leaves.list", "Requests", "/leaves"),
            MenuItem::page("leaves.approvals", "Approvals", "/leaves/approvals"),
        ]),
        MenuItem::page("violations", "Violations", "/violations"),
        MenuItem::page("rewards", "Rewards", "/rewards"),
        MenuItem::page("reports", "Reports", "/reports"),
        MenuItem::page("documents", "Documents", "/documents"),
        MenuItem::new("admin", "Administration").submenu(vec![
            MenuItem::page("admin.users", "Users", "/users"),
            MenuItem::page("admin.roles", "Roles", "/roles"),
            MenuItem::page("admin.settings", "Settings", "/settings"),
            MenuItem::page("admin.audit", "Audit log", "/audit"),
        ]),
        MenuItem::new("profile", "My profile").path("/profile"),
    ]
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
