//! Role x key access matrix, for reviewing a policy (in particular which
//! routes are open only because nothing was declared for them).

use std::sync::Arc;
use serde::Serialize;

use super::gates::{requirement, GateKind};
use super::AccessPolicy;
use crate::catalog::Role;
use crate::identity::{AuthState, AuthUser, PermissionEvaluator};

#[derive(Debug, Clone, Serialize)]
pub struct AuditCell {
    pub role: Role,
    /// The key's own gate (page gate for pages, feature gate for features).
    pub gate: bool,
    /// What the route guard and sidebar decide: page gate OR feature gate.
    pub reach: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
    pub kind: &'static str,
    pub key: String,
    pub required: Vec<String>,
    pub cells: Vec<AuditCell>,
}

impl AuditRow {
    /// Roles for which the guard opens although the key's own gate is closed.
    pub fn opened_by_default(&self) -> Vec<Role> {
        self.cells.iter().filter(|c| c.reach && !c.gate).map(|c| c.role).collect()
    }
}

fn evaluator_for(policy: &Arc<AccessPolicy>, role: Role) -> PermissionEvaluator {
    PermissionEvaluator::from_auth(policy.clone(), &AuthState::signed_in(AuthUser::with_role(role.as_str())))
}

pub fn audit(policy: &Arc<AccessPolicy>) -> Vec<AuditRow> {
    let evs: Vec<(Role, PermissionEvaluator)> = Role::ALL.iter().map(|r| (*r, evaluator_for(policy, *r))).collect();
    let mut rows = Vec::new();
    for (kind, map) in [(GateKind::Page, &policy.pages), (GateKind::Feature, &policy.features)] {
        for key in map.keys() {
            let required = requirement(policy, kind, key).map(<[String]>::to_vec).unwrap_or_default();
            let cells = evs
                .iter()
                .map(|(r, ev)| {
                    let gate = match kind {
                        GateKind::Page => ev.can_access_page(key),
                        GateKind::Feature => ev.can_use_feature(key),
                    };
                    AuditCell { role: *r, gate, reach: ev.can_reach(key) }
                })
                .collect();
            rows.push(AuditRow { kind: kind.as_str(), key: key.to_string(), required, cells });
        }
    }
    rows
}

fn mark(c: &AuditCell) -> &'static str {
    match (c.gate, c.reach) {
        (true, _) => "Y",
        (false, true) => "y*",
        (false, false) => "-",
    }
}

/// Plain-text matrix. `y*` marks a guard that opens only through the
/// unknown-route default.
pub fn render_text(policy: &AccessPolicy, rows: &[AuditRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("ACCESS AUDIT (unknown routes: {:?})\n", policy.config.unknown_route_default));
    let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0).max(8);
    out.push_str(&format!("{:<8} {:<width$}", "kind", "key", width = width));
    for r in Role::ALL { out.push_str(&format!(" {:>13}", r.as_str())); }
    out.push('\n');
    for row in rows {
        out.push_str(&format!("{:<8} {:<width$}", row.kind, row.key, width = width));
        for c in &row.cells { out.push_str(&format!(" {:>13}", mark(c))); }
        out.push('\n');
    }
    let flagged: Vec<&AuditRow> = rows.iter().filter(|r| !r.opened_by_default().is_empty()).collect();
    if !flagged.is_empty() {
        out.push_str(&format!("{} key(s) open to roles lacking the declared permissions (y*)\n", flagged.len()));
    }
    out
}

pub fn render_json(rows: &[AuditRow]) -> serde_json::Result<String> { serde_json::to_string_pretty(rows) }
