//! Declarative render gates.
//!
//! A `Gate` wraps a criterion tree and decides whether some piece of UI is shown
//! or replaced with a fallback. `GateBuilder` mirrors the usual props
//! (`permission`, `permissions` + `require_all`, `role`/`roles`); every supplied
//! prop must hold. Repeated `permission` calls accumulate, each one required.

use std::fmt::Debug;

use crate::catalog::Role;
use crate::error::AccessResult;
use crate::identity::{PermissionEvaluator, RequestContext};

pub trait Criterion: Debug + Send + Sync {
    fn evaluate(&self, ev: &PermissionEvaluator) -> bool;
}

/// Always passes. What a gate with no props evaluates to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Criterion for Always {
    fn evaluate(&self, _ev: &PermissionEvaluator) -> bool { true }
}

/// Permission list with all-of or any-of semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCriterion {
    pub permissions: Vec<String>,
    pub require_all: bool,
}

impl PermissionCriterion {
    pub fn one(permission: &str) -> Self { Self { permissions: vec![permission.to_string()], require_all: true } }

    pub fn all<S: Into<String>>(permissions: impl IntoIterator<Item = S>) -> Self {
        Self { permissions: permissions.into_iter().map(Into::into).collect(), require_all: true }
    }

    pub fn any<S: Into<String>>(permissions: impl IntoIterator<Item = S>) -> Self {
        Self { permissions: permissions.into_iter().map(Into::into).collect(), require_all: false }
    }
}

impl Criterion for PermissionCriterion {
    fn evaluate(&self, ev: &PermissionEvaluator) -> bool {
        if self.require_all { ev.has_all_permissions(&self.permissions) } else { ev.has_any_permission(&self.permissions) }
    }
}

/// Passes when the principal's role is one of `roles`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCriterion {
    pub roles: Vec<Role>,
}

impl Criterion for RoleCriterion {
    fn evaluate(&self, ev: &PermissionEvaluator) -> bool { ev.has_any_role(&self.roles) }
}

#[derive(Debug, Default)]
pub struct AnyOf(pub Vec<Box<dyn Criterion>>);

impl Criterion for AnyOf {
    fn evaluate(&self, ev: &PermissionEvaluator) -> bool { self.0.iter().any(|c| c.evaluate(ev)) }
}

#[derive(Debug, Default)]
pub struct AllOf(pub Vec<Box<dyn Criterion>>);

impl Criterion for AllOf {
    fn evaluate(&self, ev: &PermissionEvaluator) -> bool { self.0.iter().all(|c| c.evaluate(ev)) }
}

#[derive(Debug)]
pub struct Gate {
    criterion: Box<dyn Criterion>,
}

impl Gate {
    pub fn new(criterion: impl Criterion + 'static) -> Self { Self { criterion: Box::new(criterion) } }

    pub fn builder() -> GateBuilder { GateBuilder::default() }

    pub fn allows(&self, ev: &PermissionEvaluator) -> bool { self.criterion.evaluate(ev) }

    /// `children` when the criterion holds against the request's current
    /// snapshot, else `fallback` (which may be nothing).
    pub fn render<T>(&self, ctx: &RequestContext, children: T, fallback: Option<T>) -> AccessResult<Option<T>> {
        let ev = ctx.evaluator()?;
        Ok(if self.allows(&ev) { Some(children) } else { fallback })
    }
}

#[derive(Debug, Clone)]
pub struct GateBuilder {
    required: Vec<String>,
    permissions: Vec<String>,
    require_all: bool,
    roles: Vec<Role>,
}

impl Default for GateBuilder {
    fn default() -> Self { Self { required: Vec::new(), permissions: Vec::new(), require_all: true, roles: Vec::new() } }
}

impl GateBuilder {
    /// Require `p`. Unaffected by `require_all`.
    pub fn permission(mut self, p: &str) -> Self {
        self.required.push(p.to_string());
        self
    }

    pub fn permissions<S: Into<String>>(mut self, ps: impl IntoIterator<Item = S>) -> Self {
        self.permissions.extend(ps.into_iter().map(Into::into));
        self
    }

    /// Applies to the `permissions` list only. Defaults to true.
    pub fn require_all(mut self, yes: bool) -> Self {
        self.require_all = yes;
        self
    }

    pub fn role(mut self, r: Role) -> Self {
        self.roles.push(r);
        self
    }

    pub fn roles(mut self, rs: &[Role]) -> Self {
        self.roles.extend_from_slice(rs);
        self
    }

    pub fn build(self) -> Gate {
        let mut parts: Vec<Box<dyn Criterion>> = Vec::new();
        if !self.required.is_empty() { parts.push(Box::new(PermissionCriterion::all(self.required))); }
        if !self.permissions.is_empty() {
            parts.push(Box::new(PermissionCriterion { permissions: self.permissions, require_all: self.require_all }));
        }
        if !self.roles.is_empty() { parts.push(Box::new(RoleCriterion { roles: self.roles })); }
        match parts.len() {
            0 => Gate::new(Always),
            1 => Gate { criterion: parts.remove(0) },
            _ => Gate::new(AllOf(parts)),
        }
    }
}

#[cfg(test)]
#[path = "criterion_tests.rs"]
mod criterion_tests;
