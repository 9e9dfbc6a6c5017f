//! Consumers of the access layer: route guarding, conditional rendering, and
//! navigation filtering. Each resolves its evaluator through a
//! `RequestContext` and fails with `ContextMissing` when none is wired in.

mod route_guard;
mod criterion;
mod navigation;

pub use route_guard::{guard, GuardOutcome, Route};
pub use criterion::{AllOf, Always, AnyOf, Criterion, Gate, GateBuilder, PermissionCriterion, RoleCriterion};
pub use navigation::{builtin_menu, filter_items, filter_menu, MenuItem};
