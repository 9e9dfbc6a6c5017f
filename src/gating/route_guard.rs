use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AccessResult;
use crate::identity::{AuthStatus, RequestContext};

/// A navigable route and the gate key (page path or feature name) it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default)]
    pub required: Option<String>,
}

impl Route {
    pub fn new(path: &str) -> Self { Self { path: path.to_string(), required: None } }

    pub fn requires(mut self, key: &str) -> Self {
        self.required = Some(key.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuardOutcome {
    /// Auth still resolving: show a loading affordance, decide nothing.
    Loading,
    /// Not signed in: navigate to the login route, remembering where we came from.
    RedirectToLogin { to: String, from: String },
    Render,
    /// Signed in but not permitted: the route is entered and an access-denied
    /// view is shown in place. No redirect.
    Denied,
}

impl GuardOutcome {
    pub fn is_render(&self) -> bool { matches!(self, GuardOutcome::Render) }
}

/// Decide what a navigation to `route` should show. Each navigation is decided
/// afresh from the context's current snapshot.
pub fn guard(ctx: &RequestContext, route: &Route) -> AccessResult<GuardOutcome> {
    let ev = ctx.evaluator()?;
    let outcome = match ev.status() {
        AuthStatus::Loading => GuardOutcome::Loading,
        AuthStatus::Anonymous => GuardOutcome::RedirectToLogin {
            to: ev.policy().config.login_route.clone(),
            from: route.path.clone(),
        },
        AuthStatus::Authenticated => match route.required.as_deref() {
            None => GuardOutcome::Render,
            Some(key) if ev.can_reach(key) => GuardOutcome::Render,
            Some(_) => GuardOutcome::Denied,
        },
    };
    debug!(target: "staffgate::gating", "route guard path='{}' required={:?} request={:?} -> {:?}", route.path, route.required, ctx.request_id, outcome);
    Ok(outcome)
}

#[cfg(test)]
#[path = "route_guard_tests.rs"]
mod route_guard_tests;
