//! Session-scoped permission state.
//!
//! A `PermissionContext` is constructed explicitly by the composition root and
//! shared (via `Arc`) with whatever renders or routes. It owns the current
//! evaluator snapshot; the only writers are `sync` (driven by auth-state
//! changes) and `logout`.

use std::sync::Arc;
use parking_lot::RwLock;
use tracing::debug;

use super::evaluator::PermissionEvaluator;
use super::principal::{AuthState, AuthUser};
use crate::access::AccessPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SyncKey {
    user: Option<AuthUser>,
    loading: bool,
    authenticated: bool,
}

impl SyncKey {
    fn of(auth: &AuthState) -> Self {
        Self { user: auth.user.clone(), loading: auth.is_loading, authenticated: auth.is_authenticated }
    }
}

#[derive(Debug)]
struct ContextState {
    last: Option<SyncKey>,
    current: Arc<PermissionEvaluator>,
    recomputes: u64,
}

#[derive(Debug)]
pub struct PermissionContext {
    policy: Arc<AccessPolicy>,
    state: RwLock<ContextState>,
}

impl PermissionContext {
    /// Starts in the loading state: nothing is granted until the first `sync`.
    pub fn new(policy: Arc<AccessPolicy>) -> Self {
        let current = Arc::new(PermissionEvaluator::loading(policy.clone()));
        Self { policy, state: RwLock::new(ContextState { last: None, current, recomputes: 0 }) }
    }

    pub fn policy(&self) -> &Arc<AccessPolicy> { &self.policy }

    /// Snapshot for the current render/request. Stays valid (and unchanged)
    /// even if a later `sync` replaces the context's snapshot.
    pub fn current(&self) -> Arc<PermissionEvaluator> { self.state.read().current.clone() }

    /// Feed the latest auth state. Recomputes only when the user, loading flag,
    /// or authenticated flag differ from the last sync. Returns whether the
    /// snapshot was replaced.
    pub fn sync(&self, auth: &AuthState) -> bool {
        let key = SyncKey::of(auth);
        let mut st = self.state.write();
        if st.last.as_ref() == Some(&key) { return false; }
        let next = PermissionEvaluator::from_auth(self.policy.clone(), auth);
        debug!(
            target: "staffgate::identity",
            "permission snapshot recomputed: status={:?} role={:?} source={} granted={}",
            next.status(), next.role(), next.source(), next.permissions().len()
        );
        st.current = Arc::new(next);
        st.last = Some(key);
        st.recomputes += 1;
        true
    }

    /// Drop the session's permissions immediately.
    pub fn logout(&self) {
        let anon = AuthState::anonymous();
        let mut st = self.state.write();
        st.current = Arc::new(PermissionEvaluator::anonymous(self.policy.clone()));
        st.last = Some(SyncKey::of(&anon));
        st.recomputes += 1;
        debug!(target: "staffgate::identity", "permission snapshot reset on logout");
    }

    /// Number of snapshot replacements so far.
    pub fn recompute_count(&self) -> u64 { self.state.read().recomputes }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
