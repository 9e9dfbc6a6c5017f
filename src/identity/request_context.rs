use std::sync::Arc;

use super::{PermissionContext, PermissionEvaluator};
use crate::error::{AccessError, AccessResult};

/// Per-request (per-navigation, per-render) handle given to gating consumers.
/// `permissions` is optional only so that a missing provider is detected at the
/// point of use instead of silently granting defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub permissions: Option<Arc<PermissionContext>>,
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn new(permissions: Arc<PermissionContext>) -> Self {
        Self { permissions: Some(permissions), request_id: None }
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    pub fn permission_context(&self) -> AccessResult<&Arc<PermissionContext>> {
        self.permissions.as_ref().ok_or(AccessError::ContextMissing)
    }

    /// Current snapshot, or `ContextMissing` when no context was wired in.
    pub fn evaluator(&self) -> AccessResult<Arc<PermissionEvaluator>> {
        Ok(self.permission_context()?.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessPolicy;

    #[test]
    fn missing_context_fails_loudly() {
        let rc = RequestContext::default();
        assert!(matches!(rc.evaluator(), Err(AccessError::ContextMissing)));
    }

    #[test]
    fn wired_context_hands_out_snapshot() {
        let pc = Arc::new(PermissionContext::new(Arc::new(AccessPolicy::default())));
        let rc = RequestContext::new(pc).with_request_id("r-1");
        assert!(rc.evaluator().unwrap().is_loading());
        assert_eq!(rc.request_id.as_deref(), Some("r-1"));
    }
}
