//! Role-based access control for the HR console: permission catalog, page and
//! feature access maps, the per-session permission evaluator, and the gating
//! consumers (route guard, conditional render gates, sidebar filtering).

pub mod catalog;
pub mod access;
pub mod identity;
pub mod gating;
pub mod config;
pub mod error;

pub use access::AccessPolicy;
pub use config::{AccessConfig, UnknownRouteDefault};
pub use error::{AccessError, AccessResult};
pub use identity::{AuthState, AuthUser, PermissionContext, PermissionEvaluator, RequestContext};
