//! Principal-side of access control: the auth state consumed from the login
//! layer, permission-source resolution, the evaluator snapshot, and the
//! session-scoped context that keeps it current.

mod principal;
mod resolver;
mod evaluator;
mod session;
mod request_context;

pub use principal::{AuthState, AuthStatus, AuthUser, RoleData};
pub use resolver::{resolve, PermissionSource, SourceKind};
pub use evaluator::PermissionEvaluator;
pub use session::PermissionContext;
pub use request_context::RequestContext;
