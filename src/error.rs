//! Error model for the access layer.
//! Permission evaluation itself never fails; these errors cover structural misuse
//! (no permission context wired in), policy/config loading, and strict-mode checks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    /// A gating consumer was used without a `PermissionContext` in its request context.
    #[error("permission context missing: consumers must run under an initialized PermissionContext")]
    ContextMissing,
    #[error("unknown permission: {0}")]
    UnknownPermission(String),
    #[error("malformed permission identifier: {0}")]
    MalformedPermission(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("invalid access policy: {0}")]
    InvalidPolicy(String),
    #[error("config: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AccessError {
    /// Short stable code for logs and audit output.
    pub fn code_str(&self) -> &'static str {
        match self {
            AccessError::ContextMissing => "context_missing",
            AccessError::UnknownPermission(_) => "unknown_permission",
            AccessError::MalformedPermission(_) => "malformed_permission",
            AccessError::UnknownRole(_) => "unknown_role",
            AccessError::InvalidPolicy(_) => "invalid_policy",
            AccessError::Config(_) => "config",
            AccessError::Io(_) => "io",
            AccessError::Json(_) => "json",
        }
    }
}

pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
