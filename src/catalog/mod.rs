//! Permission catalog: the closed set of permission identifiers, the roles, and
//! the default role -> permission bundles.
//! Pure data; evaluation lives in `identity` and `access`.

pub mod permissions;
mod role;
mod role_map;

pub use permissions::{ALL_PERMISSIONS, is_known, is_well_formed};
pub use role::Role;
pub use role_map::RolePermissionMap;
