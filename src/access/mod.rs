//! Access maps (page path / feature name -> required permissions), the policy
//! bundle that carries them, and the page/feature gates evaluated against a
//! principal.

mod map;
mod policy;
pub mod gates;
pub mod audit;

pub use map::{AccessMap, builtin_features, builtin_pages};
pub use policy::AccessPolicy;
pub use gates::{can_access_page, can_use_feature, can_reach, GateKind};
