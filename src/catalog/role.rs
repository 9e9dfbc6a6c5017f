use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// Console roles, most privileged first.
/// The order is informational only; privilege checks are always set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    HrManager,
    HrSpecialist,
    Employee,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::HrManager,
        Role::HrSpecialist,
        Role::Employee,
        Role::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::HrManager => "hr_manager",
            Role::HrSpecialist => "hr_specialist",
            Role::Employee => "employee",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Role {
    type Err = AccessError;

    // Exact identifier match; role claims are not case-folded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}
