//! Employee roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmployeeError;

/// The kind of work an employee does.
///
/// The set of roles is closed. Each role has a monthly cost that is looked up
/// in [`RoleCosts`](crate::config::RoleCosts).
///
/// # Example
///
/// ```
/// use expense_allocation::models::Role;
///
/// let role: Role = "QA Tester".parse().unwrap();
/// assert_eq!(role, Role::QaTester);
/// assert_eq!(role.to_string(), "QA Tester");
/// assert!("President".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Manages other employees. The only role that can receive reports.
    Manager,
    /// Software developer.
    Developer,
    /// Quality assurance tester.
    #[serde(rename = "QA Tester")]
    QaTester,
}

impl Role {
    /// Every known role.
    pub const ALL: [Role; 3] = [Role::Manager, Role::Developer, Role::QaTester];

    /// Returns the display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::QaTester => "QA Tester",
        }
    }

    /// Returns true if employees of this role may have direct reports.
    pub fn is_manager(&self) -> bool {
        *self == Role::Manager
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = EmployeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| EmployeeError::UnknownRole {
                role: s.to_string(),
            })
    }
}
