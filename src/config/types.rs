//! Configuration types for expense allocation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// The monthly cost charged for each role.
///
/// Every role must have a cost, so lookups never fail. The default table is
/// Manager 300, Developer 1000 and QA Tester 500.
///
/// # Example
///
/// ```
/// use expense_allocation::config::RoleCosts;
/// use expense_allocation::models::Role;
///
/// let costs = RoleCosts::default();
/// assert_eq!(costs.cost(Role::Developer), 1000);
///
/// let custom = RoleCosts::new(250, 1200, 600);
/// assert_eq!(custom.cost(Role::QaTester), 600);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCosts {
    /// Monthly cost of a manager.
    #[serde(rename = "Manager")]
    manager: u64,
    /// Monthly cost of a developer.
    #[serde(rename = "Developer")]
    developer: u64,
    /// Monthly cost of a QA tester.
    #[serde(rename = "QA Tester")]
    qa_tester: u64,
}

impl RoleCosts {
    /// Creates a cost table from explicit per-role values.
    pub fn new(manager: u64, developer: u64, qa_tester: u64) -> Self {
        Self {
            manager,
            developer,
            qa_tester,
        }
    }

    /// Returns the monthly cost for `role`.
    pub fn cost(&self, role: Role) -> u64 {
        match role {
            Role::Manager => self.manager,
            Role::Developer => self.developer,
            Role::QaTester => self.qa_tester,
        }
    }
}

impl Default for RoleCosts {
    fn default() -> Self {
        Self::new(300, 1000, 500)
    }
}

/// Structure of `roles.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleCostsConfig {
    /// Cost per role.
    pub costs: RoleCosts,
}

/// An employee entry in a roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEmployee {
    /// The employee's name, unique within the department.
    pub name: String,
    /// The role name (e.g. "QA Tester"). Validated when the department is built.
    pub role: String,
}

/// A reporting line in a roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterReport {
    /// The manager's name.
    pub manager: String,
    /// The name of the employee reporting to `manager`.
    pub employee: String,
}

/// A department described in `roster.yaml`.
///
/// The department head is created automatically and must not be listed
/// again under `employees`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Roster {
    /// The department name.
    pub name: String,
    /// The department head's name.
    pub head: String,
    /// Employees other than the head, in insertion order.
    #[serde(default)]
    pub employees: Vec<RosterEmployee>,
    /// Reporting lines, applied in order.
    #[serde(default)]
    pub reports: Vec<RosterReport>,
}
