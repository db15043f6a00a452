//! Employee model.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::config::RoleCosts;
use crate::error::EmployeeError;

use super::Role;

/// An employee of a department.
///
/// The role and name never change after construction. The allocation is
/// looked up from the cost table once, when the employee is created.
///
/// Two employees are equal when their names match, whatever their roles.
/// Hashing uses only the name as well.
///
/// # Examples
///
/// ```
/// use expense_allocation::models::{Employee, Role};
///
/// let tom = Employee::new(Role::Manager, "Tom");
/// assert!(tom.is_manager());
/// assert_eq!(tom.allocation(), 300);
/// assert_eq!(tom.to_string(), "Manager Tom");
///
/// let joe = Employee::from_kind("QA Tester", "Joe").unwrap();
/// assert_eq!(joe.allocation(), 500);
///
/// assert!(Employee::from_kind("President", "Ann").is_err());
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    role: Role,
    name: String,
    allocation: u64,
}

impl Employee {
    /// Creates an employee priced with the default [`RoleCosts`].
    pub fn new(role: Role, name: impl Into<String>) -> Self {
        Self::with_costs(role, name, &RoleCosts::default())
    }

    /// Creates an employee priced with the given cost table.
    pub fn with_costs(role: Role, name: impl Into<String>, costs: &RoleCosts) -> Self {
        Self {
            role,
            name: name.into(),
            allocation: costs.cost(role),
        }
    }

    /// Creates an employee from a role name such as `"Developer"`.
    ///
    /// Returns [`EmployeeError::UnknownRole`] if `kind` is not a known role.
    pub fn from_kind(kind: &str, name: impl Into<String>) -> Result<Self, EmployeeError> {
        Ok(Self::new(kind.parse()?, name))
    }

    /// Returns the employee's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the employee is a manager.
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }

    /// Returns the employee's monthly allocation.
    pub fn allocation(&self) -> u64 {
        self.allocation
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.role, self.name)
    }
}
