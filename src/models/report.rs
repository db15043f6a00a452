//! Reporting relationships.

use std::fmt;

use crate::error::ReportError;

use super::Employee;

/// A validated "employee reports to manager" edge.
///
/// Building a report only checks the two employees against each other.
/// Membership and the single-manager rule are checked when the report is
/// added to a [`Department`](crate::department::Department).
///
/// # Example
///
/// ```
/// use expense_allocation::models::{Employee, Report, Role};
///
/// let tom = Employee::new(Role::Manager, "Tom");
/// let kelby = Employee::new(Role::Developer, "Kelby");
///
/// let report = Report::new(&tom, &kelby).unwrap();
/// assert_eq!(report.to_string(), "Manager Tom->Developer Kelby");
///
/// assert!(Report::new(&kelby, &tom).is_err());
/// assert!(Report::new(&tom, &tom).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    manager: Employee,
    employee: Employee,
}

impl Report {
    /// Creates a report of `employee` to `manager`.
    ///
    /// # Errors
    ///
    /// - [`ReportError::SelfReport`] if both are the same employee
    /// - [`ReportError::ManagerRequired`] if `manager` is not a manager
    pub fn new(manager: &Employee, employee: &Employee) -> Result<Self, ReportError> {
        if manager == employee {
            return Err(ReportError::SelfReport {
                name: employee.name().to_string(),
            });
        }
        if !manager.is_manager() {
            return Err(ReportError::ManagerRequired {
                manager: manager.name().to_string(),
                role: manager.role().to_string(),
            });
        }
        Ok(Self {
            manager: manager.clone(),
            employee: employee.clone(),
        })
    }

    /// Returns the manager side of the report.
    pub fn manager(&self) -> &Employee {
        &self.manager
    }

    /// Returns the employee side of the report.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.manager, self.employee)
    }
}
