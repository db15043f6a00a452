//! Name-based access to a department.
//!
//! These operations look members up by name and build employees and
//! reports on the caller's behalf. Queries for unknown names return `None`.
//! Mutations naming an unknown employee return
//! [`DepartmentError::NotAMember`].

use tracing::debug;

use crate::config::{RoleCosts, Roster};
use crate::error::{AllocationResult, DepartmentError};
use crate::models::{Employee, Report, Role};

use super::Department;

impl Department {
    /// Builds a department from a roster, pricing employees with `costs`.
    ///
    /// Employees are added first, then reports, both in roster order. The
    /// first failure is returned.
    pub fn from_roster(roster: &Roster, costs: RoleCosts) -> AllocationResult<Self> {
        let mut department = Self::with_costs(&roster.name, &roster.head, costs);
        for entry in &roster.employees {
            department.add_employee_named(&entry.role, &entry.name)?;
        }
        for entry in &roster.reports {
            department.add_report_named(&entry.manager, &entry.employee)?;
        }
        debug!(
            department = %department.name,
            employees = department.len(),
            reports = roster.reports.len(),
            "Built department from roster"
        );
        Ok(department)
    }

    /// Returns the member named `name`.
    pub fn get_employee(&self, name: &str) -> Option<&Employee> {
        self.position(name).map(|position| &self.employees[position])
    }

    /// Creates an employee of role `kind` and adds it to the department.
    ///
    /// The employee is priced with the department's cost table.
    ///
    /// # Errors
    ///
    /// - [`EmployeeError::UnknownRole`](crate::error::EmployeeError::UnknownRole)
    ///   if `kind` is not a known role
    /// - [`DepartmentError::DuplicateEmployee`] if the name is taken
    pub fn add_employee_named(
        &mut self,
        kind: &str,
        name: impl Into<String>,
    ) -> AllocationResult<()> {
        let role: Role = kind.parse()?;
        let employee = Employee::with_costs(role, name, &self.costs);
        self.add_employee(employee)?;
        Ok(())
    }

    /// Makes the member named `employee` report to the member named `manager`.
    ///
    /// # Errors
    ///
    /// - [`DepartmentError::NotAMember`] if either name is unknown
    /// - any [`ReportError`](crate::error::ReportError) from building the report
    /// - any error from [`add_report`](Self::add_report)
    pub fn add_report_named(&mut self, manager: &str, employee: &str) -> AllocationResult<()> {
        let report = {
            let manager = self.named_member(manager)?;
            let employee = self.named_member(employee)?;
            Report::new(manager, employee)?
        };
        self.add_report(report)?;
        Ok(())
    }

    /// Calculates the allocation of the member named `manager` down to `level`.
    ///
    /// Returns `Ok(None)` if nobody by that name is a member.
    ///
    /// # Errors
    ///
    /// Returns [`DepartmentError::AllocationOverflow`] if the total does not
    /// fit in a `u64`.
    pub fn allocation_for_manager_named(
        &self,
        manager: &str,
        level: Option<i32>,
    ) -> Result<Option<u64>, DepartmentError> {
        self.position(manager)
            .map(|position| self.subtree_allocation(position, level))
            .transpose()
    }

    fn named_member(&self, name: &str) -> Result<&Employee, DepartmentError> {
        self.get_employee(name).ok_or_else(|| DepartmentError::NotAMember {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RosterEmployee, RosterReport};
    use crate::error::{AllocationError, EmployeeError, ReportError};

    /// Manager A -> Manager B -> {Developer, QA Tester}
    fn cl() -> Department {
        let mut department = Department::new("CL", "Manager A");
        department.add_employee_named("Manager", "Manager B").unwrap();
        department.add_employee_named("Developer", "Developer").unwrap();
        department.add_employee_named("QA Tester", "QA Tester").unwrap();
        department.add_report_named("Manager A", "Manager B").unwrap();
        department.add_report_named("Manager B", "Developer").unwrap();
        department.add_report_named("Manager B", "QA Tester").unwrap();
        department
    }

    #[test]
    fn test_get_employee() {
        let department = cl();
        let employee = department.get_employee("QA Tester").unwrap();
        assert_eq!(employee.role(), Role::QaTester);
        assert_eq!(employee.allocation(), 500);
    }

    #[test]
    fn test_get_missing_employee_returns_none() {
        assert!(cl().get_employee("Nobody").is_none());
    }

    #[test]
    fn test_allocation_by_name() {
        let department = cl();
        assert_eq!(department.allocation_for_manager_named("Manager A", None), Ok(Some(2100)));
        assert_eq!(department.allocation_for_manager_named("Manager B", Some(0)), Ok(Some(300)));
        assert_eq!(department.allocation_for_manager_named("Manager B", Some(1)), Ok(Some(1800)));
    }

    #[test]
    fn test_allocation_for_missing_name_returns_none() {
        assert_eq!(cl().allocation_for_manager_named("Nobody", None), Ok(None));
    }

    #[test]
    fn test_add_employee_named_unknown_role() {
        let mut department = Department::new("CL", "Manager A");
        assert_eq!(
            department.add_employee_named("President", "Pat").unwrap_err(),
            AllocationError::Employee(EmployeeError::UnknownRole {
                role: "President".to_string()
            })
        );
        assert_eq!(department.len(), 1);
    }

    #[test]
    fn test_add_employee_named_duplicate() {
        let mut department = cl();
        assert!(matches!(
            department.add_employee_named("Developer", "Manager B"),
            Err(AllocationError::Department(DepartmentError::DuplicateEmployee { .. }))
        ));
    }

    #[test]
    fn test_add_report_named_unknown_name() {
        let mut department = cl();
        assert_eq!(
            department.add_report_named("Manager A", "Nobody").unwrap_err(),
            AllocationError::Department(DepartmentError::NotAMember {
                name: "Nobody".to_string()
            })
        );
    }

    #[test]
    fn test_add_report_named_to_non_manager() {
        let mut department = cl();
        department.add_employee_named("Developer", "Dana").unwrap();
        assert!(matches!(
            department.add_report_named("Developer", "Dana"),
            Err(AllocationError::Report(ReportError::ManagerRequired { .. }))
        ));
    }

    #[test]
    fn test_add_report_named_self_report() {
        let mut department = cl();
        assert!(matches!(
            department.add_report_named("Manager A", "Manager A"),
            Err(AllocationError::Report(ReportError::SelfReport { .. }))
        ));
    }

    #[test]
    fn test_add_report_named_second_manager() {
        let mut department = cl();
        assert!(matches!(
            department.add_report_named("Manager A", "Developer"),
            Err(AllocationError::Department(DepartmentError::AlreadyReports { .. }))
        ));
    }

    #[test]
    fn test_from_roster() {
        let roster = Roster {
            name: "CL".to_string(),
            head: "Manager A".to_string(),
            employees: vec![
                RosterEmployee {
                    name: "Manager B".to_string(),
                    role: "Manager".to_string(),
                },
                RosterEmployee {
                    name: "Developer".to_string(),
                    role: "Developer".to_string(),
                },
            ],
            reports: vec![
                RosterReport {
                    manager: "Manager A".to_string(),
                    employee: "Manager B".to_string(),
                },
                RosterReport {
                    manager: "Manager B".to_string(),
                    employee: "Developer".to_string(),
                },
            ],
        };

        let department = Department::from_roster(&roster, RoleCosts::default()).unwrap();
        assert_eq!(department.name(), "CL");
        assert_eq!(department.len(), 3);
        assert_eq!(department.allocation(None).unwrap(), 1600);
    }

    #[test]
    fn test_from_roster_reports_first_failure() {
        let roster = Roster {
            name: "CL".to_string(),
            head: "Manager A".to_string(),
            employees: vec![RosterEmployee {
                name: "Pat".to_string(),
                role: "President".to_string(),
            }],
            reports: vec![],
        };

        assert!(matches!(
            Department::from_roster(&roster, RoleCosts::default()),
            Err(AllocationError::Employee(EmployeeError::UnknownRole { .. }))
        ));
    }
}
