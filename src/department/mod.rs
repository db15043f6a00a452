//! The department hierarchy.
//!
//! A department is an n-ary tree of employees (nodes) and reports (edges),
//! rooted at the department head. Direct reports are stored in an adjacency
//! list indexed by member position, and each member's manager is stored
//! alongside it so the single-manager and acyclicity rules are cheap to check.
//!
//! # Example
//!
//! ```
//! use expense_allocation::department::Department;
//! use expense_allocation::models::{Employee, Report, Role};
//!
//! let mut department = Department::new("CL", "Manager A");
//! let manager_b = Employee::new(Role::Manager, "Manager B");
//! let developer = Employee::new(Role::Developer, "Developer");
//!
//! department.add_employee(manager_b.clone())?;
//! department.add_employee(developer.clone())?;
//! department.add_report(Report::new(department.department_head(), &manager_b)?)?;
//! department.add_report(Report::new(&manager_b, &developer)?)?;
//!
//! assert_eq!(department.allocation(None)?, 1600);
//! assert_eq!(department.allocation(Some(1))?, 600);
//! # Ok::<(), expense_allocation::error::AllocationError>(())
//! ```

mod allocation;
mod by_name;

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::config::RoleCosts;
use crate::error::DepartmentError;
use crate::models::{Employee, Report, Role};

/// Position of the department head in `employees`.
const HEAD: usize = 0;

/// A department: its members and who reports to whom.
///
/// Employees and reports are only ever added. The department head is created
/// with the department and always occupies the first member slot.
#[derive(Debug, Clone)]
pub struct Department {
    name: String,
    costs: RoleCosts,
    /// Members in insertion order.
    employees: Vec<Employee>,
    /// Member name to position in `employees`.
    index: HashMap<String, usize>,
    /// Direct reports of each member, in the order they were added.
    reports: Vec<Vec<usize>>,
    /// The manager of each member, if any.
    managers: Vec<Option<usize>>,
}

impl Department {
    /// Creates a department whose head is a new manager named `department_head`.
    ///
    /// Employees are priced with the default [`RoleCosts`].
    pub fn new(name: impl Into<String>, department_head: impl Into<String>) -> Self {
        Self::with_costs(name, department_head, RoleCosts::default())
    }

    /// Creates a department that prices employees it builds with `costs`.
    ///
    /// The cost table applies to the department head and to employees added
    /// through [`add_employee_named`](Self::add_employee_named). Employees
    /// passed to [`add_employee`](Self::add_employee) keep their own allocation.
    pub fn with_costs(
        name: impl Into<String>,
        department_head: impl Into<String>,
        costs: RoleCosts,
    ) -> Self {
        let head = Employee::with_costs(Role::Manager, department_head, &costs);
        let mut index = HashMap::new();
        index.insert(head.name().to_string(), HEAD);

        Self {
            name: name.into(),
            costs,
            employees: vec![head],
            index,
            reports: vec![Vec::new()],
            managers: vec![None],
        }
    }

    /// Returns the department name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cost table used for employees built by the department.
    pub fn costs(&self) -> &RoleCosts {
        &self.costs
    }

    /// Returns the department head.
    pub fn department_head(&self) -> &Employee {
        &self.employees[HEAD]
    }

    /// Returns all members in insertion order, starting with the head.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of members, including the head.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the department has no members.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns true if an employee with the same name is a member.
    pub fn contains(&self, employee: &Employee) -> bool {
        self.index.contains_key(employee.name())
    }

    /// Returns the direct reports of `manager`, or `None` if it is not a member.
    pub fn direct_reports(&self, manager: &Employee) -> Option<Vec<&Employee>> {
        let position = self.position(manager.name())?;
        Some(
            self.reports[position]
                .iter()
                .map(|&report| &self.employees[report])
                .collect(),
        )
    }

    /// Returns the manager `employee` reports to, if it is a member and has one.
    pub fn manager_of(&self, employee: &Employee) -> Option<&Employee> {
        let position = self.position(employee.name())?;
        self.managers[position].map(|manager| &self.employees[manager])
    }

    /// Adds a member to the department.
    ///
    /// # Errors
    ///
    /// Returns [`DepartmentError::DuplicateEmployee`] if an employee with the
    /// same name is already a member.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), DepartmentError> {
        if self.contains(&employee) {
            warn!(
                department = %self.name,
                employee = %employee.name(),
                "Rejected duplicate employee"
            );
            return Err(DepartmentError::DuplicateEmployee {
                name: employee.name().to_string(),
            });
        }

        let position = self.employees.len();
        debug!(department = %self.name, employee = %employee, "Added employee");
        self.index.insert(employee.name().to_string(), position);
        self.employees.push(employee);
        self.reports.push(Vec::new());
        self.managers.push(None);
        Ok(())
    }

    /// Records that `report.employee()` reports to `report.manager()`.
    ///
    /// # Errors
    ///
    /// - [`DepartmentError::NotAMember`] if either side is not a member
    /// - [`DepartmentError::RoleMismatch`] if either side's role differs from
    ///   the member stored under that name
    /// - [`DepartmentError::AlreadyReports`] if the employee already has a manager
    /// - [`DepartmentError::CycleDetected`] if the employee manages the manager,
    ///   directly or indirectly
    pub fn add_report(&mut self, report: Report) -> Result<(), DepartmentError> {
        let result = self.check_report(&report);
        let (manager, employee) = match result {
            Ok(positions) => positions,
            Err(err) => {
                warn!(department = %self.name, report = %report, error = %err, "Rejected report");
                return Err(err);
            }
        };

        self.reports[manager].push(employee);
        self.managers[employee] = Some(manager);
        debug!(department = %self.name, report = %report, "Added report");
        Ok(())
    }

    /// Validates a report against the department and returns the member
    /// positions of its manager and employee.
    fn check_report(&self, report: &Report) -> Result<(usize, usize), DepartmentError> {
        let manager = self.member(report.manager())?;
        let employee = self.member(report.employee())?;

        if let Some(current) = self.managers[employee] {
            return Err(DepartmentError::AlreadyReports {
                employee: report.employee().name().to_string(),
                manager: self.employees[current].name().to_string(),
            });
        }

        if self.chain_of_command(manager).any(|ancestor| ancestor == employee) {
            return Err(DepartmentError::CycleDetected {
                manager: report.manager().name().to_string(),
                employee: report.employee().name().to_string(),
            });
        }

        Ok((manager, employee))
    }

    /// Resolves `employee` to its member position by name.
    fn lookup(&self, employee: &Employee) -> Result<usize, DepartmentError> {
        self.position(employee.name())
            .ok_or_else(|| DepartmentError::NotAMember {
                name: employee.name().to_string(),
            })
    }

    /// Resolves `employee` to its member position, checking that the value
    /// agrees with the stored member.
    fn member(&self, employee: &Employee) -> Result<usize, DepartmentError> {
        let position = self.lookup(employee)?;

        let stored = &self.employees[position];
        if stored.role() != employee.role() {
            return Err(DepartmentError::RoleMismatch {
                name: employee.name().to_string(),
                role: employee.role().to_string(),
                member_role: stored.role().to_string(),
            });
        }
        Ok(position)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterates over the managers above `position`, nearest first.
    fn chain_of_command(&self, position: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.managers[position], |&current| self.managers[current])
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (manager, reports) in self.employees.iter().zip(&self.reports) {
            for &report in reports {
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{}->{}", manager, self.employees[report])?;
                first = false;
            }
        }
        Ok(())
    }
}
