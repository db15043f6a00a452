//! Allocation calculation over the reporting hierarchy.
//!
//! `level` bounds how far below a manager the calculation reaches:
//!
//! - `None` includes the whole subtree.
//! - `Some(n)` with `n > 0` includes direct reports, each evaluated with `n - 1`.
//! - `Some(n)` with `n <= 0` stops at the manager itself.
//!
//! The manager's own allocation is always included.

use tracing::debug;
use uuid::Uuid;

use crate::error::DepartmentError;
use crate::models::{AllocationBreakdown, AllocationLine, Employee};

use super::{Department, HEAD};

/// Returns the level to evaluate direct reports with, or `None` when direct
/// reports must not be visited.
fn descend(level: Option<i32>) -> Option<Option<i32>> {
    match level {
        None => Some(None),
        Some(remaining) if remaining > 0 => Some(Some(remaining - 1)),
        Some(_) => None,
    }
}

impl Department {
    /// Calculates the allocation of `manager` and its reports down to `level`.
    ///
    /// `manager` does not have to be a manager: any member can be asked for,
    /// and a member without reports contributes only its own allocation.
    ///
    /// Members are matched by name, so any value sharing a member's name
    /// selects that member.
    ///
    /// # Errors
    ///
    /// - [`DepartmentError::NotAMember`] if `manager` is not a member
    /// - [`DepartmentError::AllocationOverflow`] if the total does not fit in a `u64`
    ///
    /// # Example
    ///
    /// ```
    /// use expense_allocation::department::Department;
    ///
    /// let mut department = Department::new("Engineering", "Brandon");
    /// department.add_employee_named("Developer", "Andrew")?;
    /// department.add_employee_named("QA Tester", "Joe")?;
    /// department.add_report_named("Brandon", "Andrew")?;
    /// department.add_report_named("Brandon", "Joe")?;
    ///
    /// let brandon = department.department_head().clone();
    /// assert_eq!(department.allocation_for_manager(&brandon, Some(0))?, 300);
    /// assert_eq!(department.allocation_for_manager(&brandon, None)?, 1800);
    /// # Ok::<(), expense_allocation::error::AllocationError>(())
    /// ```
    pub fn allocation_for_manager(
        &self,
        manager: &Employee,
        level: Option<i32>,
    ) -> Result<u64, DepartmentError> {
        let position = self.lookup(manager)?;
        self.subtree_allocation(position, level)
    }

    /// Calculates the allocation of the whole department down to `level`.
    ///
    /// # Errors
    ///
    /// - [`DepartmentError::NoDirectReports`] if nobody reports to the
    ///   department head
    /// - [`DepartmentError::AllocationOverflow`] if the total does not fit in a `u64`
    pub fn allocation(&self, level: Option<i32>) -> Result<u64, DepartmentError> {
        if self.reports[HEAD].is_empty() {
            return Err(DepartmentError::NoDirectReports {
                head: self.department_head().name().to_string(),
            });
        }
        self.subtree_allocation(HEAD, level)
    }

    /// Lists every employee counted by
    /// [`allocation_for_manager`](Self::allocation_for_manager) for the same
    /// arguments, together with the total.
    ///
    /// # Errors
    ///
    /// Fails like [`allocation_for_manager`](Self::allocation_for_manager).
    pub fn allocation_breakdown(
        &self,
        manager: &Employee,
        level: Option<i32>,
    ) -> Result<AllocationBreakdown, DepartmentError> {
        let position = self.lookup(manager)?;

        let mut lines = Vec::new();
        self.walk(position, level, |member, depth| {
            let employee = &self.employees[member];
            lines.push(AllocationLine {
                name: employee.name().to_string(),
                role: employee.role(),
                depth,
                allocation: employee.allocation(),
            });
        });
        let total = lines
            .iter()
            .try_fold(0u64, |sum, line| sum.checked_add(line.allocation))
            .ok_or_else(|| self.overflow(position))?;

        let breakdown = AllocationBreakdown {
            calculation_id: Uuid::new_v4(),
            department: self.name.clone(),
            manager: manager.name().to_string(),
            level,
            lines,
            total,
        };
        debug!(
            calculation_id = %breakdown.calculation_id,
            department = %self.name,
            manager = %breakdown.manager,
            headcount = breakdown.headcount(),
            total = breakdown.total,
            "Computed allocation breakdown"
        );
        Ok(breakdown)
    }

    pub(super) fn subtree_allocation(
        &self,
        root: usize,
        level: Option<i32>,
    ) -> Result<u64, DepartmentError> {
        // `None` once the running sum has overflowed.
        let mut total = Some(0u64);
        self.walk(root, level, |member, _| {
            total = total.and_then(|sum| sum.checked_add(self.employees[member].allocation()));
        });
        total.ok_or_else(|| self.overflow(root))
    }

    fn overflow(&self, root: usize) -> DepartmentError {
        DepartmentError::AllocationOverflow {
            manager: self.employees[root].name().to_string(),
        }
    }

    /// Visits `root` and its reports in pre-order, honouring `level`.
    ///
    /// The visitor receives each member's position and its depth below `root`.
    fn walk<F>(&self, root: usize, level: Option<i32>, mut visit: F)
    where
        F: FnMut(usize, u32),
    {
        let mut stack = vec![(root, level, 0u32)];
        while let Some((member, remaining, depth)) = stack.pop() {
            visit(member, depth);
            if let Some(next) = descend(remaining) {
                // Reversed so reports pop in the order they were added.
                for &report in self.reports[member].iter().rev() {
                    stack.push((report, next, depth + 1));
                }
            }
        }
    }
}
