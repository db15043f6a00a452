//! Allocation breakdown models.
//!
//! This module contains the [`AllocationBreakdown`] type, which lists every
//! employee counted towards an allocation total.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// One employee's contribution to an allocation.
///
/// # Example
///
/// ```
/// use expense_allocation::models::{AllocationLine, Role};
///
/// let line = AllocationLine {
///     name: "Joe".to_string(),
///     role: Role::QaTester,
///     depth: 1,
///     allocation: 500,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationLine {
    /// The employee's name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Distance below the manager the allocation was computed for (0 for the manager).
    pub depth: u32,
    /// The employee's monthly allocation.
    pub allocation: u64,
}

/// The full result of an allocation calculation.
///
/// Lines are listed in pre-order: each manager comes before its reports,
/// and reports keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The department the calculation ran against.
    pub department: String,
    /// The manager at the root of the calculation.
    pub manager: String,
    /// The depth bound used, `None` when unbounded.
    pub level: Option<i32>,
    /// Every employee counted, in pre-order.
    pub lines: Vec<AllocationLine>,
    /// Sum of all line allocations.
    pub total: u64,
}

impl AllocationBreakdown {
    /// Returns the number of employees counted.
    pub fn headcount(&self) -> usize {
        self.lines.len()
    }

    /// Returns the summed allocation of all counted employees with `role`.
    pub fn total_for_role(&self, role: Role) -> u64 {
        self.lines
            .iter()
            .filter(|line| line.role == role)
            .map(|line| line.allocation)
            .sum()
    }

    /// Returns the deepest level reached below the manager.
    pub fn max_depth(&self) -> u32 {
        self.lines.iter().map(|line| line.depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, role: Role, depth: u32, allocation: u64) -> AllocationLine {
        AllocationLine {
            name: name.to_string(),
            role,
            depth,
            allocation,
        }
    }

    fn sample() -> AllocationBreakdown {
        AllocationBreakdown {
            calculation_id: Uuid::nil(),
            department: "Engineering".to_string(),
            manager: "Brandon".to_string(),
            level: Some(1),
            lines: vec![
                line("Brandon", Role::Manager, 0, 300),
                line("Andrew", Role::Developer, 1, 1000),
                line("Steve", Role::Developer, 1, 1000),
                line("Joe", Role::QaTester, 1, 500),
            ],
            total: 2800,
        }
    }

    #[test]
    fn test_headcount() {
        assert_eq!(sample().headcount(), 4);
    }

    #[test]
    fn test_total_for_role() {
        let breakdown = sample();
        assert_eq!(breakdown.total_for_role(Role::Developer), 2000);
        assert_eq!(breakdown.total_for_role(Role::QaTester), 500);
        assert_eq!(breakdown.total_for_role(Role::Manager), 300);
    }

    #[test]
    fn test_max_depth() {
        assert_eq!(sample().max_depth(), 1);
    }

    #[test]
    fn test_serialize_breakdown() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["manager"], "Brandon");
        assert_eq!(json["level"], 1);
        assert_eq!(json["total"], 2800);
        assert_eq!(json["lines"][3]["role"], "QA Tester");
        assert_eq!(
            json["calculation_id"],
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_unbounded_level_serializes_as_null() {
        let mut breakdown = sample();
        breakdown.level = None;
        let json = serde_json::to_value(breakdown).unwrap();
        assert!(json["level"].is_null());
    }
}
