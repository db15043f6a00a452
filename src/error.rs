//! Error types for the expense allocation engine.
//!
//! Each entity has its own error type so callers can tell which invariant was
//! violated. [`AllocationError`] wraps all of them for operations that can fail
//! in more than one layer.

use thiserror::Error;

/// Raised when an [`Employee`](crate::models::Employee) cannot be constructed.
///
/// # Example
///
/// ```
/// use expense_allocation::error::EmployeeError;
///
/// let error = EmployeeError::UnknownRole {
///     role: "President".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee role: President");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// The role is not one of the known roles.
    #[error("Unknown employee role: {role}")]
    UnknownRole {
        /// The role that was requested.
        role: String,
    },
}

/// Raised when a [`Report`](crate::models::Report) violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// An employee was asked to report to themselves.
    #[error("Employee '{name}' cannot report to themselves")]
    SelfReport {
        /// The employee's name.
        name: String,
    },

    /// The target of a report is not a manager.
    #[error("Employees can only report to managers, but '{manager}' is a {role}")]
    ManagerRequired {
        /// The name of the would-be manager.
        manager: String,
        /// The role that employee actually holds.
        role: String,
    },
}

/// Raised when a [`Department`](crate::department::Department) mutation or
/// query breaks the department's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepartmentError {
    /// An employee with the same name is already a member.
    #[error("Employee already exists: {name}")]
    DuplicateEmployee {
        /// The duplicated name.
        name: String,
    },

    /// The named employee is not a member of the department.
    #[error("Employee missing from department: {name}")]
    NotAMember {
        /// The missing name.
        name: String,
    },

    /// The employee already reports to a manager.
    #[error("Employee '{employee}' already reports to '{manager}'")]
    AlreadyReports {
        /// The employee being re-assigned.
        employee: String,
        /// The manager the employee currently reports to.
        manager: String,
    },

    /// Linking the employee under the manager would close a loop.
    #[error("Report '{manager}->{employee}' would create a reporting cycle")]
    CycleDetected {
        /// The manager side of the rejected report.
        manager: String,
        /// The employee side of the rejected report.
        employee: String,
    },

    /// The department head has no direct reports.
    #[error("No employees report to the department head '{head}'")]
    NoDirectReports {
        /// The department head's name.
        head: String,
    },

    /// An employee value does not match the member stored under its name.
    #[error("Employee '{name}' is a {member_role} in this department, not a {role}")]
    RoleMismatch {
        /// The shared name.
        name: String,
        /// The role carried by the value passed in.
        role: String,
        /// The role of the stored member.
        member_role: String,
    },

    /// The allocation under a manager does not fit in a `u64`.
    #[error("Allocation under '{manager}' exceeds the maximum representable amount")]
    AllocationOverflow {
        /// The manager whose allocation was requested.
        manager: String,
    },
}

/// Raised when configuration files cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    Parse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// Any error the engine can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// See [`EmployeeError`].
    #[error(transparent)]
    Employee(#[from] EmployeeError),

    /// See [`ReportError`].
    #[error(transparent)]
    Report(#[from] ReportError),

    /// See [`DepartmentError`].
    #[error(transparent)]
    Department(#[from] DepartmentError),

    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A type alias for Results that return [`AllocationError`].
pub type AllocationResult<T> = Result<T, AllocationError>;
