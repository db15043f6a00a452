//! Core data models for the expense allocation engine.
//!
//! This module contains the domain models used throughout the engine.

mod allocation_result;
mod employee;
mod report;
mod role;

pub use allocation_result::{AllocationBreakdown, AllocationLine};
pub use employee::Employee;
pub use report::Report;
pub use role::Role;
