//! Expense allocation for department hierarchies.
//!
//! This crate models a department, its employees and who reports to whom,
//! and calculates monthly expense allocations by summing per-role costs over
//! a manager's reporting tree, optionally bounded by depth.

#![warn(missing_docs)]

pub mod config;
pub mod department;
pub mod error;
pub mod models;
