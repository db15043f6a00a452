//! Configuration for the expense allocation engine.
//!
//! This module provides the role cost table and the YAML loading of role
//! costs and department rosters.
//!
//! # Example
//!
//! ```no_run
//! use expense_allocation::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engineering").unwrap();
//! println!("Loaded department: {}", config.roster().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RoleCosts, RoleCostsConfig, Roster, RosterEmployee, RosterReport};
