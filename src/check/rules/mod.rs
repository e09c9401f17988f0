//! Built-in rules.
//!
//! This module contains all the built-in checks that come with satellite-sanity.

pub mod hw_requirements;

pub use hw_requirements::HardwareRequirementsRule;
