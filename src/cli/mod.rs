//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`review`]: Interactive TUI session for triaging a directory
//! - [`summary`]: Print ledger progress counts without opening the TUI

pub mod review;
pub mod summary;
