//! Triage engine for a consultant bench roster.
//!
//! [`roster`] filters, classifies, summarizes, and exports roster records;
//! [`workflow`] projects ordered step flags into display state. Both are pure
//! and perform no I/O apart from the roster importer adapter.

pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;
pub mod workflow;
