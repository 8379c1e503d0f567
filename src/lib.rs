//! CampusFabric
//!
//! Participation tracking core for the Unified Campus Events Fabric.
//! This library provides the campus-events domain model, the pure
//! participation state engine (registration, check-in, certification),
//! derived engagement metrics, and the narrative insight collaborator.

#![allow(non_snake_case)]

pub mod config;
pub mod engine;
pub mod models;
pub mod seed;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{FabricError, Result};

// Re-export main components for easy access
pub use engine::{FabricSnapshot, InstitutionStats, StudentStats};
pub use services::{IntelligenceService, RosterService, ServiceFactory, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
