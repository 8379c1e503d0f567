//! Services module
//!
//! This module contains business logic services

pub mod insight;
pub mod roster;

// Re-export commonly used services
pub use insight::{
    InsightTicket, InsightTracker, IntelligenceService, JourneyProjection, Summarizer,
};
pub use roster::RosterService;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub intelligence_service: IntelligenceService,
    pub roster_service: RosterService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let intelligence_service = IntelligenceService::new(settings)?;
        let roster_service = RosterService::seeded();

        Ok(Self {
            intelligence_service,
            roster_service,
        })
    }
}
