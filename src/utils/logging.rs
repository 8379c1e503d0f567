//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the participation core.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the worker guard for the rolling file writer when one is
/// configured; the caller keeps it alive for the duration of the session.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = if let Some(ref file_path) = config.file_path {
        let file_appender = tracing_appender::rolling::daily(file_path, "campus-fabric.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log participation state changes with structured data
pub fn log_participation_action(
    student_id: &str,
    event_id: &str,
    action: &str,
    details: Option<&str>,
) {
    info!(
        student_id = student_id,
        event_id = event_id,
        action = action,
        details = details,
        "Participation action performed"
    );
}

/// Log session logins
pub fn log_login(user_id: &str, role: &str) {
    info!(user_id = user_id, role = role, "Session login");
}

/// Log narrative summarizer outcomes
pub fn log_insight_outcome(student_id: &str, delivered: bool, reason: Option<&str>) {
    if delivered {
        info!(student_id = student_id, "Narrative insight delivered");
    } else {
        warn!(
            student_id = student_id,
            reason = reason,
            "Narrative insight unavailable"
        );
    }
}
