//! Narrative insight service
//!
//! Gemini-backed summarizer that turns a student's participation history
//! into a short free-text narrative. The engine treats the backend as an
//! opaque collaborator: output is advisory text with no effect on domain
//! state, and every failure collapses to "no insight available" at the
//! `summarize` boundary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::settings::Settings;
use crate::engine::metrics;
use crate::models::event::Event;
use crate::models::participation::ParticipationRecord;
use crate::models::user::User;
use crate::utils::errors::{FabricError, Result, SummarizerError};
use crate::utils::logging::log_insight_outcome;

/// Gemini generateContent request body
#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest {
    contents: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentBlock {
    parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Gemini generateContent response body
#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: ContentBlock,
}

/// Read-only projection of one student's history, the input the
/// collaborator consumes
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyProjection {
    pub student: User,
    /// The student's own participation records
    pub records: Vec<ParticipationRecord>,
    /// Events resolved from those records, in record order
    pub recorded_events: Vec<Event>,
    pub certificate_count: usize,
}

impl JourneyProjection {
    /// Build the projection from full snapshot collections
    pub fn build(student: &User, events: &[Event], records: &[ParticipationRecord]) -> Self {
        let mine: Vec<ParticipationRecord> = records
            .iter()
            .filter(|r| r.student_id == student.id)
            .cloned()
            .collect();

        let recorded_events = mine
            .iter()
            .filter_map(|r| events.iter().find(|e| e.id == r.event_id))
            .cloned()
            .collect();

        let certificate_count = metrics::per_student_stats(&student.id, records).certificates;

        Self {
            student: student.clone(),
            records: mine,
            recorded_events,
            certificate_count,
        }
    }
}

/// The asynchronous summarization capability the core consumes
///
/// Implementations may take arbitrary latency and may fail; callers only
/// ever observe text or absence.
pub trait Summarizer: Send + Sync {
    fn summarize<'a>(
        &'a self,
        student: &'a User,
        events: &'a [Event],
        records: &'a [ParticipationRecord],
    ) -> BoxFuture<'a, Option<String>>;
}

/// Gemini-backed implementation of the summarizer capability
#[derive(Debug, Clone)]
pub struct IntelligenceService {
    client: Client,
    settings: Settings,
}

impl IntelligenceService {
    /// Create a new IntelligenceService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.gemini.timeout_seconds))
            .user_agent("CampusFabric/0.1")
            .build()
            .map_err(FabricError::Http)?;

        Ok(Self { client, settings })
    }

    /// Check if narrative insights are enabled
    pub fn is_enabled(&self) -> bool {
        self.settings.features.ai_insights
    }

    /// Analyze a student's engagement journey across events
    ///
    /// Without a configured API key this returns the offline placeholder
    /// narrative rather than failing the caller.
    pub async fn analyze_student_journey(
        &self,
        student: &User,
        events: &[Event],
        records: &[ParticipationRecord],
    ) -> Result<Option<String>> {
        debug!(student_id = %student.id, "Analyzing student journey");

        let projection = JourneyProjection::build(student, events, records);
        let prompt = build_analysis_prompt(&projection);

        match self.settings.gemini.api_key.as_deref() {
            Some(key) if !key.is_empty() => self.call_generate_content(&prompt, key).await,
            _ => {
                debug!(student_id = %student.id, "No API key configured, using offline narrative");
                Ok(Some(offline_narrative(&prompt)))
            }
        }
    }

    /// Make the actual generateContent API request
    async fn call_generate_content(&self, prompt: &str, api_key: &str) -> Result<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.settings.gemini.api_url.trim_end_matches('/'),
            self.settings.gemini.model,
            api_key
        );

        let body = GenerateContentRequest {
            contents: vec![ContentBlock {
                parts: vec![ContentPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FabricError::Summarizer(SummarizerError::Timeout)
                } else if e.is_connect() {
                    FabricError::Summarizer(SummarizerError::ServiceUnavailable)
                } else {
                    FabricError::Summarizer(SummarizerError::RequestFailed(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(FabricError::Summarizer(SummarizerError::RequestFailed(
                format!("HTTP {}: {}", status, error_text),
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            FabricError::Summarizer(SummarizerError::InvalidResponse(e.to_string()))
        })?;

        let text = body
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty());

        Ok(text)
    }
}

impl Summarizer for IntelligenceService {
    fn summarize<'a>(
        &'a self,
        student: &'a User,
        events: &'a [Event],
        records: &'a [ParticipationRecord],
    ) -> BoxFuture<'a, Option<String>> {
        Box::pin(async move {
            if !self.is_enabled() {
                debug!(student_id = %student.id, "Narrative insights are disabled");
                return None;
            }

            match self.analyze_student_journey(student, events, records).await {
                Ok(Some(insight)) => {
                    log_insight_outcome(&student.id, true, None);
                    Some(insight)
                }
                Ok(None) => {
                    log_insight_outcome(&student.id, false, Some("backend returned no text"));
                    None
                }
                Err(e) => {
                    log_insight_outcome(&student.id, false, Some(&e.to_string()));
                    None
                }
            }
        })
    }
}

/// Build the analysis prompt from the projection
fn build_analysis_prompt(projection: &JourneyProjection) -> String {
    let event_titles = if projection.recorded_events.is_empty() {
        "none yet".to_string()
    } else {
        projection
            .recorded_events
            .iter()
            .map(|e| e.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Provide a brief, inspiring narrative (2-3 sentences) about the academic journey of {}, \
a {} student who has participated in the following events: {}. \
They have earned {} verified credentials. \
Focus on their growth and contributions to the campus community.",
        projection.student.name,
        projection.student.department,
        event_titles,
        projection.certificate_count
    )
}

/// Deterministic placeholder used when no backend credential is configured
fn offline_narrative(prompt: &str) -> String {
    let prefix: String = prompt.chars().take(50).collect();
    format!(
        "{}... This is a placeholder response. Configure a Gemini API key for live narratives.",
        prefix
    )
}

/// Guard against stale insights
///
/// Summarizer calls outlive navigation: the user may have switched
/// identity by the time a narrative arrives. Each request takes a
/// generation-stamped ticket, and a completion is applied only while its
/// ticket is still the current one.
#[derive(Debug, Default)]
pub struct InsightTracker {
    generation: AtomicU64,
}

/// Ticket identifying one summarization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightTicket {
    pub student_id: String,
    generation: u64,
}

impl InsightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating any outstanding ticket
    pub fn begin(&self, student_id: &str) -> InsightTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        InsightTicket {
            student_id: student_id.to_string(),
            generation,
        }
    }

    /// Whether a completed request's result should still be applied
    pub fn is_current(&self, ticket: &InsightTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Drop any outstanding ticket, e.g. on logout
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn student() -> User {
        seed::seed_roster().remove(0)
    }

    #[test]
    fn test_projection_resolves_history() {
        let projection = JourneyProjection::build(
            &student(),
            &seed::seed_events(),
            &seed::seed_records(),
        );
        assert_eq!(projection.records.len(), 2);
        assert_eq!(projection.recorded_events.len(), 2);
        assert_eq!(projection.certificate_count, 1);
    }

    #[test]
    fn test_prompt_mentions_history_and_credentials() {
        let projection = JourneyProjection::build(
            &student(),
            &seed::seed_events(),
            &seed::seed_records(),
        );
        let prompt = build_analysis_prompt(&projection);
        assert!(prompt.contains("Alex Rivera"));
        assert!(prompt.contains("Comp Sci"));
        assert!(prompt.contains("Soft Skills Seminar"));
        assert!(prompt.contains("1 verified credentials"));
    }

    #[test]
    fn test_prompt_for_empty_history() {
        let projection = JourneyProjection::build(&student(), &[], &[]);
        let prompt = build_analysis_prompt(&projection);
        assert!(prompt.contains("none yet"));
        assert!(prompt.contains("0 verified credentials"));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "A fine journey."}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = response.candidates.unwrap()[0].content.parts[0].text.clone();
        assert_eq!(text, "A fine journey.");
    }

    #[test]
    fn test_response_without_candidates() {
        let json = r#"{"candidates": null}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.candidates.is_none());
    }

    #[test]
    fn test_offline_narrative_echoes_prompt() {
        let narrative = offline_narrative("Provide a brief, inspiring narrative about somebody.");
        assert!(narrative.starts_with("Provide a brief, inspiring narrative about somebod"));
        assert!(narrative.contains("placeholder response"));
    }

    #[test]
    fn test_tracker_accepts_only_current_ticket() {
        let tracker = InsightTracker::new();
        let first = tracker.begin("u1");
        assert!(tracker.is_current(&first));

        let second = tracker.begin("u4");
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn test_tracker_invalidate_drops_outstanding_ticket() {
        let tracker = InsightTracker::new();
        let ticket = tracker.begin("u1");
        tracker.invalidate();
        assert!(!tracker.is_current(&ticket));
    }
}
