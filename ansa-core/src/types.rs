//! Core types for answer resolution.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `source` value stamped when every candidate provider failed.
pub const SOURCE_NONE: &str = "none";

/// `source` value for caller-synthesized wrapper failures.
pub const SOURCE_ERROR: &str = "error";

/// Provider identity.
///
/// `name` is the exact string stamped into [`AiResponse::source`], so it is
/// part of the wire contract with consumers.
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    /// Whether this provider needs a configured credential at all.
    pub requires_key: bool,
}

/// Free text returned by a provider, plus the wall-clock latency of the
/// call as measured inside the adapter itself (so that middleware overhead
/// is excluded).
#[derive(Debug, Clone)]
pub struct RawReply {
    pub text: String,
    pub elapsed: Duration,
}

/// The canonical, provider-agnostic answer record returned to callers.
///
/// Serialized field names match the consuming message-passing boundary
/// (`timeTaken`), so values round-trip unchanged through it.
///
/// Invariants: `source` is a configured provider name or one of the
/// sentinels [`SOURCE_NONE`] / [`SOURCE_ERROR`]; `time_taken` is 0 exactly
/// when `source` is a sentinel; `answer` is non-empty whenever `source` is
/// a real provider name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiResponse {
    pub answer: String,
    pub explanation: String,
    pub source: String,
    #[serde(rename = "timeTaken")]
    pub time_taken: u64,
}

impl AiResponse {
    /// The terminal result produced when every candidate provider failed.
    pub fn unavailable() -> Self {
        Self {
            answer: "Sorry, I couldn't generate a response right now.".to_string(),
            explanation: "All AI providers are currently unavailable.".to_string(),
            source: SOURCE_NONE.to_string(),
            time_taken: 0,
        }
    }

    /// A wrapper-failure result for callers whose own plumbing failed
    /// around a resolution attempt. The engine itself never produces this.
    pub fn error_fallback() -> Self {
        Self {
            answer: "Sorry, there was an error processing your question. Please try again."
                .to_string(),
            explanation:
                "The AI service is currently unavailable. Please check your connection and try again."
                    .to_string(),
            source: SOURCE_ERROR.to_string(),
            time_taken: 0,
        }
    }

    /// True when `source` carries no real provider name.
    pub fn is_sentinel(&self) -> bool {
        self.source == SOURCE_NONE || self.source == SOURCE_ERROR
    }

    /// Rough confidence estimate derived from provenance and latency:
    /// 0.0 for sentinel results, then 0.9 / 0.8 / 0.7 by response time.
    pub fn confidence(&self) -> f32 {
        if self.is_sentinel() {
            0.0
        } else if self.time_taken < 2_000 {
            0.9
        } else if self.time_taken < 5_000 {
            0.8
        } else {
            0.7
        }
    }
}

/// Availability report for one configured provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    pub available: bool,
    pub requires_key: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_sentinel_shape() {
        let response = AiResponse::unavailable();
        assert_eq!(response.source, SOURCE_NONE);
        assert_eq!(response.time_taken, 0);
        assert_eq!(
            response.answer,
            "Sorry, I couldn't generate a response right now."
        );
        assert!(response.is_sentinel());
    }

    #[test]
    fn confidence_tiers() {
        let mut response = AiResponse {
            answer: "Paris".to_string(),
            explanation: "Capital of France.".to_string(),
            source: "Groq".to_string(),
            time_taken: 1_200,
        };
        assert_eq!(response.confidence(), 0.9);

        response.time_taken = 3_500;
        assert_eq!(response.confidence(), 0.8);

        response.time_taken = 8_000;
        assert_eq!(response.confidence(), 0.7);

        assert_eq!(AiResponse::error_fallback().confidence(), 0.0);
    }

    #[test]
    fn serializes_time_taken_in_camel_case() {
        let response = AiResponse {
            answer: "Paris".to_string(),
            explanation: "Capital of France.".to_string(),
            source: "Gemini".to_string(),
            time_taken: 420,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["timeTaken"], 420);

        let back: AiResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }
}
