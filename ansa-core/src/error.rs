//! Error types for answer resolution.

/// The main error type for provider and resolution operations.
///
/// The first five variants are the per-provider failure taxonomy. The
/// resolver treats all of them identically: recoverable and local, logged,
/// then on to the next candidate.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// Provider skipped because its credential is not configured.
    /// Raised synchronously, before any network traffic.
    #[error("{provider}: credential not configured")]
    CredentialMissing { provider: String },

    /// Transport-level failure (connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("{provider}: HTTP {status}")]
    Status { provider: String, status: u16 },

    /// Success status but no usable text at any known extraction path
    #[error("{provider}: malformed response: {detail}")]
    Shape { provider: String, detail: String },

    /// Deadline elapsed before the provider produced a reply
    #[error("{provider}: no reply within {deadline_ms}ms")]
    Timeout { provider: String, deadline_ms: u64 },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl AnswerError {
    /// Create a credential-missing error
    pub fn credential_missing(provider: impl Into<String>) -> Self {
        Self::CredentialMissing {
            provider: provider.into(),
        }
    }

    /// Create a non-success status error
    pub fn status(provider: impl Into<String>, status: u16) -> Self {
        Self::Status {
            provider: provider.into(),
            status,
        }
    }

    /// Create a malformed-response error
    pub fn shape(provider: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Shape {
            provider: provider.into(),
            detail: detail.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(provider: impl Into<String>, deadline: std::time::Duration) -> Self {
        Self::Timeout {
            provider: provider.into(),
            deadline_ms: deadline.as_millis() as u64,
        }
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Check if this is a per-provider failure the resolver absorbs by
    /// moving to the next candidate.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            AnswerError::CredentialMissing { .. }
                | AnswerError::Network(_)
                | AnswerError::Status { .. }
                | AnswerError::Shape { .. }
                | AnswerError::Timeout { .. }
        )
    }
}

impl From<String> for AnswerError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AnswerError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn provider_failures_are_recoverable() {
        assert!(AnswerError::credential_missing("Groq").is_provider_failure());
        assert!(AnswerError::status("Groq", 429).is_provider_failure());
        assert!(AnswerError::shape("Gemini", "no text").is_provider_failure());
        assert!(AnswerError::timeout("OpenAI", Duration::from_secs(10)).is_provider_failure());

        assert!(!AnswerError::configuration("bad chain").is_provider_failure());
        assert!(!AnswerError::other("boom").is_provider_failure());
    }

    #[test]
    fn timeout_reports_deadline_in_millis() {
        let err = AnswerError::timeout("Groq", Duration::from_secs(10));
        assert_eq!(err.to_string(), "Groq: no reply within 10000ms");
    }
}
