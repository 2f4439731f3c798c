//! Generic HTTP wire adapter.
//!
//! Every provider speaks a different chat/generation convention, but the
//! differences are confined to four things: the endpoint, the auth
//! convention, the request envelope, and the JSON path holding the
//! generated text. Those four are captured in one [`WireSpec`] record per
//! provider; the request control flow lives here exactly once.
//!
//! Envelope bodies and extraction paths are wire contracts. Consumers on
//! the other end of these endpoints expect them byte for byte; do not let
//! them drift.

use ansa_core::error::AnswerError;
use ansa_core::provider::Provider;
use ansa_core::types::{ProviderInfo, RawReply};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// System prompt shared by every chat-style envelope.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Provide clear, concise answers.";

/// Token generation cap shared by every envelope.
pub const MAX_TOKENS: u32 = 500;

/// Sampling temperature shared by every envelope.
pub const TEMPERATURE: f64 = 0.7;

/// How a provider expects its credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Bearer <key>` request header
    Bearer,
    /// Key appended as a URL query parameter with the given name
    QueryParam(&'static str),
    /// No credential on the wire
    None,
}

/// Request envelope convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// OpenAI-style chat completion with a system + user message pair
    OpenAiChat { model: &'static str },
    /// Google Gemini `generateContent` with the system prompt inlined
    /// into the single text part
    GeminiGenerate,
    /// Hugging Face inference API with an `inputs` string
    HfInference,
    /// Bare `{"message": ...}` body
    PlainMessage,
}

impl Envelope {
    /// Build the JSON body for a question.
    pub fn body(&self, question: &str) -> Value {
        match self {
            Envelope::OpenAiChat { model } => json!({
                "model": model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": question }
                ],
                "max_tokens": MAX_TOKENS,
                "temperature": TEMPERATURE
            }),
            Envelope::GeminiGenerate => json!({
                "contents": [{
                    "parts": [{
                        "text": format!("{SYSTEM_PROMPT}\n\nUser: {question}")
                    }]
                }],
                "generationConfig": {
                    "maxOutputTokens": MAX_TOKENS,
                    "temperature": TEMPERATURE
                }
            }),
            Envelope::HfInference => json!({
                "inputs": question,
                "parameters": {
                    "max_length": MAX_TOKENS,
                    "temperature": TEMPERATURE,
                    "do_sample": true
                }
            }),
            Envelope::PlainMessage => json!({ "message": question }),
        }
    }
}

/// The full wire description of one provider.
#[derive(Debug, Clone)]
pub struct WireSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub endpoint: String,
    pub auth: AuthStyle,
    /// Static headers sent verbatim with every request
    pub headers: &'static [(&'static str, &'static str)],
    pub envelope: Envelope,
    /// JSON-pointer paths that may hold the generated text, tried in
    /// priority order
    pub extract: &'static [&'static str],
    pub requires_key: bool,
}

/// A provider that speaks plain HTTP according to a [`WireSpec`].
pub struct HttpProvider {
    spec: WireSpec,
    credential: Option<String>,
    client: reqwest::Client,
    info: Arc<ProviderInfo>,
}

impl fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The credential stays out of Debug output.
        f.debug_struct("HttpProvider")
            .field("spec", &self.spec)
            .field("credential", &self.credential.as_deref().map(|_| "<set>"))
            .finish()
    }
}

impl HttpProvider {
    /// Create a provider from a wire description and an optional
    /// credential.
    pub fn new(spec: WireSpec, credential: Option<String>) -> Self {
        let info = Arc::new(ProviderInfo {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            requires_key: spec.requires_key,
        });
        Self {
            spec,
            credential,
            client: reqwest::Client::new(),
            info,
        }
    }

    /// The wire description backing this provider
    pub fn spec(&self) -> &WireSpec {
        &self.spec
    }

    /// Pull the generated text out of a response body, trying each
    /// configured pointer in priority order. Empty strings do not count.
    fn extract_text(&self, body: &Value) -> Option<String> {
        self.spec.extract.iter().find_map(|path| {
            body.pointer(path)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        })
    }
}

#[async_trait]
impl Provider for HttpProvider {
    fn info(&self) -> Arc<ProviderInfo> {
        self.info.clone()
    }

    fn ready(&self) -> bool {
        !self.spec.requires_key || self.credential.is_some()
    }

    async fn generate(&self, question: &str) -> Result<RawReply, AnswerError> {
        if !self.ready() {
            return Err(AnswerError::credential_missing(&self.info.name));
        }

        let started = Instant::now();

        let mut request = self.client.post(&self.spec.endpoint);
        match (self.spec.auth, &self.credential) {
            (AuthStyle::Bearer, Some(key)) => request = request.bearer_auth(key),
            (AuthStyle::QueryParam(param), Some(key)) => {
                request = request.query(&[(param, key.as_str())]);
            }
            _ => {}
        }
        for (name, value) in self.spec.headers {
            request = request.header(*name, *value);
        }

        let response = request
            .json(&self.spec.envelope.body(question))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnswerError::status(&self.info.name, status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| AnswerError::shape(&self.info.name, err.to_string()))?;

        let text = self.extract_text(&body).ok_or_else(|| {
            AnswerError::shape(&self.info.name, "no generated text at any known path")
        })?;

        Ok(RawReply {
            text,
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn openai_chat_envelope_shape() {
        let body = Envelope::OpenAiChat {
            model: "gpt-4o-mini",
        }
        .body("What is 2+2?");

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": "What is 2+2?" }
                ],
                "max_tokens": 500,
                "temperature": 0.7
            })
        );
    }

    #[test]
    fn gemini_envelope_inlines_the_system_prompt() {
        let body = Envelope::GeminiGenerate.body("What is 2+2?");

        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [{
                        "text": format!("{SYSTEM_PROMPT}\n\nUser: What is 2+2?")
                    }]
                }],
                "generationConfig": {
                    "maxOutputTokens": 500,
                    "temperature": 0.7
                }
            })
        );
    }

    #[test]
    fn hf_envelope_shape() {
        let body = Envelope::HfInference.body("What is 2+2?");

        assert_eq!(
            body,
            json!({
                "inputs": "What is 2+2?",
                "parameters": {
                    "max_length": 500,
                    "temperature": 0.7,
                    "do_sample": true
                }
            })
        );
    }

    #[test]
    fn plain_message_envelope_shape() {
        assert_eq!(
            Envelope::PlainMessage.body("What is 2+2?"),
            json!({ "message": "What is 2+2?" })
        );
    }

    #[test]
    fn extraction_respects_priority_order() {
        let provider = catalog::free_llm(catalog::DEFAULT_FREE_LLM_URL);

        let both = json!({ "message": "from message", "response": "from response" });
        assert_eq!(provider.extract_text(&both).as_deref(), Some("from message"));

        let fallback = json!({ "response": "from response" });
        assert_eq!(
            provider.extract_text(&fallback).as_deref(),
            Some("from response")
        );

        let last = json!({ "output": "from output" });
        assert_eq!(provider.extract_text(&last).as_deref(), Some("from output"));
    }

    #[test]
    fn extraction_skips_empty_strings() {
        let provider = catalog::free_llm(catalog::DEFAULT_FREE_LLM_URL);
        let body = json!({ "message": "", "response": "fallback" });
        assert_eq!(provider.extract_text(&body).as_deref(), Some("fallback"));
    }

    #[test]
    fn extraction_handles_hugging_face_array_and_object_shapes() {
        let provider = catalog::hugging_face("key");

        let array = json!([{ "generated_text": "Paris" }]);
        assert_eq!(provider.extract_text(&array).as_deref(), Some("Paris"));

        let object = json!({ "generated_text": "Paris" });
        assert_eq!(provider.extract_text(&object).as_deref(), Some("Paris"));
    }

    #[test]
    fn extraction_fails_on_missing_paths() {
        let provider = catalog::open_ai("key");
        let body = json!({ "choices": [] });
        assert_eq!(provider.extract_text(&body), None);
    }

    #[test]
    fn readiness_tracks_the_credential() {
        assert!(catalog::groq("key").ready());
        assert!(!HttpProvider::new(catalog::groq("x").spec().clone(), None).ready());

        // FreeLLM needs no key at all.
        assert!(catalog::free_llm(catalog::DEFAULT_FREE_LLM_URL).ready());
    }

    #[tokio::test]
    async fn generate_without_credential_fails_synchronously() {
        let provider = HttpProvider::new(catalog::open_ai("x").spec().clone(), None);
        let err = provider.generate("question").await.unwrap_err();
        assert!(matches!(err, AnswerError::CredentialMissing { .. }));
    }
}
