//! Logging layer for provider operations.

use ansa_core::error::AnswerError;
use ansa_core::layer::{Layer, LayeredProvider};
use ansa_core::provider::Provider;
use ansa_core::types::{ProviderInfo, RawReply};
use async_trait::async_trait;
use std::sync::Arc;

/// Logging layer that logs provider operations.
#[derive(Debug, Clone)]
pub struct LoggingLayer {
    prefix: String,
}

impl LoggingLayer {
    /// Create a new logging layer
    pub fn new() -> Self {
        Self {
            prefix: "[ansa]".to_string(),
        }
    }

    /// Create a logging layer with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Layer<P> for LoggingLayer {
    type LayeredProvider = LoggingProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        LoggingProvider {
            inner,
            prefix: self.prefix.clone(),
        }
    }
}

/// Provider wrapped with logging
#[derive(Debug)]
pub struct LoggingProvider<P> {
    inner: P,
    prefix: String,
}

#[async_trait]
impl<P: Provider> LayeredProvider for LoggingProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_generate(&self, question: &str) -> Result<RawReply, AnswerError> {
        let name = self.inner.info().name.clone();
        tracing::debug!(
            "{} generate request: provider={}, question_chars={}",
            self.prefix,
            name,
            question.chars().count()
        );

        let start = std::time::Instant::now();
        let result = self.inner.generate(question).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::debug!(
                    "{} generate success: provider={}, reply_chars={}, elapsed={:?}",
                    self.prefix,
                    name,
                    reply.text.chars().count(),
                    elapsed
                );
            }
            Err(err) => {
                tracing::warn!(
                    "{} generate error: provider={}, error={}, elapsed={:?}",
                    self.prefix,
                    name,
                    err,
                    elapsed
                );
            }
        }

        result
    }
}

#[async_trait]
impl<P: Provider> Provider for LoggingProvider<P> {
    fn info(&self) -> Arc<ProviderInfo> {
        LayeredProvider::layered_info(self)
    }

    fn ready(&self) -> bool {
        LayeredProvider::layered_ready(self)
    }

    async fn generate(&self, question: &str) -> Result<RawReply, AnswerError> {
        LayeredProvider::layered_generate(self, question).await
    }
}
