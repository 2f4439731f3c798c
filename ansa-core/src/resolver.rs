//! Ordered-fallback resolution across configured providers.
//!
//! The resolver owns an explicit, ordered candidate list and tries it
//! strictly sequentially: the first provider that is ready, replies in
//! time, and yields non-empty text wins. This is an any-first-success
//! policy — answer quality is never compared across providers.

use crate::normalize;
use crate::provider::Provider;
use crate::types::{AiResponse, ProviderStatus};
use std::sync::Arc;

/// Builder for a [`Resolver`] with an explicit, ordered candidate list.
#[derive(Default)]
pub struct ResolverBuilder {
    providers: Vec<Arc<dyn Provider>>,
}

impl ResolverBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate. Position in the list is the fallback order:
    /// an earlier provider wins over a later one whenever both would
    /// succeed.
    pub fn provider<P: Provider>(self, provider: P) -> Self {
        self.provider_arc(Arc::new(provider))
    }

    /// Append an already type-erased candidate
    pub fn provider_arc(mut self, provider: Arc<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Finish building and create a [`Resolver`]
    pub fn finish(self) -> Resolver {
        Resolver {
            providers: self.providers,
        }
    }
}

/// The fallback orchestrator.
///
/// Shares no mutable state between calls: concurrent [`resolve`] calls
/// only read the provider list, so a `Resolver` can sit behind an `Arc`
/// and serve overlapping questions independently.
///
/// [`resolve`]: Resolver::resolve
pub struct Resolver {
    providers: Vec<Arc<dyn Provider>>,
}

impl Resolver {
    /// Create a new builder
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Resolve a question to a canonical answer.
    ///
    /// Candidates are tried one at a time, in order. A candidate that is
    /// not ready is skipped without being invoked; every failure mode of
    /// an invoked candidate (missing credential, network or status error,
    /// malformed response, timeout) is treated identically — logged, then
    /// on to the next candidate. Nothing is retried. A reply whose text is
    /// blank also falls through.
    ///
    /// This function never returns an error: when every candidate fails,
    /// the fixed [`AiResponse::unavailable`] sentinel is returned.
    pub async fn resolve(&self, question: &str) -> AiResponse {
        let request_id = uuid::Uuid::new_v4();
        tracing::debug!(
            %request_id,
            candidates = self.providers.len(),
            "starting fallback resolution"
        );

        for provider in &self.providers {
            let info = provider.info();
            if !provider.ready() {
                tracing::debug!(
                    %request_id,
                    provider = %info.name,
                    "skipped: credential not configured"
                );
                continue;
            }

            match provider.generate(question).await {
                Ok(reply) if reply.text.trim().is_empty() => {
                    tracing::warn!(
                        %request_id,
                        provider = %info.name,
                        "blank reply, trying next candidate"
                    );
                }
                Ok(reply) => {
                    tracing::debug!(
                        %request_id,
                        provider = %info.name,
                        elapsed_ms = reply.elapsed.as_millis() as u64,
                        "provider succeeded"
                    );
                    return normalize::shape(&reply.text, &info.name, reply.elapsed);
                }
                Err(err) => {
                    tracing::warn!(
                        %request_id,
                        provider = %info.name,
                        %err,
                        "provider failed, trying next candidate"
                    );
                }
            }
        }

        tracing::error!(%request_id, "all providers failed");
        AiResponse::unavailable()
    }

    /// Availability report for every configured candidate, in fallback
    /// order.
    pub fn status(&self) -> Vec<ProviderStatus> {
        self.providers
            .iter()
            .map(|provider| {
                let info = provider.info();
                ProviderStatus {
                    name: info.name.clone(),
                    available: provider.ready(),
                    requires_key: info.requires_key,
                }
            })
            .collect()
    }

    /// Number of configured candidates
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the candidate list is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
