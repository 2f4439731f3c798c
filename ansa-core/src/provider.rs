//! Provider trait and core abstractions.

use crate::error::AnswerError;
use crate::types::{ProviderInfo, RawReply};
use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

/// Core trait for answer providers.
///
/// A provider translates one natural-language question into its own wire
/// request and parses the reply back into raw text. Each implementation is
/// independent and knows nothing about the others; ordering, deadlines and
/// fallback policy live outside, in layers and the resolver.
#[async_trait]
pub trait Provider: Send + Sync + Debug + 'static {
    /// Get provider information
    fn info(&self) -> Arc<ProviderInfo>;

    /// Availability predicate: whether this provider can be attempted at
    /// all (its required credential is configured). Checked synchronously;
    /// must not touch the network. Fixed for the lifetime of the value.
    fn ready(&self) -> bool {
        true
    }

    /// Ask the provider for an answer to `question`.
    ///
    /// Exactly one outbound request per invocation, no retries. The
    /// returned [`RawReply`] carries the latency measured inside the
    /// implementation.
    async fn generate(&self, question: &str) -> Result<RawReply, AnswerError>;
}
