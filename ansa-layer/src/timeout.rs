//! Timeout layer bounding every provider call to a fixed deadline.

use ansa_core::error::AnswerError;
use ansa_core::layer::{Layer, LayeredProvider};
use ansa_core::provider::Provider;
use ansa_core::types::{ProviderInfo, RawReply};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Default per-call deadline, shared by every provider.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// Timeout layer configuration
#[derive(Debug, Clone)]
pub struct TimeoutLayer {
    deadline: Duration,
}

impl TimeoutLayer {
    /// Create a new timeout layer with the default deadline
    pub fn new() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

impl Default for TimeoutLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Layer<P> for TimeoutLayer {
    type LayeredProvider = TimeoutProvider<P>;

    fn layer(&self, inner: P) -> Self::LayeredProvider {
        TimeoutProvider {
            inner,
            deadline: self.deadline,
        }
    }
}

/// Provider wrapped with a per-call deadline.
///
/// When the deadline fires, the inner call's future is dropped, which
/// cancels the in-flight request rather than leaving it running to
/// completion in the background.
#[derive(Debug)]
pub struct TimeoutProvider<P> {
    inner: P,
    deadline: Duration,
}

#[async_trait]
impl<P: Provider> LayeredProvider for TimeoutProvider<P> {
    type Inner = P;

    fn inner(&self) -> &Self::Inner {
        &self.inner
    }

    async fn layered_generate(&self, question: &str) -> Result<RawReply, AnswerError> {
        match tokio::time::timeout(self.deadline, self.inner.generate(question)).await {
            Ok(result) => result,
            Err(_) => {
                let name = self.inner.info().name.clone();
                tracing::debug!(provider = %name, deadline = ?self.deadline, "deadline elapsed");
                Err(AnswerError::timeout(name, self.deadline))
            }
        }
    }
}

#[async_trait]
impl<P: Provider> Provider for TimeoutProvider<P> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StallingProvider {
        info: Arc<ProviderInfo>,
        stall: Option<Duration>,
    }

    impl StallingProvider {
        fn new(stall: Option<Duration>) -> Self {
            Self {
                info: Arc::new(ProviderInfo {
                    id: "stalling".to_string(),
                    name: "Stalling".to_string(),
                    requires_key: false,
                }),
                stall,
            }
        }
    }

    #[async_trait]
    impl Provider for StallingProvider {
        fn info(&self) -> Arc<ProviderInfo> {
            self.info.clone()
        }

        async fn generate(&self, _question: &str) -> Result<RawReply, AnswerError> {
            match self.stall {
                Some(delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(RawReply {
                        text: "late".to_string(),
                        elapsed: delay,
                    })
                }
                None => {
                    futures::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn never_resolving_call_becomes_a_timeout() {
        let provider = TimeoutLayer::new().layer(StallingProvider::new(None));

        let err = provider.generate("question").await.unwrap_err();
        assert!(matches!(
            err,
            AnswerError::Timeout {
                deadline_ms: 10_000,
                ..
            }
        ));
        assert!(err.is_provider_failure());
    }

    #[tokio::test(start_paused = true)]
    async fn fast_call_passes_through() {
        let provider = TimeoutLayer::new()
            .with_deadline(Duration::from_secs(10))
            .layer(StallingProvider::new(Some(Duration::from_millis(50))));

        let reply = provider.generate("question").await.unwrap();
        assert_eq!(reply.text, "late");
    }

    #[tokio::test(start_paused = true)]
    async fn custom_deadline_is_honored() {
        let provider = TimeoutLayer::new()
            .with_deadline(Duration::from_millis(100))
            .layer(StallingProvider::new(Some(Duration::from_millis(500))));

        let err = provider.generate("question").await.unwrap_err();
        assert!(matches!(err, AnswerError::Timeout { deadline_ms: 100, .. }));
    }
}
