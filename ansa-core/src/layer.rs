//! Layer trait and abstractions.
//!
//! Layers provide a composable way to wrap providers with cross-cutting
//! concerns like deadlines and logging. Each layer wraps an inner provider
//! and returns a new provider with the added behavior.

use crate::error::AnswerError;
use crate::provider::Provider;
use crate::types::{ProviderInfo, RawReply};
use async_trait::async_trait;
use std::sync::Arc;

/// Layer trait for wrapping providers.
///
/// This trait allows composing providers with middleware-like
/// functionality. Each layer wraps an inner provider and returns a new
/// provider with enhanced capabilities.
pub trait Layer<P: Provider> {
    /// The type of the layered provider
    type LayeredProvider: Provider;

    /// Wrap the inner provider with this layer
    fn layer(&self, inner: P) -> Self::LayeredProvider;
}

/// Helper trait for layered providers.
///
/// This trait provides default forwarding implementations for provider
/// methods. Implementers only need to override the methods they want to
/// intercept.
#[async_trait]
pub trait LayeredProvider: Sized + Provider {
    /// The inner provider type
    type Inner: Provider;

    /// Get a reference to the inner provider
    fn inner(&self) -> &Self::Inner;

    /// Default implementation for info - forwards to inner
    fn layered_info(&self) -> Arc<ProviderInfo> {
        self.inner().info()
    }

    /// Default implementation for ready - forwards to inner
    fn layered_ready(&self) -> bool {
        self.inner().ready()
    }

    /// Default implementation for generate - forwards to inner
    async fn layered_generate(&self, question: &str) -> Result<RawReply, AnswerError> {
        self.inner().generate(question).await
    }
}

/// Macro to implement Provider trait by forwarding to LayeredProvider methods.
///
/// This reduces boilerplate for non-generic layered providers.
#[macro_export]
macro_rules! impl_layered_provider {
    ($type:ty) => {
        #[async_trait::async_trait]
        impl $crate::provider::Provider for $type {
            fn info(&self) -> std::sync::Arc<$crate::types::ProviderInfo> {
                $crate::layer::LayeredProvider::layered_info(self)
            }

            fn ready(&self) -> bool {
                $crate::layer::LayeredProvider::layered_ready(self)
            }

            async fn generate(
                &self,
                question: &str,
            ) -> Result<$crate::types::RawReply, $crate::error::AnswerError> {
                $crate::layer::LayeredProvider::layered_generate(self, question).await
            }
        }
    };
}
