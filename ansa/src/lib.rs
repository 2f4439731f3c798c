//! # Ansa
//!
//! Ordered-fallback answer resolution across interchangeable AI providers.
//!
//! Ansa takes a question string, tries a fixed, ordered list of
//! text-generation providers one at a time — each behind a per-call
//! deadline — and returns the first usable reply as a canonical
//! [`AiResponse`], split into an answer line and an explanation. A
//! separate, pure [`highlight()`] pass picks the substring worth
//! emphasizing when the answer is displayed.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! ansa = "0.1"
//! ```
//!
//! ```ignore
//! use ansa::provider::Credentials;
//!
//! # async fn example() {
//! // Read credentials once at startup; providers without one are skipped.
//! let credentials = Credentials::from_env();
//! let resolver = ansa::standard_resolver(&credentials);
//!
//! let response = resolver.resolve("What is the capital of France?").await;
//! println!("{} (via {})", response.answer, response.source);
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Includes `providers` and `layers`
//! - `providers`: The six built-in wire adapters and the standard chain
//! - `layers`: Built-in layers (timeout, logging)
//! - `full`: All features enabled

// Re-export core types and traits
pub use ansa_core::*;

// Re-export providers under `provider` module
#[cfg(feature = "ansa-provider")]
pub mod provider {
    //! Provider wire adapters and credentials.
    pub use ansa_provider::*;
}

// Re-export layers under `layer` module
#[cfg(feature = "ansa-layer")]
pub mod layer {
    //! Built-in middleware layers.
    pub use ansa_layer::*;
}

// Convenience re-exports at root level for common types
pub use ansa_core::{
    error::AnswerError,
    highlight::{clean_answer_text, highlight, Emphasis, Highlight, Span},
    layer::{Layer, LayeredProvider},
    normalize::NO_EXPLANATION,
    provider::Provider,
    resolver::{Resolver, ResolverBuilder},
    types::{AiResponse, ProviderInfo, ProviderStatus, RawReply, SOURCE_ERROR, SOURCE_NONE},
    Result,
};

/// Build the standard resolver: the six built-in providers in fallback
/// order, each behind a [`layer::TimeoutLayer`] and a
/// [`layer::LoggingLayer`].
///
/// Credentials are read once from the given value; a provider whose slot
/// is empty stays in the roster (for status reports) but is never invoked.
#[cfg(all(feature = "ansa-provider", feature = "ansa-layer"))]
pub fn standard_resolver(credentials: &provider::Credentials) -> Resolver {
    use crate::layer::{LoggingLayer, TimeoutLayer};

    let mut builder = Resolver::builder();
    for candidate in provider::providers(credentials) {
        builder = builder.provider(LoggingLayer::new().layer(TimeoutLayer::new().layer(candidate)));
    }
    builder.finish()
}

/// Prelude module for convenient imports
pub mod prelude {
    //! Prelude module containing the most commonly used types and traits.
    //!
    //! ```
    //! use ansa::prelude::*;
    //! ```

    pub use crate::{
        highlight, AiResponse, AnswerError, Emphasis, Highlight, Layer, Provider, ProviderStatus,
        Resolver, Result, Span,
    };

    #[cfg(feature = "ansa-provider")]
    pub use crate::provider::*;

    #[cfg(feature = "ansa-layer")]
    pub use crate::layer::*;
}

#[cfg(all(test, feature = "ansa-provider", feature = "ansa-layer"))]
mod tests {
    use super::*;

    #[test]
    fn standard_resolver_carries_the_full_roster() {
        let resolver = standard_resolver(&provider::Credentials::default());
        assert_eq!(resolver.len(), 6);

        let status = resolver.status();
        let names: Vec<&str> = status.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["FreeLLM", "Groq", "OpenRouter", "Gemini", "HuggingFace", "OpenAI"]
        );

        // Only the keyless provider is available without credentials.
        assert!(status[0].available);
        assert!(status[1..].iter().all(|s| !s.available));
    }
}
