//! # Ansa Core
//!
//! Core abstractions and the fallback resolver for Ansa.
//!
//! This crate provides the foundational traits and types for resolving a
//! question against an ordered list of interchangeable answer providers:
//! the [`Provider`] trait, middleware [`Layer`]s, the sequential-fallback
//! [`Resolver`], response normalization, and heuristic answer
//! highlighting.

pub mod error;
pub mod highlight;
pub mod layer;
pub mod normalize;
pub mod provider;
pub mod resolver;
pub mod types;

// Re-exports
pub use error::AnswerError;
pub use highlight::{clean_answer_text, highlight, Emphasis, Highlight, Span};
pub use layer::{Layer, LayeredProvider};
pub use provider::Provider;
pub use resolver::{Resolver, ResolverBuilder};
pub use types::*;

/// Result type alias for answer operations
pub type Result<T> = std::result::Result<T, AnswerError>;
