//! # Ansa Providers
//!
//! Wire adapters for the answer providers Ansa can query.
//!
//! All six providers share one HTTP control flow ([`wire::HttpProvider`]);
//! what differs between them — endpoint, auth convention, request
//! envelope, extraction path — is data, recorded in a [`wire::WireSpec`]
//! per provider in [`catalog`].

pub mod catalog;
pub mod credentials;
pub mod wire;

// Re-exports
pub use catalog::{free_llm, gemini, groq, hugging_face, open_ai, open_router, providers};
pub use credentials::{Credentials, DEFAULT_FREE_LLM_URL};
pub use wire::{AuthStyle, Envelope, HttpProvider, WireSpec};
