//! # Ansa Layers
//!
//! Built-in layers for Ansa.
//!
//! Currently implemented layers:
//! - `TimeoutLayer`: Bounds every provider call to a fixed deadline,
//!   converting a hang into an ordinary provider failure
//! - `LoggingLayer`: Logs all provider operations with timing information
//!
//! ## Usage
//!
//! ```ignore
//! use ansa_core::layer::Layer;
//! use ansa_layer::{LoggingLayer, TimeoutLayer};
//!
//! let provider = LoggingLayer::new().layer(TimeoutLayer::new().layer(inner));
//! ```

pub mod logging;
pub mod timeout;

// Re-exports
pub use logging::LoggingLayer;
pub use timeout::{TimeoutLayer, TimeoutProvider, DEFAULT_DEADLINE};
