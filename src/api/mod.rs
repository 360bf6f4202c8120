//! API client modules for external service integrations.
//!
//! Currently hosts the Gemini client used by the AI study assistant. The
//! API key is kept in encrypted secret storage and never written to the
//! configuration file.

pub mod gemini;

pub use gemini::GeminiConfig;
