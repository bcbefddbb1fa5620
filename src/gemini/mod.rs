//! Google Gemini API client with search grounding.
//!
//! One `query` call per user prompt via the Generative Language API,
//! with retry/backoff on transient failures.

mod api;
mod client;
mod config;
pub(crate) mod transport;

pub use client::GeminiClient;
pub use config::GeminiConfig;
