//! Grounded equity research client for the Gemini API.
//!
//! Sends a conversation to the Generative Language API with Google Search
//! grounding enabled and parses the structured answer plus its citation
//! sources:
//! - One async `query` call per user prompt, with bounded retry/backoff
//!   on transient HTTP failures
//! - Conversation history kept in a session-scoped [`Transcript`]
//! - Fixed equity-research system prompt in [`prompts`]

pub mod gemini;
pub mod prompts;
pub mod transcript;

pub use gemini::{GeminiClient, GeminiConfig};
pub use transcript::Transcript;

/// One message in a conversation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// Display-only turns (the session greeting) are never sent to the API.
    #[serde(default)]
    pub synthetic: bool,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            synthetic: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            synthetic: false,
        }
    }

    /// A greeting shown at session start. Kept in the transcript for
    /// display, excluded when request history is built.
    pub fn greeting(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            synthetic: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A web source cited by a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

/// Parsed output of one grounded query.
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub answer: String,
    /// Sources in the order the API returned them (relevance-ranked).
    pub citations: Vec<Citation>,
}

/// Failure modes of a single query. The `Display` strings are the
/// user-visible messages shown in place of an answer; none of these is
/// fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("API key is not configured. Set the GEMINI_API_KEY environment variable.")]
    MissingCredential,
    #[error("An HTTP error occurred ({0}): {1}")]
    Http(u16, String),
    #[error("Failed to get a response from the API after multiple retries.")]
    RetriesExhausted,
    #[error("A connection error occurred: {0}")]
    Connection(String),
    #[error("An unexpected error occurred during API processing: {0}")]
    Unexpected(String),
}
