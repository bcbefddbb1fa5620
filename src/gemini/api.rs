//! The grounded query operation: send, classify, retry with backoff.

use std::time::Duration;

use tracing::{debug, warn};

use crate::{QueryError, QueryResult, Turn};

use super::client::GeminiClient;

/// Attempts per query, counting the first.
const MAX_ATTEMPTS: u32 = 3;

/// Statuses worth retrying; everything else is terminal.
fn is_retryable(status: u16) -> bool {
    matches!(status, 429 | 500 | 503)
}

/// Exponential backoff between attempts: 1 s, then 2 s.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1 << attempt)
}

impl GeminiClient {
    /// Send one grounded query and return the parsed answer plus citations.
    ///
    /// `history` is read in order; synthetic turns are skipped and `prompt`
    /// is appended as the final user turn. Transient HTTP failures
    /// (429/500/503) are retried up to twice with exponential backoff;
    /// transport and parse failures are terminal. `prompt` must be
    /// non-empty.
    pub async fn query(
        &self,
        prompt: &str,
        history: &[Turn],
        system_instruction: &str,
    ) -> Result<QueryResult, QueryError> {
        if self.config.api_key.is_empty() {
            return Err(QueryError::MissingCredential);
        }

        let url = self.api_url();
        let body = self.build_request_body(prompt, history, system_instruction);

        for attempt in 0..MAX_ATTEMPTS {
            debug!(model = %self.config.model, attempt, "Gemini API request");

            let response = self.transport.send(&url, &body).await?;

            if (200..300).contains(&response.status) {
                let json: serde_json::Value = serde_json::from_str(&response.body)
                    .map_err(|e| QueryError::Unexpected(e.to_string()))?;
                return self.parse_response(json);
            }

            if !is_retryable(response.status) {
                return Err(QueryError::Http(response.status, response.body));
            }

            if attempt + 1 < MAX_ATTEMPTS {
                let delay = backoff_delay(attempt);
                warn!(
                    status = response.status,
                    delay_secs = delay.as_secs(),
                    "retryable Gemini API error, backing off"
                );
                tokio::time::sleep(delay).await;
            }
        }

        Err(QueryError::RetriesExhausted)
    }
}
