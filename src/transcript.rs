//! Session-scoped conversation store.
//!
//! An append-only sequence of turns owned by the session host. The greeting
//! stays in the transcript for display but is marked synthetic, so request
//! building skips it. Turns are never mutated once appended.

use crate::{QueryError, QueryResult, Turn};

/// Ordered conversation history for one session.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    greeting: Option<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transcript with a greeting shown before any real turn.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        Self {
            turns: vec![Turn::greeting(greeting.clone())],
            greeting: Some(greeting),
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Append a query result as one assistant turn, sources rendered
    /// inline. From here on the sources are opaque text.
    pub fn push_result(&mut self, result: &QueryResult) {
        self.turns.push(Turn::assistant(format_result(result)));
    }

    /// Append a failure's user-visible message in place of an answer, so
    /// every user turn still gets a response in the transcript.
    pub fn push_error(&mut self, error: &QueryError) {
        self.turns.push(Turn::assistant(error.to_string()));
    }

    /// All turns in order, greeting included.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop all turns, re-injecting the greeting if one was configured.
    pub fn clear(&mut self) {
        self.turns.clear();
        if let Some(greeting) = &self.greeting {
            self.turns.push(Turn::greeting(greeting.clone()));
        }
    }
}

/// Render an answer and its sources as a single markdown block.
pub fn format_result(result: &QueryResult) -> String {
    if result.citations.is_empty() {
        return result.answer.clone();
    }

    let lines: Vec<String> = result
        .citations
        .iter()
        .enumerate()
        .map(|(i, citation)| format!("{}. [{}]({})", i + 1, citation.title, citation.uri))
        .collect();

    format!(
        "{}\n\n---\n**Sources Used:**\n{}",
        result.answer,
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Citation, Role};

    fn result_with_sources() -> QueryResult {
        QueryResult {
            answer: "Revenue grew 12% year over year.".to_string(),
            citations: vec![
                Citation {
                    title: "Q3 Report".to_string(),
                    uri: "https://investor.example/q3".to_string(),
                },
                Citation {
                    title: "Link".to_string(),
                    uri: "#".to_string(),
                },
            ],
        }
    }

    #[test]
    fn greeting_is_visible_but_synthetic() {
        let transcript = Transcript::with_greeting("Hello! Ask me about a company.");
        assert_eq!(transcript.len(), 1);

        let greeting = &transcript.turns()[0];
        assert_eq!(greeting.role, Role::Assistant);
        assert!(greeting.synthetic);
    }

    #[test]
    fn result_is_appended_as_rendered_text() {
        let result = result_with_sources();
        let mut transcript = Transcript::with_greeting("Hello!");
        transcript.push_user("Analyze Apple");
        transcript.push_result(&result);

        let last = transcript.turns().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(!last.synthetic);
        assert_eq!(last.text, format_result(&result));
        assert!(last.text.contains("**Sources Used:**"));
        assert!(last.text.contains("1. [Q3 Report](https://investor.example/q3)"));
        assert!(last.text.contains("2. [Link](#)"));
    }

    #[test]
    fn result_without_citations_has_no_sources_block() {
        let result = QueryResult {
            answer: "Just an answer.".to_string(),
            citations: vec![],
        };
        assert_eq!(format_result(&result), "Just an answer.");
    }

    #[test]
    fn error_is_appended_as_assistant_turn() {
        let mut transcript = Transcript::new();
        transcript.push_user("Analyze Apple");
        transcript.push_error(&QueryError::RetriesExhausted);

        let last = transcript.turns().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.text.contains("multiple retries"));
    }

    #[test]
    fn clear_reinjects_greeting() {
        let mut transcript = Transcript::with_greeting("Hello!");
        transcript.push_user("Analyze Apple");
        transcript.push_user("Analyze Tesla");
        transcript.clear();

        assert_eq!(transcript.len(), 1);
        assert!(transcript.turns()[0].synthetic);

        let mut plain = Transcript::new();
        plain.push_user("hi");
        plain.clear();
        assert!(plain.is_empty());
    }
}
