//! Interactive Session
//!
//! Line-oriented conversation loop. Reads one line, writes one reply, in
//! strict alternation. The only state is whether the loop is still running.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::BuddyConfig;
use crate::error::Result;
use crate::render;
use crate::router::Router;

const PROMPT: &str = "You: ";

/// What a single input line turns into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line, nothing is printed
    Ignored,
    /// Routed reply
    Reply(String),
    /// Exit word, the session ends
    Exit,
}

/// Why the session stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    ExitWord,
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub replies: usize,
    pub ended_by: EndReason,
}

pub struct Session {
    router: Router,
    exit_words: Vec<String>,
}

impl Session {
    pub fn new(router: Router, config: &BuddyConfig) -> Self {
        Self {
            router,
            exit_words: config.exit_words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    pub fn is_exit_word(&self, line: &str) -> bool {
        let word = line.trim().to_lowercase();
        self.exit_words.iter().any(|w| *w == word)
    }

    pub fn handle_line(&self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() {
            return LineOutcome::Ignored;
        }
        if self.is_exit_word(line) {
            return LineOutcome::Exit;
        }
        LineOutcome::Reply(self.router.route(line))
    }

    /// Run the conversation until an exit word or end of input
    pub async fn run<R, W>(&self, reader: R, writer: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let persona = self.router.persona();
        writer.write_all(render::greeting(persona).as_bytes()).await?;
        writer.write_all(b"\n").await?;

        let mut lines = reader.lines();
        let mut replies = 0;

        let ended_by = loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                writer.write_all(b"\n").await?;
                break EndReason::EndOfInput;
            };

            match self.handle_line(&line) {
                LineOutcome::Ignored => {}
                LineOutcome::Exit => break EndReason::ExitWord,
                LineOutcome::Reply(text) => {
                    writer.write_all(text.as_bytes()).await?;
                    writer.write_all(b"\n\n").await?;
                    replies += 1;
                }
            }
        };

        writer.write_all(render::farewell(persona).as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        tracing::info!(replies, ?ended_by, "session finished");
        Ok(SessionSummary { replies, ended_by })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::model::Dataset;

    fn session() -> Session {
        let config = BuddyConfig::default();
        let dataset = Arc::new(Dataset::reference().unwrap());
        let router = Router::new(dataset, &config).unwrap();
        Session::new(router, &config)
    }

    async fn transcript(input: &str) -> (SessionSummary, String) {
        let session = session();
        let mut out = Vec::new();
        let summary = session.run(input.as_bytes(), &mut out).await.unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_handle_line() {
        let session = session();
        assert_eq!(session.handle_line(""), LineOutcome::Ignored);
        assert_eq!(session.handle_line("   \t"), LineOutcome::Ignored);
        assert_eq!(session.handle_line("exit"), LineOutcome::Exit);
        assert_eq!(session.handle_line("  QUIT "), LineOutcome::Exit);
        assert_eq!(session.handle_line("Bye"), LineOutcome::Exit);
        // Exit words must be the whole line
        assert!(matches!(session.handle_line("exit please"), LineOutcome::Reply(_)));
        assert!(matches!(session.handle_line("list"), LineOutcome::Reply(text) if text.contains("Solana")));
    }

    #[tokio::test]
    async fn test_exit_ends_session() {
        let (summary, out) = transcript("exit\nlist\n").await;
        assert_eq!(summary, SessionSummary { replies: 0, ended_by: EndReason::ExitWord });
        assert!(out.starts_with("Hi! I am CryptoBuddy"));
        assert!(out.trim_end().ends_with("CryptoBuddy: Bye! Good luck and DYOR. 👋"));
        assert!(!out.contains("Here's what I know"));
    }

    #[tokio::test]
    async fn test_blank_lines_are_ignored() {
        let (summary, out) = transcript("\n   \n\nexit\n").await;
        assert_eq!(summary.replies, 0);
        assert!(!out.contains("Sorry, I didn't catch that"));
        assert_eq!(out.matches(PROMPT).count(), 4);
    }

    #[tokio::test]
    async fn test_conversation_transcript() {
        let (summary, out) = transcript("list\n\nWhat's trending up?\nBYE\n").await;
        assert_eq!(summary, SessionSummary { replies: 2, ended_by: EndReason::ExitWord });
        assert!(out.contains("Algorand (ALGO): trend=stable, market=low, energy=low, score=9.0/10\n\n"));
        assert!(out.contains("Bitcoin (BTC) looks strongest"));

        let list_at = out.find("Here's what I know").unwrap();
        let trend_at = out.find("looks strongest").unwrap();
        assert!(list_at < trend_at);
    }

    #[tokio::test]
    async fn test_end_of_input_is_normal_termination() {
        let (summary, out) = transcript("help").await;
        assert_eq!(summary, SessionSummary { replies: 1, ended_by: EndReason::EndOfInput });
        assert!(out.contains("- list all known coins"));
        assert!(out.trim_end().ends_with("DYOR. 👋"));
    }
}
