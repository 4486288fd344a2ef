//! Shell session handling
//!
//! Reads command lines, dispatches them, and writes the replies.

use crate::dispatch::Dispatcher;
use crate::protocol::{LineParser, ProtocolError, Reply};
use anyhow::{Context, Result};
use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Words that end the session without reaching the store
const EXIT_COMMANDS: [&str; 2] = ["EXIT", "QUIT"];

/// Drop a trailing `\n` or `\r\n`
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Commands dispatched
    pub commands: u64,

    /// Replies that were errors, protocol errors included
    pub errors: u64,
}

/// Interactive shell session
pub struct Session {
    /// Command dispatcher
    dispatcher: Dispatcher,

    /// Prompt written before each line
    prompt: String,

    /// Write buffer
    write_buffer: BytesMut,

    /// Running counters
    summary: SessionSummary,
}

impl Session {
    /// Create a new session
    pub fn new(dispatcher: Dispatcher, prompt: impl Into<String>) -> Self {
        Session {
            dispatcher,
            prompt: prompt.into(),
            write_buffer: BytesMut::with_capacity(4096),
            summary: SessionSummary::default(),
        }
    }

    /// Run the read-eval-print loop until EXIT, QUIT or end of input
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut read_buffer = Vec::with_capacity(1024);

        loop {
            self.send_prompt(writer).await?;

            read_buffer.clear();
            let n = reader
                .read_until(b'\n', &mut read_buffer)
                .await
                .context("failed to read input")?;
            if n == 0 {
                debug!("End of input");
                break;
            }

            let line = strip_line_ending(&read_buffer);
            let parsed = std::str::from_utf8(line)
                .map_err(|_| ProtocolError::InvalidUtf8)
                .and_then(LineParser::parse);

            let tokens = match parsed {
                Ok(Some(tokens)) => tokens,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Protocol error: {}", e);
                    self.summary.errors += 1;
                    let reply = Reply::error(format!("ERR protocol error: {}", e));
                    self.send_reply(writer, &reply).await?;
                    continue;
                }
            };

            if EXIT_COMMANDS.iter().any(|cmd| tokens[0].eq_ignore_ascii_case(cmd)) {
                debug!("Exit requested");
                break;
            }

            let reply = self.dispatcher.dispatch(&tokens);
            self.summary.commands += 1;
            if reply.is_error() {
                self.summary.errors += 1;
            }

            debug!("Reply: {:?}", reply);
            self.send_reply(writer, &reply).await?;
        }

        self.send_text(writer, "bye\n").await?;

        info!(
            "Session closed after {} commands ({} errors)",
            self.summary.commands, self.summary.errors
        );

        Ok(self.summary)
    }

    /// Get the dispatcher (for testing/inspection)
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    async fn send_prompt<W: AsyncWrite + Unpin>(&mut self, writer: &mut W) -> Result<()> {
        if self.prompt.is_empty() {
            return Ok(());
        }
        let prompt = std::mem::take(&mut self.prompt);
        let result = self.send_text(writer, &prompt).await;
        self.prompt = prompt;
        result
    }

    /// Send a reply followed by a newline
    async fn send_reply<W: AsyncWrite + Unpin>(&mut self, writer: &mut W, reply: &Reply) -> Result<()> {
        self.send_text(writer, &format!("{}\n", reply)).await
    }

    async fn send_text<W: AsyncWrite + Unpin>(&mut self, writer: &mut W, text: &str) -> Result<()> {
        self.write_buffer.clear();
        self.write_buffer.put_slice(text.as_bytes());

        writer
            .write_all(&self.write_buffer)
            .await
            .context("failed to write output")?;
        writer.flush().await.context("failed to flush output")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn run_script(script: &str) -> (String, SessionSummary, Session) {
        let mut session = Session::new(Dispatcher::new(), "");
        let mut output = Vec::new();
        let summary = session
            .run(BufReader::new(script.as_bytes()), &mut output)
            .await
            .unwrap();
        (String::from_utf8(output).unwrap(), summary, session)
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let (output, summary, _) = run_script(
            "SET name Alice\nGET name\nDELETE name\nEXISTS name\nDELETE name\nEXIT\n",
        )
        .await;

        assert_eq!(output, "OK\n\"Alice\"\ntrue\nfalse\nfalse\nbye\n");
        assert_eq!(summary, SessionSummary { commands: 5, errors: 0 });
    }

    #[tokio::test]
    async fn test_session_overwrite_and_size() {
        let (output, _, session) = run_script("SET k v1\nSET k v2\nSIZE\nGET k\n").await;

        assert_eq!(output, "OK\nOK\n(integer) 1\n\"v2\"\nbye\n");
        assert_eq!(session.dispatcher().store().get("k"), Some("v2".to_string()));
    }

    #[tokio::test]
    async fn test_session_stops_at_exit() {
        let (output, summary, session) = run_script("SET a 1\nquit\nSET b 2\n").await;

        assert_eq!(output, "OK\nbye\n");
        assert_eq!(summary.commands, 1);
        assert!(!session.dispatcher().store().exists("b"));
    }

    #[tokio::test]
    async fn test_session_skips_blank_lines_and_reports_errors() {
        let (output, summary, _) =
            run_script("\n   \nSET \"\" value\nSET k \"open\nNOPE\nKEYS\n").await;

        assert_eq!(
            output,
            "(error) ERR invalid key: key cannot be empty\n\
             (error) ERR protocol error: unterminated quoted string\n\
             (error) ERR unknown command 'NOPE'\n\
             (empty list)\n\
             bye\n"
        );
        assert_eq!(summary, SessionSummary { commands: 3, errors: 3 });
    }

    #[tokio::test]
    async fn test_session_quoted_values() {
        let (output, _, _) =
            run_script("SET greeting \"hello world\"\nSET empty \"\"\nGET greeting\nGET empty\nKEYS\n")
                .await;

        assert_eq!(
            output,
            "OK\nOK\n\"hello world\"\n\"\"\n1) \"empty\"\n2) \"greeting\"\nbye\n"
        );
    }

    #[tokio::test]
    async fn test_session_survives_invalid_utf8() {
        let mut session = Session::new(Dispatcher::new(), "");
        let mut output = Vec::new();
        let input: &[u8] = b"SET a 1\nSET b \xff\xfe\nSET c 3\r\nSIZE\n";
        let summary = session
            .run(BufReader::new(input), &mut output)
            .await
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "OK\n(error) ERR protocol error: invalid UTF-8\nOK\n(integer) 2\nbye\n"
        );
        assert_eq!(summary, SessionSummary { commands: 3, errors: 1 });

        let store = session.dispatcher().store();
        assert!(store.exists("c"));
        assert!(!store.exists("b"));
    }

    #[tokio::test]
    async fn test_session_last_line_without_newline() {
        let (output, _, session) = run_script("SET a 1\nGET a").await;

        assert_eq!(output, "OK\n\"1\"\nbye\n");
        assert!(session.dispatcher().store().exists("a"));
    }

    #[tokio::test]
    async fn test_session_writes_prompt() {
        let mut session = Session::new(Dispatcher::new(), "> ");
        let mut output = Vec::new();
        session
            .run(BufReader::new(&b"SET a 1\n"[..]), &mut output)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "> OK\n> bye\n");
    }

    #[tokio::test]
    async fn test_session_read_error() {
        let reader = tokio_test::io::Builder::new()
            .read(b"SET a 1\n")
            .read_error(std::io::Error::new(std::io::ErrorKind::Other, "stdin closed"))
            .build();

        let mut session = Session::new(Dispatcher::new(), "");
        let mut output = Vec::new();
        let err = session
            .run(BufReader::new(reader), &mut output)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to read input"));
        assert_eq!(String::from_utf8(output).unwrap(), "OK\n");
    }
}
