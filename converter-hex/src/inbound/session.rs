//! Line-driven conversion trigger.
//!
//! Each non-empty input line is one press of the "Convert" button:
//! `<amount> [<source>] [to] [<target>]`. Missing codes fall back to the
//! menu defaults. The display text of every outcome is written back, one
//! line per conversion.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use converter_types::{AuditLog, ConversionRequest, RateProvider};
use exchange_rates::{DEFAULT_SOURCE, DEFAULT_TARGET, normalize};

use crate::ConversionService;

pub const USAGE: &str =
    "Usage: <amount> [<from>] [to] [<to>]   e.g. `100 USD to KZT`; `quit` to exit";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Convert(ConversionRequest),
    Help,
    Quit,
    Empty,
}

/// Counts of outcomes seen during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Reads conversion requests line by line and answers each one.
pub struct ConversionSession<'a, P: RateProvider, L: AuditLog> {
    service: &'a ConversionService<P, L>,
    default_source: String,
    default_target: String,
    prompt: Option<String>,
}

impl<'a, P: RateProvider, L: AuditLog> ConversionSession<'a, P, L> {
    pub fn new(service: &'a ConversionService<P, L>) -> Self {
        Self {
            service,
            default_source: DEFAULT_SOURCE.code().to_string(),
            default_target: DEFAULT_TARGET.code().to_string(),
            prompt: None,
        }
    }

    pub fn with_defaults(mut self, source: &str, target: &str) -> Self {
        self.default_source = normalize(source);
        self.default_target = normalize(target);
        self
    }

    /// Writes `prompt` before reading each line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Parses one input line.
    ///
    /// Returns `Err` with a usage hint when the line has too many currency
    /// codes; such lines are not conversions and are never logged.
    pub fn parse_line(&self, line: &str) -> Result<Command, String> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(Command::Empty);
        };

        match first.to_lowercase().as_str() {
            "quit" | "exit" => return Ok(Command::Quit),
            "help" | "?" => return Ok(Command::Help),
            _ => {}
        }

        let codes: Vec<&str> = tokens.filter(|t| !t.eq_ignore_ascii_case("to")).collect();
        let (source, target) = match codes.as_slice() {
            [] => (self.default_source.clone(), self.default_target.clone()),
            [source] => (normalize(source), self.default_target.clone()),
            [source, target] => (normalize(source), normalize(target)),
            _ => return Err(USAGE.to_string()),
        };

        Ok(Command::Convert(ConversionRequest::new(first, source, target)))
    }

    /// Runs until `quit` or end of input.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut summary = SessionSummary::default();

        loop {
            if let Some(prompt) = &self.prompt {
                writer.write_all(prompt.as_bytes()).await?;
                writer.flush().await?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let reply = match self.parse_line(&line) {
                Ok(Command::Empty) => continue,
                Ok(Command::Quit) => break,
                Ok(Command::Help) => USAGE.to_string(),
                Ok(Command::Convert(req)) => {
                    let outcome = self.service.convert_request(req).await;
                    if outcome.succeeded() {
                        summary.succeeded += 1;
                    } else {
                        summary.failed += 1;
                    }
                    outcome.display_text()
                }
                Err(usage) => usage,
            };

            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }

        tracing::debug!(?summary, "session finished");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_tests::tests::{FixedRates, MemoryLog};

    fn service() -> ConversionService<FixedRates, MemoryLog> {
        ConversionService::new(
            FixedRates::new(&[("KZT", 450.25), ("EUR", 0.5)]),
            MemoryLog::new(),
        )
    }

    #[test]
    fn test_parse_full_line() {
        let service = service();
        let session = ConversionSession::new(&service);
        assert_eq!(
            session.parse_line("100 usd to kzt"),
            Ok(Command::Convert(ConversionRequest::new("100", "USD", "KZT")))
        );
        assert_eq!(
            session.parse_line("  7.5   EUR GBP "),
            Ok(Command::Convert(ConversionRequest::new("7.5", "EUR", "GBP")))
        );
    }

    #[test]
    fn test_parse_applies_defaults() {
        let service = service();
        let session = ConversionSession::new(&service);
        assert_eq!(
            session.parse_line("100"),
            Ok(Command::Convert(ConversionRequest::new("100", "USD", "KZT")))
        );
        assert_eq!(
            session.parse_line("100 EUR"),
            Ok(Command::Convert(ConversionRequest::new("100", "EUR", "KZT")))
        );

        let session = session.with_defaults("gbp", "eur");
        assert_eq!(
            session.parse_line("3"),
            Ok(Command::Convert(ConversionRequest::new("3", "GBP", "EUR")))
        );
    }

    #[test]
    fn test_parse_keywords_and_errors() {
        let service = service();
        let session = ConversionSession::new(&service);
        assert_eq!(session.parse_line(""), Ok(Command::Empty));
        assert_eq!(session.parse_line("   "), Ok(Command::Empty));
        assert_eq!(session.parse_line("QUIT"), Ok(Command::Quit));
        assert_eq!(session.parse_line("exit"), Ok(Command::Quit));
        assert_eq!(session.parse_line("help"), Ok(Command::Help));
        assert_eq!(session.parse_line("1 USD EUR GBP"), Err(USAGE.to_string()));
    }

    #[tokio::test]
    async fn test_run_answers_each_line_until_quit() {
        let service = service();
        let session = ConversionSession::new(&service);

        let input = b"100 USD to KZT\n\nabc USD EUR\n1 USD EUR GBP\nquit\n2 USD EUR\n";
        let mut output = Vec::new();
        let summary = session.run(&input[..], &mut output).await.unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                succeeded: 1,
                failed: 1
            }
        );
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            format!(
                "100 USD = 45025.00 KZT\nAn error occurred during conversion.\n{}\n",
                USAGE
            )
        );
        // Usage errors and lines after `quit` are never logged.
        assert_eq!(service.log().lines().len(), 2);
    }

    #[tokio::test]
    async fn test_run_writes_prompt() {
        let service = service();
        let session = ConversionSession::new(&service).with_prompt("> ");

        let mut output = Vec::new();
        let summary = session.run(&b"2 USD EUR\n"[..], &mut output).await.unwrap();

        assert_eq!(summary.succeeded, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "> 2 USD = 1.00 EUR\n> ");
    }
}
