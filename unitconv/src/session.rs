//! The request/response loop
//!
//! Each line goes through parse, resolve, validate, convert and report.
//! A rejected line writes its diagnostic and the loop waits for the next
//! one. Nothing is carried from one line to the next.

use std::io::{self, BufRead, Write};
use tracing::{debug, info};
use unitconv_core::ConvertError;
use unitconv_units::{convert, parse_request, Quantity, Unit, UnitCatalog, CATALOG};

/// Written on its own line before every read
pub const PROMPT: &str = "Enter what you want to convert (or exit): ";
/// The exact line that ends the session
pub const EXIT_COMMAND: &str = "exit";

/// Counters reported when a session ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub requests: usize,
    pub conversions: usize,
    pub errors: usize,
}

/// Interactive converter over a read-only unit catalog
pub struct Session<'c> {
    catalog: &'c UnitCatalog,
    prompt: String,
    exit_command: String,
}

impl Session<'static> {
    /// Session over the built-in catalog
    pub fn new() -> Self {
        Self::with_catalog(&CATALOG)
    }
}

impl Default for Session<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Session<'c> {
    pub fn with_catalog(catalog: &'c UnitCatalog) -> Self {
        Self {
            catalog,
            prompt: PROMPT.to_string(),
            exit_command: EXIT_COMMAND.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_exit_command(mut self, command: impl Into<String>) -> Self {
        self.exit_command = command.into();
        self
    }

    /// Answer one request line with the result line or the error to report
    pub fn evaluate(&self, line: &str) -> Result<String, ConvertError> {
        let request = parse_request(line)?;

        let source = self.catalog.lookup(&request.source);
        let target = self.catalog.lookup(&request.target);
        debug!(source = %source, target = %target, "resolved units");

        validate(request.value, source, target)?;

        let converted = convert(request.value, source, target)?;
        debug!(converted, "converted");

        Ok(format!(
            "{} is {}",
            Quantity::new(request.value, source),
            Quantity::new(converted, target)
        ))
    }

    /// Prompt, read and answer lines until the exit command or end of input
    ///
    /// Only I/O failures are returned as errors. Bytes that are not UTF-8
    /// are decoded lossily and the line is answered like any other.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        let mut buf = Vec::new();

        loop {
            writeln!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("end of input");
                break;
            }

            // Malformed UTF-8 becomes U+FFFD; the line is still answered
            let line = String::from_utf8_lossy(&buf);
            let request = strip_line_ending(&line);
            if request == self.exit_command {
                info!("exit requested");
                break;
            }

            stats.requests += 1;
            match self.evaluate(request) {
                Ok(result) => {
                    stats.conversions += 1;
                    writeln!(output, "{}", result)?;
                }
                Err(e) => {
                    stats.errors += 1;
                    debug!(code = e.code(), error = %e, "request rejected");
                    writeln!(output, "{}", e)?;
                }
            }
        }

        output.flush()?;
        Ok(stats)
    }
}

/// An unknown target is only caught through the category mismatch; the
/// unknown-source check covers the case where both sides are unknown.
fn validate(value: f64, source: &Unit, target: &Unit) -> Result<(), ConvertError> {
    if !source.is_compatible(target) || source.is_unknown() {
        return Err(ConvertError::incompatible(source.plural, target.plural));
    }
    if source.category.is_linear() && value < 0.0 {
        return Err(ConvertError::negative(source.category));
    }
    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
