//! Request parsing - split lines like "5 km to miles" or "3 lb in kg"

use serde::{Serialize, Deserialize};
use tracing::debug;
use unitconv_core::{parse_decimal, ConvertError};

/// Keyword that switches the delimiter from " to" to " in"
const IN_KEYWORD: &str = "in";
const IN_DELIMITER: &str = " in";
const TO_DELIMITER: &str = " to";

/// One parsed request: a value and two normalized unit tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    /// Lowercased, trimmed source unit name
    pub source: String,
    /// Lowercased, trimmed target unit name
    pub target: String,
}

/// Parse one input line
///
/// The line is cut at the first delimiter. The left side is
/// `<number> <unit words>`, the right side is the target unit. The
/// delimiter is " in" when any space-separated word is exactly "in",
/// otherwise " to". This means "10 in to cm" cuts at " in", not " to";
/// that collision with the inch abbreviation is kept as is.
///
/// Only the number can fail to parse. Unit tokens are not validated here.
pub fn parse_request(line: &str) -> Result<ConversionRequest, ConvertError> {
    let delimiter = delimiter_for(line);

    let left = before(line, delimiter);
    let right = after(line, delimiter);

    let value = parse_decimal(before(left, " "))?;
    let source = normalize(after(left, " "));
    let target = normalize(right);

    debug!(value, source = %source, target = %target, delimiter, "parsed request");

    Ok(ConversionRequest { value, source, target })
}

fn delimiter_for(line: &str) -> &'static str {
    if line.split(' ').any(|word| word == IN_KEYWORD) {
        IN_DELIMITER
    } else {
        TO_DELIMITER
    }
}

/// Text before the first `pat`, or all of `s` when absent
fn before<'a>(s: &'a str, pat: &str) -> &'a str {
    s.find(pat).map_or(s, |i| &s[..i])
}

/// Text after the first `pat`, or all of `s` when absent
fn after<'a>(s: &'a str, pat: &str) -> &'a str {
    s.find(pat).map_or(s, |i| &s[i + pat.len()..])
}

fn normalize(token: &str) -> String {
    token.to_lowercase().trim().to_string()
}
