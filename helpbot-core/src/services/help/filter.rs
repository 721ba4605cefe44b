// File: helpbot-core/src/services/help/filter.rs

use regex::{Regex, RegexBuilder};
use crate::Error;
use super::request::BotAddress;

/// Compiles a user-supplied help filter. Matching is case-insensitive.
pub fn compile_filter(pattern: &str) -> Result<Regex, Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidFilterPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Keeps the rows matching `pattern` anywhere in their text, wrapped
/// continuation lines included. A missing or blank pattern keeps everything.
///
/// The filter may be typed with the bot's address in front
/// (`@lita: ping`, `lita, ping`); the address is dropped before compiling.
pub fn filter_help(
    rows: Vec<String>,
    pattern: Option<&str>,
    address: &BotAddress,
) -> Result<Vec<String>, Error> {
    let pattern = match pattern.map(|p| address.strip(p.trim()).trim()) {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(rows),
    };

    let re = compile_filter(pattern)?;
    Ok(rows.into_iter().filter(|row| re.is_match(row)).collect())
}
