// File: helpbot-core/src/services/help/request.rs

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use helpbot_common::models::BotIdentity;
use crate::Error;

static HELP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^help\b\s*(.+)?$")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in help pattern: {}", e))
});

/// Recognizes the bot's address at the start of a message
/// (`@lita: `, `lita, `, `@lita:`, `lita `).
///
/// Built once per identity and reused for every message.
#[derive(Debug, Clone)]
pub struct BotAddress {
    re: Regex,
}

impl BotAddress {
    pub fn new(identity: &BotIdentity) -> Result<Self, Error> {
        let name = regex::escape(identity.address_name());
        let re = RegexBuilder::new(&format!(r"^@?{}(?:[:,]\s*|\s+)", name))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::Config(format!("Cannot build address pattern for '{}': {}", name, e)))?;
        Ok(Self { re })
    }

    /// `text` without a leading address; unchanged when it isn't addressed.
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        match self.re.find(text) {
            Some(m) => &text[m.end()..],
            None => text,
        }
    }
}

/// A parsed `help [FILTER]` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    pub filter: Option<String>,
}

impl HelpRequest {
    /// Returns `None` unless `text` is a help command, optionally addressed
    /// to the bot (`@lita: help ping`, `lita, help`).
    pub fn parse(text: &str, address: &BotAddress) -> Option<HelpRequest> {
        let body = address.strip(text.trim());
        let caps = HELP_PATTERN.captures(body)?;

        let filter = caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|f| !f.is_empty());
        Some(HelpRequest { filter })
    }
}
