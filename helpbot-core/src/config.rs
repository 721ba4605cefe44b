// File: helpbot-core/src/config.rs

use std::str::FromStr;
use serde::Deserialize;
use tracing::debug;
use helpbot_common::models::BotIdentity;
use crate::Error;

pub const DEFAULT_KEY_WIDTH: usize = 25;
pub const DEFAULT_VALUE_WIDTH: usize = 112;
/// Discord rejects messages over 2000 characters; the rest is headroom for
/// the mention the transport prepends.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 1900;
pub const DEFAULT_EMPTY_REPLY: &str = "No matching commands found.";

/// Characters added around each chunk by "```\n" ... "\n```".
pub const FENCE_OVERHEAD: usize = 8;

/// What the paginator does with a line that cannot fit in one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Surface `Error::UnsplittableSegment` to the caller.
    #[default]
    Fail,
    /// Cut the overlong line at the size limit.
    HardSplit,
}

impl FromStr for OverflowPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "fail" => Ok(OverflowPolicy::Fail),
            "hard_split" => Ok(OverflowPolicy::HardSplit),
            other => Err(format!("unknown overflow policy '{}'", other)),
        }
    }
}

/// Layout and pagination settings for help replies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Width of the command column.
    pub key_width: usize,
    /// Maximum width of a description line.
    pub value_width: usize,
    /// Upper bound (exclusive) on the length of each outbound message.
    pub max_message_length: usize,
    /// Wrap every message in a Markdown code block so the columns line up.
    pub code_fence: bool,
    pub overflow: OverflowPolicy,
    /// Sent instead of a table when no help entry is visible.
    pub empty_reply: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            key_width: DEFAULT_KEY_WIDTH,
            value_width: DEFAULT_VALUE_WIDTH,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            code_fence: true,
            overflow: OverflowPolicy::Fail,
            empty_reply: DEFAULT_EMPTY_REPLY.to_string(),
        }
    }
}

impl HelpConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let cfg: HelpConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads `HELPBOT_*` variables, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, starting from defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = HelpConfig::default();

        if let Some(v) = parse_var(&lookup, "HELPBOT_KEY_WIDTH")? {
            cfg.key_width = v;
        }
        if let Some(v) = parse_var(&lookup, "HELPBOT_VALUE_WIDTH")? {
            cfg.value_width = v;
        }
        if let Some(v) = parse_var(&lookup, "HELPBOT_MAX_MESSAGE_LENGTH")? {
            cfg.max_message_length = v;
        }
        if let Some(v) = parse_var::<bool, _>(&lookup, "HELPBOT_CODE_FENCE")? {
            cfg.code_fence = v;
        }
        if let Some(v) = parse_var(&lookup, "HELPBOT_OVERFLOW")? {
            cfg.overflow = v;
        }
        if let Some(v) = lookup("HELPBOT_EMPTY_REPLY") {
            cfg.empty_reply = v;
        }

        cfg.validate()?;
        debug!("Loaded help config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.value_width == 0 {
            return Err(Error::Config("value_width must be at least 1".into()));
        }
        // Room for at least one character and its newline, plus the fence.
        let minimum = if self.code_fence { FENCE_OVERHEAD + 2 } else { 2 };
        if self.max_message_length < minimum {
            return Err(Error::Config(format!(
                "max_message_length must be at least {} (got {})",
                minimum, self.max_message_length
            )));
        }
        Ok(())
    }

    /// Length limit handed to the paginator, leaving room for the fence.
    pub fn page_length(&self) -> usize {
        if self.code_fence {
            self.max_message_length.saturating_sub(FENCE_OVERHEAD)
        } else {
            self.max_message_length
        }
    }
}

/// Reads `HELPBOT_NAME` (required) and `HELPBOT_MENTION_NAME` (optional).
pub fn bot_identity_from_env() -> Result<BotIdentity, Error> {
    dotenv::dotenv().ok();
    bot_identity_from_lookup(|key| std::env::var(key).ok())
}

pub fn bot_identity_from_lookup<F>(lookup: F) -> Result<BotIdentity, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let name = lookup("HELPBOT_NAME")
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| Error::Config("HELPBOT_NAME is not set".into()))?;

    let mut identity = BotIdentity::new(name);
    if let Some(mention) = lookup("HELPBOT_MENTION_NAME").filter(|m| !m.trim().is_empty()) {
        identity = identity.with_mention_name(mention);
    }
    Ok(identity)
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{}='{}': {}", key, raw, e))),
    }
}
