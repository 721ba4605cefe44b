use serde::{Deserialize, Serialize};

/// Whoever asked for help. Only used to ask the authorization oracle about
/// group membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requester {
    pub id: String,
}

impl Requester {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// How the running bot is addressed on the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub mention_name: Option<String>,
    pub display_name: String,
}

impl BotIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            mention_name: None,
            display_name: display_name.into(),
        }
    }

    pub fn with_mention_name(mut self, mention_name: impl Into<String>) -> Self {
        self.mention_name = Some(mention_name.into());
        self
    }

    /// The name used to address the bot in a command invocation.
    pub fn address_name(&self) -> &str {
        match self.mention_name.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => &self.display_name,
        }
    }
}
