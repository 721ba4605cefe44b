use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// One `(label, description)` pair describing an invocable command.
///
/// Entries are validated when constructed (or deserialized), so a malformed
/// entry never reaches the layout code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHelpEntry")]
pub struct HelpEntry {
    pub label: String,
    pub description: String,
}

/// Unvalidated shape of a help entry as it appears in a route table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHelpEntry {
    pub label: Option<String>,
    pub description: Option<String>,
}

impl HelpEntry {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Result<Self, Error> {
        let label = label.into();
        let description = description.into();

        if label.trim().is_empty() {
            return Err(Error::InvalidDescriptor("help label must not be empty".into()));
        }
        if label.contains('\n') {
            return Err(Error::InvalidDescriptor(format!(
                "help label '{}' must be a single line",
                label.escape_debug()
            )));
        }

        Ok(Self { label, description })
    }
}

impl TryFrom<RawHelpEntry> for HelpEntry {
    type Error = Error;

    fn try_from(raw: RawHelpEntry) -> Result<Self, Self::Error> {
        let label = raw
            .label
            .ok_or_else(|| Error::InvalidDescriptor("help entry is missing a label".into()))?;
        let description = raw.description.ok_or_else(|| {
            Error::InvalidDescriptor(format!("help entry '{}' has no description", label))
        })?;
        HelpEntry::new(label, description)
    }
}

/// A registered command pattern plus its help metadata and authorization
/// requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute")]
pub struct Route {
    /// Commands are only triggered when the bot is addressed directly
    /// (`@bot: command`), so their help label carries the bot's name.
    pub is_command: bool,

    /// `None` means anyone may use the route.
    pub required_groups: Option<BTreeSet<String>>,

    pub help: Vec<HelpEntry>,
}

/// Unvalidated shape of a route. Loaders deserialize into this and convert
/// with `Route::try_from`, so a bad entry surfaces as `InvalidDescriptor`
/// rather than as a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoute {
    #[serde(default, alias = "command")]
    pub is_command: bool,
    #[serde(default)]
    pub required_groups: Option<BTreeSet<String>>,
    #[serde(default)]
    pub help: Vec<RawHelpEntry>,
}

impl TryFrom<RawRoute> for Route {
    type Error = Error;

    fn try_from(raw: RawRoute) -> Result<Self, Self::Error> {
        let help = raw
            .help
            .into_iter()
            .map(HelpEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            is_command: raw.is_command,
            required_groups: raw.required_groups,
            help,
        })
    }
}

impl Route {
    /// A route that matches any message the bot sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// A route that requires the bot to be addressed.
    pub fn command() -> Self {
        Self {
            is_command: true,
            ..Self::default()
        }
    }

    pub fn restrict_to<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_entry(mut self, entry: HelpEntry) -> Self {
        self.help.push(entry);
        self
    }

    pub fn with_help(
        self,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        Ok(self.with_entry(HelpEntry::new(label, description)?))
    }
}

/// A single help line candidate, flattened out of a route at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub key: String,
    pub description: String,
    pub requires_mention: bool,
    pub required_groups: Option<BTreeSet<String>>,
}

impl CommandDescriptor {
    pub fn from_route(route: &Route, entry: &HelpEntry) -> Self {
        Self {
            key: entry.label.clone(),
            description: entry.description.clone(),
            requires_mention: route.is_command,
            required_groups: route.required_groups.clone(),
        }
    }

    /// Every entry of every route, in declaration order.
    pub fn flatten(routes: &[Route]) -> Vec<CommandDescriptor> {
        routes
            .iter()
            .flat_map(|route| route.help.iter().map(move |entry| Self::from_route(route, entry)))
            .collect()
    }
}
