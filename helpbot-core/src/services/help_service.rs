use tracing::{debug, info};
use helpbot_common::models::{BotIdentity, Destination, Requester, Route};
use helpbot_common::traits::{AuthorizationOracle, CommandRegistry, HasRoutes};
use crate::config::HelpConfig;
use crate::services::help::{self, BotAddress, HelpRequest, TableLayout};
use crate::services::message_sender::{paginate_with, MessageSender};
use crate::Error;

pub const HELP_HANDLER_NAME: &str = "help";

/// Online help about the bot's commands.
///
/// Registered like any other handler so its own `help` routes show up in
/// the table too.
pub struct HelpService {
    config: HelpConfig,
    identity: BotIdentity,
    address: BotAddress,
    layout: TableLayout,
    routes: Vec<Route>,
}

impl HelpService {
    pub fn new(config: HelpConfig, identity: BotIdentity) -> Result<Self, Error> {
        config.validate()?;
        debug!("Initializing HelpService for '{}'", identity.address_name());

        let routes = vec![Route::command()
            .with_help(
                "help",
                "Lists help information for terms and commands the robot will respond to.",
            )?
            .with_help(
                "help COMMAND",
                "Lists help information for terms or commands that match COMMAND.",
            )?];

        Ok(Self {
            layout: TableLayout::from(&config),
            address: BotAddress::new(&identity)?,
            config,
            identity,
            routes,
        })
    }

    pub fn config(&self) -> &HelpConfig {
        &self.config
    }

    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    /// All rows visible to `requester`, unfiltered.
    pub fn build_help(
        &self,
        requester: &Requester,
        registry: &dyn CommandRegistry,
        oracle: &dyn AuthorizationOracle,
    ) -> Vec<String> {
        help::build_help(requester, registry, oracle, &self.identity, self.layout)
    }

    pub fn filter_help(&self, rows: Vec<String>, pattern: Option<&str>) -> Result<Vec<String>, Error> {
        help::filter_help(rows, pattern, &self.address)
    }

    /// Builds, filters and paginates the help table into ready-to-send
    /// messages.
    pub fn render(
        &self,
        requester: &Requester,
        registry: &dyn CommandRegistry,
        oracle: &dyn AuthorizationOracle,
        filter: Option<&str>,
    ) -> Result<Vec<String>, Error> {
        let rows = self.build_help(requester, registry, oracle);
        let rows = self.filter_help(rows, filter)?;

        if rows.is_empty() {
            debug!("No help rows left after filter {:?}", filter);
            return Ok(vec![self.config.empty_reply.clone()]);
        }

        let block = rows.join("\n");
        let chunks = paginate_with(&block, self.config.page_length(), self.config.overflow)?;

        if self.config.code_fence {
            Ok(chunks.iter().map(|c| fence(c)).collect())
        } else {
            Ok(chunks)
        }
    }

    /// Renders help for `requester` and sends it to them privately.
    pub async fn respond(
        &self,
        sender: &MessageSender,
        requester: &Requester,
        registry: &dyn CommandRegistry,
        oracle: &dyn AuthorizationOracle,
        filter: Option<&str>,
    ) -> Result<(), Error> {
        let messages = self.render(requester, registry, oracle, filter)?;
        info!(
            "Replying to '{}' with {} help message(s) (filter={:?})",
            requester.id,
            messages.len(),
            filter
        );
        sender
            .send_chunks(&Destination::private_to(requester), messages)
            .await
    }

    /// Answers `text` if it is a help command. Returns whether it was.
    pub async fn handle_message(
        &self,
        sender: &MessageSender,
        requester: &Requester,
        registry: &dyn CommandRegistry,
        oracle: &dyn AuthorizationOracle,
        text: &str,
    ) -> Result<bool, Error> {
        let request = match HelpRequest::parse(text, &self.address) {
            Some(r) => r,
            None => return Ok(false),
        };
        self.respond(sender, requester, registry, oracle, request.filter.as_deref())
            .await?;
        Ok(true)
    }
}

impl HasRoutes for HelpService {
    fn name(&self) -> &str {
        HELP_HANDLER_NAME
    }

    fn routes(&self) -> Vec<Route> {
        self.routes.clone()
    }
}

/// Wraps a chunk in a Markdown code block. Adds at most
/// `config::FENCE_OVERHEAD` characters.
pub fn fence(chunk: &str) -> String {
    if chunk.ends_with('\n') {
        format!("```\n{}```", chunk)
    } else {
        format!("```\n{}\n```", chunk)
    }
}
