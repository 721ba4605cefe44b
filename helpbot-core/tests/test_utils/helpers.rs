// File: helpbot-core/tests/test_utils/helpers.rs

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use helpbot_common::models::{BotIdentity, Destination, Route};
use helpbot_common::traits::OutboundTransport;
use helpbot_core::{Error, HandlerRegistry, HelpConfig, HelpService, StaticRouteSet};

pub fn bot() -> BotIdentity {
    BotIdentity::new("Lita").with_mention_name("lita")
}

pub fn help_service(config: HelpConfig) -> Arc<HelpService> {
    Arc::new(HelpService::new(config, bot()).expect("valid help config"))
}

/// help, then karma (one admin-only route), then a plain `deploy` command.
pub fn sample_registry(help: Arc<HelpService>) -> HandlerRegistry {
    let registry = HandlerRegistry::new();
    registry.register(help).expect("register help");

    let karma = StaticRouteSet::new(
        "karma",
        vec![
            Route::new()
                .with_help("TERM++", "Increments TERM by one.").unwrap()
                .with_help("TERM--", "Decrements TERM by one.").unwrap(),
            Route::command()
                .restrict_to(["admins"])
                .with_help("karma delete TERM", "Permanently removes TERM and all its link information.").unwrap(),
        ],
    );
    registry.register(Arc::new(karma)).expect("register karma");

    let deploy = StaticRouteSet::new(
        "deploy",
        vec![Route::command()
            .with_help("deploy APP", "Deploys APP to the staging environment and reports back when done.").unwrap()],
    );
    registry.register(Arc::new(deploy)).expect("register deploy");

    registry
}

/// A registry with `count` commands whose descriptions wrap over several lines.
pub fn large_registry(help: Arc<HelpService>, count: usize) -> HandlerRegistry {
    let registry = HandlerRegistry::new();
    registry.register(help).expect("register help");

    let routes = (0..count)
        .map(|i| {
            Route::command()
                .with_help(
                    format!("command{:03}", i),
                    "Does something moderately useful with the arguments it is given and then \
                     replies in the channel with a summary of what happened along the way.",
                )
                .unwrap()
        })
        .collect();
    registry
        .register(Arc::new(StaticRouteSet::new("bulk", routes)))
        .expect("register bulk");
    registry
}

/// Records every `send_messages` call.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<(Destination, Vec<String>)>>,
}

#[async_trait]
impl OutboundTransport for RecordingTransport {
    async fn send_messages(&self, target: &Destination, messages: &[String]) -> Result<(), Error> {
        self.sent.lock().unwrap().push((target.clone(), messages.to_vec()));
        Ok(())
    }
}

/// Strips the code fence added to each outbound help message.
pub fn unfence(message: &str) -> &str {
    let inner = message
        .strip_prefix("```\n")
        .and_then(|m| m.strip_suffix("```"))
        .expect("message is fenced");
    inner
}
