// File: helpbot-core/src/services/help/collector.rs

use std::collections::BTreeSet;
use tracing::debug;
use helpbot_common::models::{BotIdentity, CommandDescriptor, Requester};
use helpbot_common::traits::{AuthorizationOracle, CommandRegistry};
use crate::services::help::layout::TableLayout;

/// True if the route is unrestricted or the requester is in at least one
/// of its groups.
pub fn is_authorized(
    oracle: &dyn AuthorizationOracle,
    requester: &Requester,
    required_groups: Option<&BTreeSet<String>>,
) -> bool {
    match required_groups {
        None => true,
        Some(groups) => groups.iter().any(|g| oracle.is_in_group(requester, g)),
    }
}

/// Every help entry the requester may see, formatted as table rows.
///
/// Order is handler registration order, then route order, then entry order.
pub fn build_help(
    requester: &Requester,
    registry: &dyn CommandRegistry,
    oracle: &dyn AuthorizationOracle,
    identity: &BotIdentity,
    layout: TableLayout,
) -> Vec<String> {
    let mut rows = Vec::new();
    let mut hidden = 0usize;

    for handler in registry.handlers() {
        for descriptor in CommandDescriptor::flatten(&handler.routes()) {
            if is_authorized(oracle, requester, descriptor.required_groups.as_ref()) {
                rows.push(help_command(&descriptor, identity, layout));
            } else {
                hidden += 1;
            }
        }
    }

    debug!(
        "Built {} help row(s) for requester '{}' ({} hidden)",
        rows.len(),
        requester.id,
        hidden
    );
    rows
}

/// Formats one entry; commands are shown the way they must be typed,
/// i.e. with the bot's name in front.
pub fn help_command(descriptor: &CommandDescriptor, identity: &BotIdentity, layout: TableLayout) -> String {
    if descriptor.requires_mention {
        let key = format!("{}: {}", identity.address_name(), descriptor.key);
        layout.format_row(&key, &descriptor.description)
    } else {
        layout.format_row(&descriptor.key, &descriptor.description)
    }
}
