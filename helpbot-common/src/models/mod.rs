// File: helpbot-common/src/models/mod.rs
pub mod command;
pub mod message;
pub mod user;

pub use command::{CommandDescriptor, HelpEntry, RawHelpEntry, RawRoute, Route};
pub use message::Destination;
pub use user::{BotIdentity, Requester};
