// File: helpbot-core/src/services/help/mod.rs

pub mod collector;
pub mod filter;
pub mod layout;
pub mod request;

pub use collector::{build_help, is_authorized};
pub use filter::filter_help;
pub use layout::{format_row, TableLayout};
pub use request::{BotAddress, HelpRequest};
