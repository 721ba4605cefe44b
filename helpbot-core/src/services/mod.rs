// File: src/services/mod.rs

pub mod help;
pub mod help_service;
pub mod message_sender;

pub use help_service::HelpService;
pub use message_sender::{paginate, paginate_with, MessageSender};
