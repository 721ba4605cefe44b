// src/lib.rs

pub mod auth;
pub mod config;
pub mod logging;
pub mod registry;
pub mod services;

pub use helpbot_common::error::Error;
pub use config::{HelpConfig, OverflowPolicy};
pub use registry::{HandlerRegistry, StaticRouteSet};
pub use services::{HelpService, MessageSender};
