// File: helpbot-core/src/registry.rs

use std::sync::Arc;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, info};
use helpbot_common::models::{RawRoute, Route};
use helpbot_common::traits::{CommandRegistry, HasRoutes};
use crate::Error;

/// Route-bearing handlers in registration order.
pub struct HandlerRegistry {
    handlers: RwLock<Vec<Arc<dyn HasRoutes>>>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Appends a handler. Names must be unique.
    pub fn register(&self, handler: Arc<dyn HasRoutes>) -> Result<(), Error> {
        let name = handler.name().to_string();
        let mut handlers = self.handlers.write();

        if handlers.iter().any(|h| h.name() == name) {
            return Err(Error::Registry(format!(
                "Handler with name '{}' already registered",
                name
            )));
        }

        info!(
            "Registering help handler '{}' with {} route(s)",
            name,
            handler.routes().len()
        );
        handlers.push(handler);
        Ok(())
    }

    /// Removes a handler by name and returns it.
    pub fn unregister(&self, name: &str) -> Result<Arc<dyn HasRoutes>, Error> {
        let mut handlers = self.handlers.write();
        let pos = handlers
            .iter()
            .position(|h| h.name() == name)
            .ok_or_else(|| Error::Registry(format!("Handler '{}' not found", name)))?;

        info!("Unregistering help handler '{}'", name);
        Ok(handlers.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl CommandRegistry for HandlerRegistry {
    fn handlers(&self) -> Vec<Arc<dyn HasRoutes>> {
        self.handlers.read().clone()
    }
}

/// A handler whose routes are plain data, e.g. loaded from a JSON table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRouteSet {
    pub name: String,
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct RawRouteSet {
    name: String,
    #[serde(default)]
    routes: Vec<RawRoute>,
}

impl StaticRouteSet {
    pub fn new(name: impl Into<String>, routes: Vec<Route>) -> Self {
        Self {
            name: name.into(),
            routes,
        }
    }

    /// Parses `{"name": ..., "routes": [...]}`. Malformed JSON is a `Json`
    /// error; help entries with a missing label or description are
    /// `InvalidDescriptor`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: RawRouteSet = serde_json::from_str(json)?;
        if raw.name.trim().is_empty() {
            return Err(Error::InvalidDescriptor("route set name must not be empty".into()));
        }
        let routes = raw
            .routes
            .into_iter()
            .map(Route::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded route set '{}' with {} route(s)", raw.name, routes.len());
        Ok(Self::new(raw.name, routes))
    }
}

impl HasRoutes for StaticRouteSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn routes(&self) -> Vec<Route> {
        self.routes.clone()
    }
}
