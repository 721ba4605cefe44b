use std::sync::Arc;
use crate::models::command::Route;

/// Capability implemented by every handler that exposes help routes.
///
/// Registries only store values implementing this trait, so there is no
/// need to probe handlers for routes at runtime.
pub trait HasRoutes: Send + Sync {
    /// Unique handler name, used as the registry key.
    fn name(&self) -> &str;

    /// Routes in declaration order.
    fn routes(&self) -> Vec<Route>;
}

/// Source of the currently registered handlers.
pub trait CommandRegistry: Send + Sync {
    /// Handlers in registration order.
    fn handlers(&self) -> Vec<Arc<dyn HasRoutes>>;
}
