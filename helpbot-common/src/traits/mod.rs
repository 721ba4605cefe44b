pub mod auth_traits;
pub mod route_traits;
pub mod transport_traits;

pub use auth_traits::AuthorizationOracle;
pub use route_traits::{CommandRegistry, HasRoutes};
pub use transport_traits::OutboundTransport;
