use async_trait::async_trait;
use crate::error::Error;
use crate::models::message::Destination;

/// Delivers outbound messages to a chat platform.
///
/// Each element of `messages` is sent as a separate message, in order.
#[async_trait]
pub trait OutboundTransport: Send + Sync {
    async fn send_messages(&self, target: &Destination, messages: &[String]) -> Result<(), Error>;
}
