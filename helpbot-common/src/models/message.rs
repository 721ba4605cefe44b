use serde::{Deserialize, Serialize};
use crate::models::user::Requester;

/// Where an outbound reply goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub user: Option<String>,
    pub room: Option<String>,
    pub private: bool,
    /// Platform mention string (e.g. `<@1234>`) prepended to each message.
    pub mention: Option<String>,
}

impl Destination {
    /// A direct message to the requester.
    pub fn private_to(requester: &Requester) -> Self {
        Self {
            user: Some(requester.id.clone()),
            room: None,
            private: true,
            mention: None,
        }
    }

    pub fn room(room: impl Into<String>) -> Self {
        Self {
            user: None,
            room: Some(room.into()),
            private: false,
            mention: None,
        }
    }

    pub fn with_mention(mut self, mention: impl Into<String>) -> Self {
        self.mention = Some(mention.into());
        self
    }
}
