use crate::models::user::Requester;

/// Answers group-membership questions for the help collector.
///
/// Implemented by whatever owns user roles on the host side (a chat
/// platform's role cache, a static table, ...).
pub trait AuthorizationOracle: Send + Sync {
    fn is_in_group(&self, requester: &Requester, group: &str) -> bool;
}

impl<T: AuthorizationOracle + ?Sized> AuthorizationOracle for std::sync::Arc<T> {
    fn is_in_group(&self, requester: &Requester, group: &str) -> bool {
        (**self).is_in_group(requester, group)
    }
}
