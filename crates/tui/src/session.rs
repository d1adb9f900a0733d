/// Identity of the current user, passed explicitly to every component that
/// talks to the service. Nothing reads it from ambient global state, so
/// ownership and lifetime stay visible and components are testable in
/// isolation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
