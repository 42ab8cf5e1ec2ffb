/// Read-only view of the authentication state, sampled at call time.
pub trait Session: Send + Sync {
    fn current_user_id(&self) -> Option<String>;

    fn is_authenticated(&self) -> bool {
        self.current_user_id().is_some()
    }
}

/// Fixed session value, mainly for tests and tooling.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        StaticSession { user_id: None }
    }

    pub fn user(id: impl Into<String>) -> Self {
        StaticSession {
            user_id: Some(id.into()),
        }
    }
}

impl Session for StaticSession {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}
