use crate::core::models::User;

/// What the auth gate knows about the session: the latest user the provider
/// reported and whether the first report is still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    fetching: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self { user: None, fetching: true }
    }

    // Only ever clears `fetching`; once the first report is in, later
    // sign-in/sign-out transitions never bring the loading state back
    pub fn observe(&mut self, user: Option<User>) {
        match (&self.user, &user) {
            (None, Some(next)) => log::info!("Signed in as {}", next.label()),
            (Some(_), None) => log::info!("Signed out"),
            _ => {}
        }
        self.user = user;
        self.fetching = false;
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(uid: &str) -> User {
        User {
            uid: uid.to_string(),
            email: None,
            display_name: None,
        }
    }

    #[test]
    fn starts_fetching_without_a_user() {
        let state = AuthState::new();
        assert!(state.is_fetching());
        assert!(!state.is_signed_in());
    }

    #[test]
    fn first_report_ends_fetching_even_when_signed_out() {
        let mut state = AuthState::new();
        state.observe(None);
        assert!(!state.is_fetching());
        assert!(!state.is_signed_in());
    }

    #[test]
    fn loading_never_returns_after_first_report() {
        let mut state = AuthState::new();
        let reports = [Some(user("a")), None, Some(user("b")), Some(user("b")), None];
        for report in reports {
            state.observe(report.clone());
            assert!(!state.is_fetching());
            assert_eq!(state.user(), report.as_ref());
        }
    }
}
