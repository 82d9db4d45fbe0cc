//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in itself belongs to the external identity provider, which leaves a
//! bearer token in local storage. This client only reads that token, asks the
//! backend for the matching profile, and exposes "is authenticated" plus the
//! token to route guards and the sync client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, UserProfile};

/// Authentication state tracking the token, profile and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub profile: Option<UserProfile>,
    pub loading: bool,
}

impl AuthState {
    /// State right after reading storage, before the profile request returns.
    pub fn with_token(token: Option<String>) -> Self {
        let token = token.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        let loading = token.is_some();
        Self { token, profile: None, loading }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Role {
        self.profile.as_ref().map(|p| p.role).unwrap_or_default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.uid.as_deref())
    }
}
