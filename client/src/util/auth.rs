//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in user apply identical redirect behavior. The
//! login page itself lives with the external auth collaborator at `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// True once auth has settled without a usable token.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
