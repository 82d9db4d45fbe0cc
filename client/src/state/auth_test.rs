use super::*;

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.role(), Role::User);
    assert_eq!(state.user_id(), None);
}

#[test]
fn with_token_waits_for_profile() {
    let state = AuthState::with_token(Some("jwt".to_owned()));
    assert!(state.is_authenticated());
    assert!(state.loading);
}

#[test]
fn blank_token_counts_as_signed_out() {
    let state = AuthState::with_token(Some("  ".to_owned()));
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn role_and_user_id_come_from_profile() {
    let state = AuthState {
        token: Some("jwt".to_owned()),
        profile: Some(UserProfile { uid: Some("u1".to_owned()), role: Role::Organizer, ..UserProfile::default() }),
        loading: false,
    };
    assert_eq!(state.role(), Role::Organizer);
    assert_eq!(state.user_id(), Some("u1"));
}
