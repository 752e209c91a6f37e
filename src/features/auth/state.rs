//! Auth session state and context for the frontend. The provider reads the
//! server-injected snapshot once on mount and exposes derived auth signals
//! for guards, routes, and the header. Only non-sensitive metadata lives in
//! memory; the session cookie itself remains `HttpOnly`.

use crate::features::auth::{bootstrap, types::UserProfile};
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserProfile>>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<UserProfile>>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().is_some());
        let is_admin = Signal::derive(move || {
            session
                .get()
                .map(|profile| profile.is_admin())
                .unwrap_or(false)
        });
        Self {
            session,
            is_authenticated,
            is_admin,
        }
    }
}

/// Which header controls are visible for a given session snapshot. Exactly
/// one of the two groups is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderControls {
    pub show_login: bool,
    pub show_register: bool,
    pub show_profile: bool,
    pub show_logout: bool,
    pub profile_label: String,
}

impl HeaderControls {
    pub fn for_session(session: Option<&UserProfile>) -> Self {
        match session {
            Some(profile) => Self {
                show_login: false,
                show_register: false,
                show_profile: true,
                show_logout: true,
                profile_label: format!("Profile ({})", profile.username),
            },
            None => Self {
                show_login: true,
                show_register: true,
                show_profile: false,
                show_logout: false,
                profile_label: String::new(),
            },
        }
    }
}

/// Provides auth context from the server-injected snapshot.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(bootstrap::session_snapshot());
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}

#[cfg(test)]
mod tests {
    use super::HeaderControls;
    use crate::features::auth::types::{AccessLevel, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            username: "ivanova".to_string(),
            name: "Anna".to_string(),
            surname: "Ivanova".to_string(),
            patronymic: String::new(),
            access_level: AccessLevel::Reader,
        }
    }

    #[test]
    fn anonymous_session_shows_login_and_register_only() {
        let controls = HeaderControls::for_session(None);
        assert!(controls.show_login);
        assert!(controls.show_register);
        assert!(!controls.show_profile);
        assert!(!controls.show_logout);
    }

    #[test]
    fn authenticated_session_shows_profile_and_logout_only() {
        let profile = profile();
        let controls = HeaderControls::for_session(Some(&profile));
        assert!(!controls.show_login);
        assert!(!controls.show_register);
        assert!(controls.show_profile);
        assert!(controls.show_logout);
    }

    #[test]
    fn profile_label_interpolates_the_username() {
        let profile = profile();
        let controls = HeaderControls::for_session(Some(&profile));
        assert_eq!(controls.profile_label, "Profile (ivanova)");
    }
}
