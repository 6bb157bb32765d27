use contracts::system::auth::{Role, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// Set once the backend has confirmed (or rejected) the session
    pub checked: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::get_user(),
        checked: false,
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    // Confirm the cached user against the session cookie
    spawn_local(async move {
        refresh_user(set_auth_state).await;
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reload the current user from the backend
pub async fn refresh_user(set_auth_state: WriteSignal<AuthState>) {
    match api::get_current_user().await {
        Ok(user) => {
            storage::save_user(&user);
            set_auth_state.set(AuthState {
                user: Some(user),
                checked: true,
            });
        }
        Err(e) => {
            log::debug!("no active session: {}", e);
            storage::clear_user();
            set_auth_state.set(AuthState {
                user: None,
                checked: true,
            });
        }
    }
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<UserInfo, String> {
    api::login(email, password).await?;
    let user = api::get_current_user().await?;

    storage::save_user(&user);
    set_auth_state.set(AuthState {
        user: Some(user.clone()),
        checked: true,
    });
    log::info!("signed in as {}", user.email);

    Ok(user)
}

/// Helper: Perform logout
///
/// Local state is cleared even when the backend call fails.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) -> Result<(), String> {
    let result = api::logout().await;

    storage::clear_user();
    set_auth_state.set(AuthState {
        user: None,
        checked: true,
    });

    result
}
