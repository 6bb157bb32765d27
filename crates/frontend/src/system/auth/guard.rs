use contracts::system::navigation::{Access, AppRoute};
use leptos::prelude::*;

use super::context::use_auth;
use crate::shared::navigation::use_navigator;

/// Renders `children` only when the signed-in user may open `route`.
///
/// Redirects to the login page without a session and to the 401 page when
/// the role does not match. Until the session check finishes, a cached
/// user is trusted and a missing one shows nothing.
#[component]
pub fn RequireAccess(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let nav = use_navigator();

    let access = {
        let route = route.clone();
        Memo::new(move |_| route.access(auth_state.get().user.as_ref()))
    };

    Effect::new(move |_| {
        let checked = auth_state.with(|s| s.checked);
        match access.get() {
            Access::Granted => {}
            Access::LoginRequired if checked => nav.navigate(&AppRoute::Login),
            Access::LoginRequired => {}
            Access::Forbidden => nav.navigate(&AppRoute::Unauthorized),
        }
    });

    view! {
        <Show when=move || access.get() == Access::Granted>
            {children()}
        </Show>
    }
}
