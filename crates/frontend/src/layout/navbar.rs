use contracts::system::navigation::{nav_links, AppRoute};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::navigation::{use_navigator, AppLink};
use crate::shared::toast::use_toast;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Navbar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let nav = use_navigator();

    let links = move || {
        let current = nav.route();
        nav_links(auth_state.get().role())
            .into_iter()
            .map(|link| {
                let class = if link.route == current {
                    "navbar__link navbar__link--active"
                } else {
                    "navbar__link"
                };
                view! { <AppLink route=link.route class=class>{link.label}</AppLink> }
            })
            .collect_view()
    };

    view! {
        <header class="navbar">
            <div class="navbar__inner">
                <AppLink route=AppRoute::Home class="navbar__logo">"Tour Bangladesh"</AppLink>
                <nav class="navbar__links">{links}</nav>
                <UserMenu />
            </div>
        </header>
    }
}

/// Login link, or the user's email with a logout button
#[component]
pub fn UserMenu() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let nav = use_navigator();
    let toast = use_toast();

    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = do_logout(set_auth_state).await {
                log::error!("{}", e);
            }
            toast.info("Logged out");
            nav.navigate(&AppRoute::Home);
        });
    };

    view! {
        <div class="user-menu">
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! {
                    <AppLink route=AppRoute::Login class="button button--primary">"Login"</AppLink>
                }
            >
                <span class="user-menu__email">
                    {move || auth_state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                </span>
                <button class="button button--outline" on:click=logout>"Logout"</button>
            </Show>
        </div>
    }
}
