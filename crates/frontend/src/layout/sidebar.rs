//! Dashboard sidebar built from the signed-in user's role

use contracts::system::navigation::{sidebar_items, AppRoute};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::navigation::{use_navigator, AppLink};
use crate::system::auth::context::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let nav = use_navigator();

    let groups = move || {
        let current = nav.route();
        sidebar_items(auth_state.get().role())
            .into_iter()
            .map(|group| {
                let items = group
                    .items
                    .into_iter()
                    .map(|item| {
                        let class = if item.route == current {
                            "sidebar__item sidebar__item--active"
                        } else {
                            "sidebar__item"
                        };
                        view! { <AppLink route=item.route class=class>{item.title}</AppLink> }
                    })
                    .collect_view();
                view! {
                    <div class="sidebar__group">
                        <div class="sidebar__group-title">{group.title}</div>
                        {items}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <aside class="sidebar">
            <AppLink route=AppRoute::Home class="sidebar__logo">
                {icon("dashboard")}
                "Tour Bangladesh"
            </AppLink>
            <nav class="sidebar__nav">{groups}</nav>
        </aside>
    }
}
