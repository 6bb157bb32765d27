use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::shared::navigation::AppLink;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"404"</h1>
            <h2>"Page not found"</h2>
            <AppLink route=AppRoute::Home class="button button--primary">"Go back to the homepage"</AppLink>
        </div>
    }
}
