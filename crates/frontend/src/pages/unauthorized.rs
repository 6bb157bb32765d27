use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::shared::navigation::AppLink;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1 class="status-page__code">"401"</h1>
            <h2>"Unauthorized Access"</h2>
            <p>"It looks like you don't have permission to view this page. Don't worry, it happens!"</p>
            <AppLink route=AppRoute::Home class="button button--primary">"Go back to the homepage"</AppLink>
        </div>
    }
}
