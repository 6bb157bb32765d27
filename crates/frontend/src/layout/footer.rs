use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::shared::navigation::AppLink;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <nav class="footer__links">
                <AppLink route=AppRoute::About>"About"</AppLink>
                <AppLink route=AppRoute::Tours>"Tours"</AppLink>
            </nav>
            <p class="footer__copy">{format!("© {} Tour Bangladesh", year)}</p>
        </footer>
    }
}
