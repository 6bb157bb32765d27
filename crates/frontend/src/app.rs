use crate::routes::routes::AppRoutes;
use crate::shared::navigation::Navigator;
use crate::shared::toast::{Toaster, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let navigator = Navigator::new();
    navigator.init_history_integration();
    provide_context(navigator);

    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <Toaster />
        </AuthProvider>
    }
}
