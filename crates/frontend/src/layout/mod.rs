pub mod footer;
pub mod navbar;
pub mod sidebar;

use footer::Footer;
use leptos::prelude::*;
use navbar::{Navbar, UserMenu};
use sidebar::Sidebar;

/// Public pages: navbar, content, footer
#[component]
pub fn PublicShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}

/// Admin and user dashboards: role sidebar next to the content
#[component]
pub fn DashboardShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout app-layout--dashboard">
            <Sidebar />
            <div class="app-body">
                <header class="app-body__header">
                    <UserMenu />
                </header>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
