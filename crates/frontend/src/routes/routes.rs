use crate::domain::a001_division::ui::list::DivisionList;
use crate::domain::a002_tour_type::ui::list::TourTypeList;
use crate::domain::a003_tour::ui::add_form::AddTourForm;
use crate::domain::a003_tour::ui::details::TourDetails;
use crate::domain::a003_tour::ui::list::TourList;
use crate::domain::a004_booking::ui::checkout::BookingCheckout;
use crate::domain::a004_booking::ui::history::BookingHistory;
use crate::layout::{DashboardShell, PublicShell};
use crate::pages::about::AboutPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::unauthorized::UnauthorizedPage;
use crate::shared::navigation::use_navigator;
use crate::system::auth::guard::RequireAccess;
use crate::system::pages::login::LoginPage;
use contracts::system::navigation::{AdminPage, AppRoute, UserPage};
use leptos::prelude::*;

fn admin_page(page: AdminPage) -> AnyView {
    match page {
        AdminPage::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AdminPage::AddTour => view! { <AddTourForm /> }.into_any(),
        AdminPage::AddTourType => view! { <TourTypeList /> }.into_any(),
        AdminPage::AddDivision => view! { <DivisionList /> }.into_any(),
    }
}

fn user_page(page: UserPage) -> AnyView {
    match page {
        UserPage::Bookings => view! { <BookingHistory /> }.into_any(),
    }
}

fn public_page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Tours => view! { <TourList /> }.into_any(),
        AppRoute::TourDetails(id) => view! { <TourDetails id=id /> }.into_any(),
        AppRoute::Booking(id) => view! { <BookingCheckout id=id /> }.into_any(),
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Maps the current location onto a page and its shell
#[component]
pub fn AppRoutes() -> impl IntoView {
    let nav = use_navigator();

    move || {
        let route = nav.route();
        log::debug!("route: {:?}", route);

        match route {
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Unauthorized => view! { <UnauthorizedPage /> }.into_any(),
            AppRoute::Admin(page) => {
                let guarded = AppRoute::Admin(page.clone());
                view! {
                    <RequireAccess route=guarded>
                        {
                            let page = page.clone();
                            view! { <DashboardShell>{admin_page(page)}</DashboardShell> }
                        }
                    </RequireAccess>
                }
                .into_any()
            }
            AppRoute::User(page) => {
                let guarded = AppRoute::User(page.clone());
                view! {
                    <RequireAccess route=guarded>
                        {
                            let page = page.clone();
                            view! { <DashboardShell>{user_page(page)}</DashboardShell> }
                        }
                    </RequireAccess>
                }
                .into_any()
            }
            AppRoute::Booking(id) => {
                let guarded = AppRoute::Booking(id.clone());
                view! {
                    <RequireAccess route=guarded>
                        {
                            let route = AppRoute::Booking(id.clone());
                            view! { <PublicShell>{public_page(route)}</PublicShell> }
                        }
                    </RequireAccess>
                }
                .into_any()
            }
            route => view! { <PublicShell>{public_page(route)}</PublicShell> }.into_any(),
        }
    }
}
