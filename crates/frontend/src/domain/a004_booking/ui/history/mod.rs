use contracts::domain::a004_booking::Booking;
use leptos::prelude::*;

use crate::domain::a004_booking::api;
use crate::shared::components::badge::BookingStatusBadge;
use crate::shared::components::loading::{ErrorView, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;

#[component]
#[allow(non_snake_case)]
pub fn BookingHistory() -> impl IntoView {
    let (items, set_items) = signal::<Option<Vec<Booking>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_my_bookings().await {
            Ok(v) => set_items.set(Some(v)),
            Err(e) => {
                log::error!("{}", e);
                set_error.set(Some(e));
            }
        }
    });

    view! {
        <div class="page">
            <PageHeader title="My Bookings" />
            {move || {
                if let Some(e) = error.get() {
                    return view! { <ErrorView message=e /> }.into_any();
                }
                let Some(rows) = items.get() else {
                    return view! { <Loading /> }.into_any();
                };
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Tour"</th>
                                    <th class="table__header-cell">"Guests"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Booked on"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="4">
                                                "You have not booked any tours yet."
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|b| {
                                        let title = b
                                            .tour_title()
                                            .map(str::to_string)
                                            .or_else(|| b.tour.as_ref().map(|t| t.id().to_string()))
                                            .unwrap_or_default();
                                        let booked_on = b.created_at.as_ref().map(format_date).unwrap_or_default();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{title}</td>
                                                <td class="table__cell">{b.guests_count}</td>
                                                <td class="table__cell"><BookingStatusBadge status=b.status /></td>
                                                <td class="table__cell">{booked_on}</td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
