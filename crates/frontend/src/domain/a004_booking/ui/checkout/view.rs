use leptos::ev;
use leptos::prelude::*;

use super::view_model::{BookingViewModel, LoadState};
use crate::domain::a003_tour::ui::details::TourNotFound;
use crate::shared::components::loading::{ErrorView, Loading};
use crate::shared::date_utils::format_date_range;
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use crate::shared::toast::{use_toast, ToastService};

#[component]
pub fn BookingCheckout(id: String) -> impl IntoView {
    let vm = BookingViewModel::new();
    let toast = use_toast();
    vm.load(id.clone());

    // Price or capacity may have changed while the payment tab was open
    let handle = window_event_listener(ev::focus, move |_| vm.load(id.clone()));
    on_cleanup(move || handle.remove());

    move || match vm.state.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Missing => view! {
            <TourNotFound message="The tour you are trying to book does not exist." />
        }
        .into_any(),
        LoadState::Failed(e) => view! { <ErrorView message=e /> }.into_any(),
        LoadState::Ready => view! { <BookingPanels vm=vm toast=toast /> }.into_any(),
    }
}

#[component]
fn BookingPanels(vm: BookingViewModel, toast: ToastService) -> impl IntoView {
    let summary = move || {
        vm.tour.get().map(|tour| {
            let dates = format_date_range(tour.start_date.as_ref(), tour.end_date.as_ref());
            view! {
                <section class="card booking__summary">
                    {tour.cover_image().map(|src| view! {
                        <img class="booking__cover" src=src.to_string() alt=tour.title.clone() />
                    })}
                    <h1 class="card__title">{tour.title.clone()}</h1>
                    <p class="card__subtitle">{tour.description.clone()}</p>
                    <p class="booking__fact">{icon("calendar")}{dates}</p>
                    <p class="booking__fact">{icon("users")}{format!("Max {} guests", tour.max_guests)}</p>
                    <h3>"Inclusions"</h3>
                    <ul class="list list--included">
                        {tour.included.iter().map(|i| view! { <li>{icon("check")}{i.clone()}</li> }).collect_view()}
                    </ul>
                    <h3>"Tour Plan"</h3>
                    <ul class="list">
                        {tour.tour_plan.iter().enumerate().map(|(n, plan)| view! {
                            <li><strong>{format!("Day {}:", n + 1)}</strong>" "{plan.clone()}</li>
                        }).collect_view()}
                    </ul>
                </section>
            }
        })
    };

    let unit_price = move || {
        vm.selection
            .with(|s| s.as_ref().map(|s| s.selector().unit_price()).unwrap_or(0.0))
    };

    view! {
        <div class="page page--booking">
            {summary}

            <section class="card booking__form">
                <h2 class="card__title">"Confirm Your Booking"</h2>
                <p class="card__subtitle">"Enter the number of guests to see your total amount."</p>

                <div class="guest-selector">
                    <label>"Number of Guests"</label>
                    <div class="guest-selector__controls">
                        <button
                            type="button"
                            class="button button--icon button--outline"
                            disabled=move || !vm.can_decrement()
                            on:click=move |_| vm.decrement()
                        >
                            {icon("minus")}
                        </button>
                        <span class="guest-selector__value">{move || vm.guests()}</span>
                        <button
                            type="button"
                            class="button button--icon button--outline"
                            disabled=move || !vm.can_increment()
                            on:click=move |_| vm.increment()
                        >
                            {icon("plus")}
                        </button>
                    </div>
                </div>

                <div class="booking__line">
                    <span>"Price per person"</span>
                    <span>{move || format_price(unit_price())}</span>
                </div>
                <div class="booking__line">
                    <span>"Guests"</span>
                    <span>{move || vm.guests()}</span>
                </div>
                <div class="booking__line booking__line--total">
                    <span>"Total Amount"</span>
                    <span>{move || format_price(vm.total())}</span>
                </div>

                <button
                    class="button button--primary button--block button--large"
                    disabled=move || vm.is_submitting.get()
                    on:click=move |_| vm.checkout_command(toast)
                >
                    {move || if vm.is_submitting.get() { "Processing..." } else { "Proceed to Payment" }}
                </button>
            </section>
        </div>
    }
}
