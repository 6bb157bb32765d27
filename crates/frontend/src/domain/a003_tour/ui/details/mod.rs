use contracts::domain::a003_tour::Tour;
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::domain::a001_division::api as division_api;
use crate::domain::a003_tour::api;
use crate::shared::components::loading::{ErrorView, Loading};
use crate::shared::icons::icon;
use crate::shared::navigation::AppLink;
use crate::shared::number_format::format_price;

#[derive(Clone, Debug)]
enum LoadState {
    Loading,
    Missing,
    Failed(String),
    Ready(Tour),
}

/// Shown for unknown ids on the details and booking pages
#[component]
pub fn TourNotFound(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Tour not found"</h1>
            <p>{message}</p>
            <AppLink route=AppRoute::Tours class="button button--primary">"Back to Tours"</AppLink>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TourDetails(id: String) -> impl IntoView {
    let (state, set_state) = signal(LoadState::Loading);
    let (division_name, set_division_name) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_tour(&id).await {
            Ok(Some(tour)) => {
                // A bare id needs one more request for the name
                match tour.division_name() {
                    Some(name) => set_division_name.set(Some(name.to_string())),
                    None => {
                        if let Some(division_id) = tour.division_id() {
                            match division_api::fetch_division_name(division_id).await {
                                Ok(name) => set_division_name.set(name),
                                Err(e) => log::error!("{}", e),
                            }
                        }
                    }
                }
                set_state.set(LoadState::Ready(tour));
            }
            Ok(None) => set_state.set(LoadState::Missing),
            Err(e) => {
                log::error!("{}", e);
                set_state.set(LoadState::Failed(e));
            }
        }
    });

    move || match state.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Missing => view! {
            <TourNotFound message="The tour you are looking for does not exist." />
        }
        .into_any(),
        LoadState::Failed(e) => view! { <ErrorView message=e /> }.into_any(),
        LoadState::Ready(tour) => view! { <TourDetailsView tour=tour division_name=division_name /> }.into_any(),
    }
}

#[component]
fn TourDetailsView(tour: Tour, division_name: ReadSignal<Option<String>>) -> impl IntoView {
    let location = tour.location.clone();
    let price = format_price(tour.cost_from);
    let title = tour.title.clone();

    view! {
        <div class="page page--details">
            <div class="details__main">
                <section class="card">
                    <div class="details__heading">
                        <div>
                            <h1 class="details__title">{tour.title.clone()}</h1>
                            <p class="details__location">
                                {icon("map-pin")}
                                {move || match division_name.get() {
                                    Some(d) => format!("{}, {}", location, d),
                                    None => location.clone(),
                                }}
                            </p>
                        </div>
                        <div class="details__cta">
                            <span class="details__price">{price.clone()}</span>
                            <AppLink route=AppRoute::Booking(tour.id.clone()) class="button button--primary button--large">
                                "Book Now"
                            </AppLink>
                        </div>
                    </div>
                    <p class="details__description">{tour.description.clone()}</p>
                </section>

                <section class="card">
                    <h2 class="card__title">"Image Gallery"</h2>
                    <div class="gallery">
                        {tour.images.iter().enumerate().map(|(i, src)| view! {
                            <img class="gallery__image" src=src.clone() alt=format!("{} image {}", title, i + 1) />
                        }).collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h2 class="card__title">"Tour Plan"</h2>
                    <p class="card__subtitle">"A day-by-day breakdown of your adventure."</p>
                    <ol class="timeline">
                        {tour.tour_plan.iter().enumerate().map(|(i, plan)| view! {
                            <li class="timeline__item">
                                <h3>{format!("Day {}", i + 1)}</h3>
                                <p>{plan.clone()}</p>
                            </li>
                        }).collect_view()}
                    </ol>
                </section>
            </div>

            <aside class="details__sidebar card">
                <h2 class="card__title">"Tour Information"</h2>
                <dl class="facts">
                    <dt>{icon("calendar")}"Duration"</dt>
                    <dd>{format!("{} days", tour.duration_days())}</dd>
                    <dt>"Price per person"</dt>
                    <dd>{format!("From {}", price)}</dd>
                    <dt>{icon("users")}"Max Guests"</dt>
                    <dd>{format!("{} people", tour.max_guests)}</dd>
                    <dt>"Minimum Age"</dt>
                    <dd>{format!("{}+", tour.min_age)}</dd>
                </dl>

                <h3>"What's Included"</h3>
                <ul class="list list--included">
                    {tour.included.iter().map(|item| view! { <li>{icon("check")}{item.clone()}</li> }).collect_view()}
                </ul>

                <h3>"What's Excluded"</h3>
                <ul class="list list--excluded">
                    {tour.excluded.iter().map(|item| view! { <li>{icon("x")}{item.clone()}</li> }).collect_view()}
                </ul>

                <h3>"Amenities"</h3>
                <div class="chips">
                    {tour.amenities.iter().map(|a| view! { <span class="chip">{a.clone()}</span> }).collect_view()}
                </div>
            </aside>
        </div>
    }
}
