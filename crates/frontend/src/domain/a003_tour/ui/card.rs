use contracts::domain::a003_tour::Tour;
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::navigation::AppLink;
use crate::shared::number_format::format_price;

const AMENITY_PREVIEW: usize = 3;

/// One tour in the catalog list
#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let (amenities, hidden) = tour.amenity_preview(AMENITY_PREVIEW);
    let amenities = amenities.to_vec();

    let location = match tour.division_name() {
        Some(division) => format!("{}, {}", tour.location, division),
        None => tour.location.clone(),
    };
    let cover = tour.cover_image().map(str::to_string);
    let tour_type = tour.tour_type_name().map(str::to_string);
    let days = tour.duration_days();

    view! {
        <article class="tour-card">
            <div class="tour-card__media">
                {cover.map(|src| view! { <img src=src alt=tour.title.clone() /> })}
                {tour_type.map(|t| view! { <span class="tour-card__tag">{t}</span> })}
            </div>
            <div class="tour-card__body">
                <h2 class="tour-card__title">{tour.title.clone()}</h2>
                <p class="tour-card__location">{icon("map-pin")}{location}</p>
                <p class="tour-card__description">{tour.description.clone()}</p>

                <div class="tour-card__facts">
                    <span>{icon("calendar")}{format!("{} days", days)}</span>
                    <span>{icon("users")}{format!("Max {} guests", tour.max_guests)}</span>
                    <span>{format!("Min Age: {}+", tour.min_age)}</span>
                </div>

                <div class="chips">
                    {amenities.into_iter().map(|a| view! { <span class="chip">{a}</span> }).collect_view()}
                    {(hidden > 0).then(|| view! { <span class="chip">{format!("+{} more", hidden)}</span> })}
                </div>

                <div class="tour-card__footer">
                    <span class="tour-card__price">{format!("From {}", format_price(tour.cost_from))}</span>
                    <AppLink route=AppRoute::TourDetails(tour.id.clone()) class="button button--primary">
                        "View Details"
                    </AppLink>
                </div>
            </div>
        </article>
    }
}
