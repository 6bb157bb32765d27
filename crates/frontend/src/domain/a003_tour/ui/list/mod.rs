use contracts::domain::a003_tour::{Tour, TourFilters};
use leptos::prelude::*;

use crate::domain::a003_tour::ui::card::TourCard;
use crate::domain::a003_tour::ui::filters::TourFilterPanel;
use crate::domain::a003_tour::api;
use crate::shared::components::loading::ErrorView;
use crate::shared::navigation::use_navigator;

/// Tour catalog filtered by `?division=` and `?tourType=`
#[component]
#[allow(non_snake_case)]
pub fn TourList() -> impl IntoView {
    let nav = use_navigator();
    let filters = Memo::new(move |_| TourFilters::from_params(nav.query()));

    let (tours, set_tours) = signal::<Option<Vec<Tour>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let query = filters.with(|f| f.to_query());
        set_tours.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tours(&query).await {
                Ok(v) => {
                    set_tours.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="page page--catalog">
            <TourFilterPanel />
            <section class="catalog">
                <h1 class="catalog__title">"Explore Our Tours"</h1>
                {move || {
                    if let Some(e) = error.get() {
                        return view! { <ErrorView message=e /> }.into_any();
                    }
                    match tours.get() {
                        None => view! { <p class="catalog__status">"Loading tours..."</p> }.into_any(),
                        Some(list) if list.is_empty() => view! {
                            <p class="catalog__empty">"No tours found matching your criteria."</p>
                        }.into_any(),
                        Some(list) => view! {
                            <div class="catalog__list">
                                {list.into_iter().map(|tour| view! { <TourCard tour=tour /> }).collect_view()}
                            </div>
                        }.into_any(),
                    }
                }}
            </section>
        </div>
    }
}
