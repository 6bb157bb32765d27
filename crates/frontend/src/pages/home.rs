use contracts::domain::a001_division::Division;
use contracts::domain::a003_tour::TourFilters;
use contracts::system::navigation::AppRoute;
use leptos::prelude::*;
use std::collections::BTreeMap;

use crate::domain::a001_division::api;
use crate::domain::a001_division::ui::select::DivisionSelect;
use crate::shared::navigation::{build_url, use_navigator};

/// Landing page: pick a division, land on the filtered catalog
#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_navigator();
    let divisions = RwSignal::new(Vec::<Division>::new());
    let (loading, set_loading) = signal(true);
    let (selected, set_selected) = signal(String::new());

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_divisions().await {
            Ok(v) => divisions.set(v),
            Err(e) => log::error!("{}", e),
        }
        set_loading.set(false);
    });

    let search = move |_| {
        let division = selected.get();
        if division.is_empty() {
            return;
        }
        let mut filters = TourFilters::from_params(BTreeMap::new());
        filters.set_division(&division);
        nav.navigate_to(&build_url(&AppRoute::Tours.path(), filters.params()));
    };

    view! {
        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "Uncover the Hidden Gems of"
                    <span class="hero__accent">"Bangladesh"</span>
                </h1>
                <p class="hero__lead">
                    "Discover breathtaking landscapes, vibrant culture, and unforgettable adventures. \
                     Your journey through Bangladesh starts here."
                </p>
                <div class="hero__search">
                    <DivisionSelect
                        divisions=divisions
                        value=selected
                        on_change=Callback::new(move |v: String| set_selected.set(v))
                        placeholder="Select a Division..."
                        disabled=loading
                    />
                    <button
                        class="button button--primary"
                        disabled=move || selected.with(String::is_empty)
                        on:click=search
                    >
                        "Search Tours"
                    </button>
                </div>
            </div>
        </section>
    }
}
