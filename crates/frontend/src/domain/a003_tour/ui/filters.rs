use contracts::domain::a001_division::Division;
use contracts::domain::a002_tour_type::TourType;
use contracts::domain::a003_tour::TourFilters;
use leptos::prelude::*;

use crate::domain::a001_division::api as division_api;
use crate::domain::a001_division::ui::select::DivisionSelect;
use crate::domain::a002_tour_type::api as tour_type_api;
use crate::domain::a002_tour_type::ui::select::TourTypeSelect;
use crate::shared::icons::icon;
use crate::shared::navigation::use_navigator;

/// Division and tour type selects kept in the URL query string
#[component]
pub fn TourFilterPanel() -> impl IntoView {
    let nav = use_navigator();
    let filters = Memo::new(move |_| TourFilters::from_params(nav.query()));

    let divisions = RwSignal::new(Vec::<Division>::new());
    let tour_types = RwSignal::new(Vec::<TourType>::new());
    let (divisions_loading, set_divisions_loading) = signal(true);
    let (tour_types_loading, set_tour_types_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match division_api::fetch_divisions().await {
            Ok(v) => divisions.set(v),
            Err(e) => log::error!("{}", e),
        }
        set_divisions_loading.set(false);
    });
    wasm_bindgen_futures::spawn_local(async move {
        match tour_type_api::fetch_tour_type_options().await {
            Ok(v) => tour_types.set(v),
            Err(e) => log::error!("{}", e),
        }
        set_tour_types_loading.set(false);
    });

    let apply = move |change: &dyn Fn(&mut TourFilters)| {
        let mut next = filters.get_untracked();
        change(&mut next);
        nav.set_query(next.params());
    };

    let on_division = Callback::new(move |value: String| apply(&|f| f.set_division(&value)));
    let on_tour_type = Callback::new(move |value: String| apply(&|f| f.set_tour_type(&value)));

    view! {
        <aside class="filter-panel">
            <div class="filter-panel__header">
                <h2 class="filter-panel__title">"Filters"</h2>
                <button
                    class="button button--ghost button--small"
                    disabled=move || !filters.with(|f| f.is_active())
                    on:click=move |_| apply(&|f| f.clear())
                >
                    {icon("x")}
                    "Clear all"
                </button>
            </div>
            <div class="form-group">
                <label>"Division to visit"</label>
                <DivisionSelect
                    divisions=divisions
                    value=Signal::derive(move || filters.with(|f| f.division().unwrap_or_default().to_string()))
                    on_change=on_division
                    disabled=divisions_loading
                />
            </div>
            <div class="form-group">
                <label>"Tour Type"</label>
                <TourTypeSelect
                    tour_types=tour_types
                    value=Signal::derive(move || filters.with(|f| f.tour_type().unwrap_or_default().to_string()))
                    on_change=on_tour_type
                    disabled=tour_types_loading
                />
            </div>
        </aside>
    }
}
