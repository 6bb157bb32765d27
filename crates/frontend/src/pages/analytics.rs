use leptos::prelude::*;

use crate::domain::a001_division::api as division_api;
use crate::domain::a002_tour_type::api as tour_type_api;
use crate::domain::a003_tour::api as tour_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use contracts::domain::a003_tour::TourQuery;

/// Admin landing page with catalog counts
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let tours = RwSignal::new(None::<usize>);
    let divisions = RwSignal::new(None::<usize>);
    let tour_types = RwSignal::new(None::<usize>);

    wasm_bindgen_futures::spawn_local(async move {
        match tour_api::fetch_tours(&TourQuery::default()).await {
            Ok(v) => tours.set(Some(v.len())),
            Err(e) => log::error!("{}", e),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match division_api::fetch_divisions().await {
            Ok(v) => divisions.set(Some(v.len())),
            Err(e) => log::error!("{}", e),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match tour_type_api::fetch_tour_types(None).await {
            Ok(p) => tour_types.set(Some(p.meta.total as usize)),
            Err(e) => log::error!("{}", e),
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Analytics" />
            <div class="stat-grid">
                <StatCard label="Tours" icon_name="map-pin" value=tours />
                <StatCard label="Divisions" icon_name="dashboard" value=divisions />
                <StatCard label="Tour Types" icon_name="calendar" value=tour_types />
            </div>
        </div>
    }
}
