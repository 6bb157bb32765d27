use contracts::domain::a002_tour_type::{TourType, TourTypeDto};
use contracts::domain::a003_tour::TourQuery;
use contracts::domain::common::Record;
use contracts::shared::Page;

use crate::shared::api_utils::{delete_json, get_json, post_json, with_query};

/// Fetch one page of tour types (`None` = the backend's default paging)
pub async fn fetch_tour_types(page: Option<u32>) -> Result<Page<TourType>, String> {
    let query = match page {
        Some(p) => TourQuery::default().with_page(p),
        None => TourQuery::default(),
    };
    get_json::<Vec<TourType>>(&with_query(TourType::endpoint(), &query)?)
        .await?
        .into_page()
        .map_err(|e| format!("Failed to load tour types: {}", e))
}

/// Every tour type, trimmed to id and name, for filter and form selects
pub async fn fetch_tour_type_options() -> Result<Vec<TourType>, String> {
    let query = TourQuery::default().with_limit(1000).with_fields("_id,name");
    get_json::<Vec<TourType>>(&with_query(TourType::endpoint(), &query)?)
        .await?
        .into_result()
        .map_err(|e| format!("Failed to load tour types: {}", e))
}

pub async fn create_tour_type(dto: &TourTypeDto) -> Result<TourType, String> {
    post_json::<TourType, _>(&TourType::create_path(), dto)
        .await?
        .into_result()
        .map_err(|e| format!("Failed to add tour type: {}", e))
}

pub async fn delete_tour_type(id: &str) -> Result<String, String> {
    delete_json::<serde_json::Value>(&TourType::item_path(id))
        .await?
        .into_ack()
        .map_err(|e| e.to_string())
}
