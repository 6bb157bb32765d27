use contracts::domain::a003_tour::{CreateTourDto, Tour, TourQuery};
use contracts::domain::common::Record;
use web_sys::File;

use crate::shared::api_utils::{get_json, multipart_with_data, post_form, with_query};

/// Fetch tours matching `query`
pub async fn fetch_tours(query: &TourQuery) -> Result<Vec<Tour>, String> {
    get_json::<Vec<Tour>>(&with_query(Tour::endpoint(), query)?)
        .await?
        .into_result()
        .map_err(|e| format!("Failed to load tours: {}", e))
}

/// Fetch a single tour; the backend answers with a list filtered by `_id`
pub async fn fetch_tour(id: &str) -> Result<Option<Tour>, String> {
    let tours = fetch_tours(&TourQuery::by_id(id)).await?;
    Ok(tours.into_iter().next())
}

/// Create a tour; every image goes in its own `files` part
pub async fn create_tour(dto: &CreateTourDto, images: &[File]) -> Result<Tour, String> {
    let form = multipart_with_data(dto)?;
    for image in images {
        form.append_with_blob("files", image)
            .map_err(|_| "Failed to attach image".to_string())?;
    }

    post_form::<Tour>(&Tour::create_path(), &form)
        .await?
        .into_result()
        .map_err(|e| e.to_string())
}
