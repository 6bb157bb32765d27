use contracts::domain::a001_division::{Division, DivisionDto};
use contracts::domain::a003_tour::TourQuery;
use contracts::domain::common::Record;
use web_sys::File;

use crate::shared::api_utils::{get_json, multipart_with_data, post_form, with_query};

/// Fetch all divisions
pub async fn fetch_divisions() -> Result<Vec<Division>, String> {
    get_json::<Vec<Division>>(Division::endpoint())
        .await?
        .into_result()
        .map_err(|e| format!("Failed to load divisions: {}", e))
}

/// Create a division; the thumbnail goes in the `file` part
pub async fn create_division(dto: &DivisionDto, image: &File) -> Result<Division, String> {
    let form = multipart_with_data(dto)?;
    form.append_with_blob("file", image)
        .map_err(|_| "Failed to attach image".to_string())?;

    post_form::<Division>(&Division::create_path(), &form)
        .await?
        .into_result()
        .map_err(|e| format!("Failed to add division: {}", e))
}

/// Name of a single division, for tours whose `division` is a bare id
pub async fn fetch_division_name(id: &str) -> Result<Option<String>, String> {
    let query = TourQuery::by_id(id).with_fields("name");
    let divisions = get_json::<Vec<Division>>(&with_query(Division::endpoint(), &query)?)
        .await?
        .into_result()
        .map_err(|e| format!("Failed to load division: {}", e))?;
    Ok(divisions.into_iter().next().map(|d| d.name))
}
