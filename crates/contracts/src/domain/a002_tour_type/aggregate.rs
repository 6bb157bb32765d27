use crate::domain::common::Record;
use crate::shared::FormErrors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Record for TourType {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint() -> &'static str {
        "/tour/tour-types"
    }

    fn element_name() -> &'static str {
        "Tour Type"
    }

    fn list_name() -> &'static str {
        "Tour Types"
    }

    // Tour types are created under the tour router, not under their own list path
    fn create_path() -> String {
        "/tour/create-tour-type".to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourTypeDto {
    pub name: String,
}

impl TourTypeDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require_len("name", &self.name, 2, "Tour type must be at least 2 characters.");
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(TourType::item_path("t1"), "/tour/tour-types/t1");
        assert_eq!(TourType::create_path(), "/tour/create-tour-type");
    }

    #[test]
    fn test_dto_validation() {
        assert!(TourTypeDto { name: "A".to_string() }.validate().is_err());
        assert!(TourTypeDto { name: "Beach".to_string() }.validate().is_ok());
    }
}
