use crate::domain::common::Record;
use crate::shared::FormErrors;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub description: String,
}

impl Division {
    /// Description cut to `max_chars` characters, with an ellipsis when cut
    pub fn short_description(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let cut: String = self.description.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }

    /// Single letter shown when the thumbnail is missing
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
    }
}

impl Record for Division {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn endpoint() -> &'static str {
        "/division"
    }

    fn element_name() -> &'static str {
        "Division"
    }

    fn list_name() -> &'static str {
        "Divisions"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// JSON part of the multipart create request; the image travels as `file`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivisionDto {
    pub name: String,
    pub description: String,
}

impl DivisionDto {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require_len("name", &self.name, 3, "Name must be at least 3 characters.");
        errors.require_len(
            "description",
            &self.description,
            10,
            "Description must be at least 10 characters.",
        );
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list_item() {
        let json = r#"{
            "_id": "6650a",
            "name": "Chattogram",
            "slug": "chattogram-division",
            "thumbnail": "https://cdn.example.com/ctg.jpg",
            "description": "Hills, beaches and the port city."
        }"#;
        let d: Division = serde_json::from_str(json).unwrap();
        assert_eq!(d.id(), "6650a");
        assert_eq!(d.thumbnail.as_deref(), Some("https://cdn.example.com/ctg.jpg"));
        assert_eq!(Division::item_path(&d.id), "/division/6650a");
        assert_eq!(Division::create_path(), "/division/create");
    }

    #[test]
    fn test_short_description() {
        let d = Division {
            description: "Home of tea gardens and rolling green hills".to_string(),
            ..Default::default()
        };
        assert_eq!(d.short_description(12), "Home of tea...");
        assert_eq!(d.short_description(100), d.description);
    }

    #[test]
    fn test_initial() {
        let d = Division { name: "sylhet".to_string(), ..Default::default() };
        assert_eq!(d.initial(), "S");
        assert_eq!(Division::default().initial(), "");
    }

    #[test]
    fn test_dto_validation() {
        let dto = DivisionDto { name: "Dh".to_string(), description: "short".to_string() };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message_for("name"), Some("Name must be at least 3 characters."));

        let dto = DivisionDto {
            name: "Dhaka".to_string(),
            description: "Capital division of the country".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}
