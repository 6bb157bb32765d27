use serde::{Deserialize, Serialize};

/// `{ _id, name }` pair of a populated reference; tours populate as `{ _id, title }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: String,
}

/// Reference to another record.
///
/// List endpoints populate references into `{ _id, name }` objects while
/// single-record lookups return the bare id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Id(String),
    Populated(NamedRef),
}

impl Reference {
    pub fn id(&self) -> &str {
        match self {
            Reference::Id(id) => id,
            Reference::Populated(r) => &r.id,
        }
    }

    /// Name when the reference was populated
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(r) if !r.name.is_empty() => Some(&r.name),
            Reference::Populated(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id() {
        let r: Reference = serde_json::from_str(r#""66a1f""#).unwrap();
        assert_eq!(r.id(), "66a1f");
        assert_eq!(r.name(), None);
    }

    #[test]
    fn test_populated() {
        let r: Reference = serde_json::from_str(r#"{"_id":"66a1f","name":"Sylhet"}"#).unwrap();
        assert_eq!(r.id(), "66a1f");
        assert_eq!(r.name(), Some("Sylhet"));
    }

    #[test]
    fn test_populated_tour_title() {
        let r: Reference = serde_json::from_str(r#"{"_id":"68a0c","title":"Sajek Valley"}"#).unwrap();
        assert_eq!(r.name(), Some("Sajek Valley"));
    }
}
