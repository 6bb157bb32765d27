use crate::domain::common::{Record, Reference};
use crate::shared::quantity_selector::{SelectionError, MIN_QUANTITY};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub location: String,

    #[serde(rename = "costFrom")]
    pub cost_from: f64,

    #[serde(rename = "startDate", default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(rename = "endDate", default)]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(rename = "departureLocation", default)]
    pub departure_location: String,

    #[serde(rename = "arrivalLocation", default)]
    pub arrival_location: String,

    #[serde(default)]
    pub included: Vec<String>,

    #[serde(default)]
    pub excluded: Vec<String>,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[serde(rename = "tourPlan", default)]
    pub tour_plan: Vec<String>,

    // Older records were written with the singular key
    #[serde(rename = "maxGuests", alias = "maxGuest")]
    pub max_guests: u32,

    #[serde(rename = "minAge", default)]
    pub min_age: u32,

    #[serde(default)]
    pub division: Option<Reference>,

    #[serde(rename = "tourType", default)]
    pub tour_type: Option<Reference>,
}

impl Tour {
    /// Length of the day-by-day plan
    pub fn duration_days(&self) -> usize {
        self.tour_plan.len()
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn division_id(&self) -> Option<&str> {
        self.division.as_ref().map(Reference::id)
    }

    pub fn division_name(&self) -> Option<&str> {
        self.division.as_ref().and_then(Reference::name)
    }

    pub fn tour_type_name(&self) -> Option<&str> {
        self.tour_type.as_ref().and_then(Reference::name)
    }

    /// First `n` amenities and the count of the ones left out
    pub fn amenity_preview(&self, n: usize) -> (&[String], usize) {
        let shown = self.amenities.len().min(n);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }

    pub fn pricing(&self) -> Result<TourPricing, SelectionError> {
        TourPricing::from_tour(self)
    }
}

impl Record for Tour {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn endpoint() -> &'static str {
        "/tour"
    }

    fn element_name() -> &'static str {
        "Tour"
    }

    fn list_name() -> &'static str {
        "Tours"
    }
}

// ============================================================================
// Pricing
// ============================================================================

/// Price and capacity of a tour, the inputs of a guest selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourPricing {
    pub unit_price: f64,
    pub max_guests: u32,
}

impl TourPricing {
    pub fn from_tour(tour: &Tour) -> Result<Self, SelectionError> {
        if !tour.cost_from.is_finite() || tour.cost_from < 0.0 {
            return Err(SelectionError::InvalidPrice(tour.cost_from));
        }
        if tour.max_guests < MIN_QUANTITY {
            return Err(SelectionError::InvalidBounds {
                min: MIN_QUANTITY,
                max: tour.max_guests,
            });
        }
        Ok(Self {
            unit_price: tour.cost_from,
            max_guests: tour.max_guests,
        })
    }
}

// ============================================================================
// DTO
// ============================================================================

/// JSON part of the multipart create request; images travel as `files`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTourDto {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "costFrom")]
    pub cost_from: f64,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "departureLocation")]
    pub departure_location: String,
    #[serde(rename = "arrivalLocation")]
    pub arrival_location: String,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub amenities: Vec<String>,
    #[serde(rename = "tourPlan")]
    pub tour_plan: Vec<String>,
    #[serde(rename = "maxGuests")]
    pub max_guests: u32,
    #[serde(rename = "minAge")]
    pub min_age: u32,
    pub division: String,
    #[serde(rename = "tourType")]
    pub tour_type: String,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const TOUR_JSON: &str = r#"{
        "_id": "68a0c",
        "title": "Cox's Bazar Beach Adventure",
        "slug": "coxs-bazar-beach-adventure",
        "description": "The longest natural sea beach.",
        "images": ["https://cdn.example.com/1.jpg", "https://cdn.example.com/2.jpg"],
        "location": "Cox's Bazar",
        "costFrom": 15000,
        "startDate": "2025-11-01T00:00:00.000Z",
        "endDate": "2025-11-04T00:00:00.000Z",
        "departureLocation": "Dhaka",
        "arrivalLocation": "Cox's Bazar",
        "included": ["Accommodation for 2 nights"],
        "excluded": ["Personal expenses"],
        "amenities": ["Air-conditioned rooms", "Wi-Fi", "Breakfast", "Guide", "Pool"],
        "tourPlan": ["Arrival", "Himchari", "Inani Beach"],
        "maxGuests": 25,
        "minAge": 5,
        "division": {"_id": "d1", "name": "Chattogram"},
        "tourType": {"_id": "t1", "name": "Beach"}
    }"#;

    pub(crate) fn sample_tour() -> Tour {
        serde_json::from_str(TOUR_JSON).unwrap()
    }

    #[test]
    fn test_deserialize_populated_tour() {
        let tour = sample_tour();
        assert_eq!(tour.cost_from, 15000.0);
        assert_eq!(tour.max_guests, 25);
        assert_eq!(tour.duration_days(), 3);
        assert_eq!(tour.division_id(), Some("d1"));
        assert_eq!(tour.division_name(), Some("Chattogram"));
        assert_eq!(tour.tour_type_name(), Some("Beach"));
        assert_eq!(tour.cover_image(), Some("https://cdn.example.com/1.jpg"));
    }

    #[test]
    fn test_deserialize_singular_max_guest_and_bare_refs() {
        let json = r#"{
            "_id": "x", "title": "Sajek", "costFrom": 9000.5,
            "maxGuest": 12, "division": "d9", "tourType": "t9"
        }"#;
        let tour: Tour = serde_json::from_str(json).unwrap();
        assert_eq!(tour.max_guests, 12);
        assert_eq!(tour.division_id(), Some("d9"));
        assert_eq!(tour.division_name(), None);
        assert!(tour.start_date.is_none());
        assert_eq!(tour.cover_image(), None);
    }

    #[test]
    fn test_amenity_preview() {
        let tour = sample_tour();
        let (shown, rest) = tour.amenity_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 2);

        let (shown, rest) = tour.amenity_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 0);
    }

    #[test]
    fn test_pricing() {
        let mut tour = sample_tour();
        assert_eq!(
            tour.pricing(),
            Ok(TourPricing { unit_price: 15000.0, max_guests: 25 })
        );

        tour.max_guests = 0;
        assert_eq!(
            tour.pricing(),
            Err(SelectionError::InvalidBounds { min: 1, max: 0 })
        );

        tour.max_guests = 3;
        tour.cost_from = -10.0;
        assert_eq!(tour.pricing(), Err(SelectionError::InvalidPrice(-10.0)));
    }
}
