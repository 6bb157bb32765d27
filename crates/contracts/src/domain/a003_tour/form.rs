//! State of the admin "add tour" form.
//!
//! Four of the inputs are dynamic lists the admin grows and shrinks row by
//! row. Each row carries a stable key so the view can keep focus on the
//! right input while rows are added or removed.

use super::aggregate::CreateTourDto;
use crate::shared::FormErrors;
use chrono::{Days, NaiveDate};
use uuid::Uuid;

pub const DYNAMIC_FIELDS: &str = "dynamic";
pub const IMAGES: &str = "images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub key: Uuid,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicList {
    rows: Vec<ListRow>,
}

impl DynamicList {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for v in values {
            list.append(v);
        }
        list
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Adds a row at the end and returns its key
    pub fn append(&mut self, value: impl Into<String>) -> Uuid {
        let key = Uuid::new_v4();
        self.rows.push(ListRow {
            key,
            value: value.into(),
        });
        key
    }

    pub fn remove(&mut self, key: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.key != key);
        self.rows.len() != before
    }

    pub fn set(&mut self, key: Uuid, value: impl Into<String>) -> bool {
        match self.rows.iter_mut().find(|r| r.key == key) {
            Some(row) => {
                row.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn has_blank(&self) -> bool {
        self.rows.iter().any(|r| r.value.trim().is_empty())
    }

    pub fn values(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.value.trim().to_string()).collect()
    }
}

/// Raw form input. Numbers stay strings until [`TourForm::validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub cost_from: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub departure_location: String,
    pub arrival_location: String,
    pub included: DynamicList,
    pub excluded: DynamicList,
    pub amenities: DynamicList,
    pub tour_plan: DynamicList,
    pub max_guests: String,
    pub min_age: String,
    pub division: String,
    pub tour_type: String,
}

impl TourForm {
    /// Form pre-filled with a sample tour starting `today` and lasting three days
    pub fn prefilled(today: NaiveDate) -> Self {
        Self {
            title: "Cox's Bazar Beach Adventure".to_string(),
            description: "Experience the world's longest natural sea beach with golden sandy \
                shores, crystal clear waters, and breathtaking sunsets. Enjoy beach activities, \
                local seafood, and explore nearby attractions including Himchari National Park \
                and Inani Beach."
                .to_string(),
            location: "Cox's Bazar".to_string(),
            cost_from: "15000".to_string(),
            start_date: Some(today),
            end_date: today.checked_add_days(Days::new(3)),
            departure_location: "Dhaka".to_string(),
            arrival_location: "Cox's Bazar".to_string(),
            included: DynamicList::from_values(["Accommodation for 2 nights"]),
            excluded: DynamicList::from_values(["Personal expenses"]),
            amenities: DynamicList::from_values(["Air-conditioned rooms"]),
            tour_plan: DynamicList::from_values(["Day 1: Arrival and beach exploration"]),
            max_guests: "25".to_string(),
            min_age: "5".to_string(),
            division: String::new(),
            tour_type: String::new(),
        }
    }

    fn has_blank_rows(&self) -> bool {
        self.included.has_blank()
            || self.excluded.has_blank()
            || self.amenities.has_blank()
            || self.tour_plan.has_blank()
    }

    /// Checks every field and builds the create request.
    ///
    /// `image_count` is the number of files picked in the uploader; a tour
    /// needs at least one.
    pub fn validate(&self, image_count: usize) -> Result<CreateTourDto, FormErrors> {
        let mut errors = FormErrors::new();

        errors.require_len("title", &self.title, 1, "Title is required");
        errors.require_len("description", &self.description, 1, "Description is required");
        errors.require_len("location", &self.location, 1, "Location is required");
        errors.require_len(
            "departureLocation",
            &self.departure_location,
            1,
            "Departure location is required",
        );
        errors.require_len(
            "arrivalLocation",
            &self.arrival_location,
            1,
            "Arrival location is required",
        );
        errors.require_len("division", &self.division, 1, "Division is required");
        errors.require_len("tourType", &self.tour_type, 1, "Tour type is required");

        let cost_from = parse_field(
            &mut errors,
            "costFrom",
            &self.cost_from,
            "Cost is required",
            "Cost must be a non-negative number",
            |s| s.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0),
        );
        let max_guests = parse_field(
            &mut errors,
            "maxGuests",
            &self.max_guests,
            "Max guest is required",
            "Max guests must be a whole number of at least 1",
            |s| s.parse::<u32>().ok().filter(|v| *v >= 1),
        );
        let min_age = parse_field(
            &mut errors,
            "minAge",
            &self.min_age,
            "Minimum age is required",
            "Minimum age must be a whole number",
            |s| s.parse::<u32>().ok(),
        );

        if self.start_date.is_none() {
            errors.push("startDate", "Start date is required");
        }
        if self.end_date.is_none() {
            errors.push("endDate", "End date is required");
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end <= start {
                errors.push("endDate", "End date cannot be before start date.");
            }
        }

        if self.has_blank_rows() {
            errors.push(DYNAMIC_FIELDS, "Please fill in all dynamic fields or remove them.");
        }
        if image_count == 0 {
            errors.push(IMAGES, "Please add some images");
        }

        match (cost_from, max_guests, min_age, self.start_date, self.end_date) {
            (Some(cost_from), Some(max_guests), Some(min_age), Some(start_date), Some(end_date))
                if errors.is_empty() =>
            {
                Ok(CreateTourDto {
                    title: self.title.trim().to_string(),
                    description: self.description.trim().to_string(),
                    location: self.location.trim().to_string(),
                    cost_from,
                    start_date,
                    end_date,
                    departure_location: self.departure_location.trim().to_string(),
                    arrival_location: self.arrival_location.trim().to_string(),
                    included: self.included.values(),
                    excluded: self.excluded.values(),
                    amenities: self.amenities.values(),
                    tour_plan: self.tour_plan.values(),
                    max_guests,
                    min_age,
                    division: self.division.clone(),
                    tour_type: self.tour_type.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

fn parse_field<T>(
    errors: &mut FormErrors,
    field: &'static str,
    raw: &str,
    missing: &str,
    invalid: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(field, missing);
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.push(field, invalid);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn filled() -> TourForm {
        let mut form = TourForm::prefilled(today());
        form.division = "d1".to_string();
        form.tour_type = "t1".to_string();
        form
    }

    #[test]
    fn test_dynamic_list_rows() {
        let mut list = DynamicList::from_values(["a", "b"]);
        let key = list.append("");
        assert_eq!(list.len(), 3);
        assert!(list.has_blank());

        assert!(list.set(key, " c "));
        assert!(!list.has_blank());
        assert_eq!(list.values(), vec!["a", "b", "c"]);

        let first = list.rows()[0].key;
        assert!(list.remove(first));
        assert!(!list.remove(first));
        assert_eq!(list.values(), vec!["b", "c"]);
    }

    #[test]
    fn test_prefilled_dates() {
        let form = TourForm::prefilled(today());
        assert_eq!(form.end_date, NaiveDate::from_ymd_opt(2025, 10, 22));
    }

    #[test]
    fn test_valid_form_builds_dto() {
        let dto = filled().validate(2).unwrap();
        assert_eq!(dto.cost_from, 15000.0);
        assert_eq!(dto.max_guests, 25);
        assert_eq!(dto.min_age, 5);
        assert_eq!(dto.tour_plan, vec!["Day 1: Arrival and beach exploration"]);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["costFrom"], 15000.0);
        assert_eq!(json["startDate"], "2025-10-19");
        assert_eq!(json["endDate"], "2025-10-22");
        assert_eq!(json["tourType"], "t1");
    }

    #[test]
    fn test_missing_selects_and_images() {
        let form = TourForm::prefilled(today());
        let errors = form.validate(0).unwrap_err();
        assert_eq!(errors.message_for("division"), Some("Division is required"));
        assert_eq!(errors.message_for("tourType"), Some("Tour type is required"));
        assert_eq!(errors.message_for(IMAGES), Some("Please add some images"));
    }

    #[test]
    fn test_end_date_must_follow_start() {
        let mut form = filled();
        form.end_date = form.start_date;
        let errors = form.validate(1).unwrap_err();
        assert_eq!(
            errors.message_for("endDate"),
            Some("End date cannot be before start date.")
        );
    }

    #[test]
    fn test_numeric_fields() {
        let mut form = filled();
        form.cost_from = "abc".to_string();
        form.max_guests = "0".to_string();
        form.min_age = String::new();
        let errors = form.validate(1).unwrap_err();
        assert_eq!(errors.message_for("costFrom"), Some("Cost must be a non-negative number"));
        assert_eq!(
            errors.message_for("maxGuests"),
            Some("Max guests must be a whole number of at least 1")
        );
        assert_eq!(errors.message_for("minAge"), Some("Minimum age is required"));
    }

    #[test]
    fn test_blank_dynamic_row_rejected() {
        let mut form = filled();
        form.amenities.append("   ");
        let errors = form.validate(1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.message_for(DYNAMIC_FIELDS).is_some());
    }
}
