use crate::domain::common::{Record, Reference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Complete,
    Cancel,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    /// Bare id on create, populated `{ _id, title }` in the history list
    #[serde(default)]
    pub tour: Option<Reference>,
    #[serde(rename = "guestsCount")]
    pub guests_count: u32,
    pub status: BookingStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn tour_title(&self) -> Option<&str> {
        self.tour.as_ref().and_then(Reference::name)
    }
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Complete => "Complete",
            BookingStatus::Cancel => "Cancelled",
            BookingStatus::Failed => "Failed",
        }
    }
}

impl Record for Booking {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn endpoint() -> &'static str {
        "/booking"
    }

    fn element_name() -> &'static str {
        "Booking"
    }

    fn list_name() -> &'static str {
        "Bookings"
    }

    // The backend creates bookings with a POST on the collection itself
    fn create_path() -> String {
        Self::endpoint().to_string()
    }
}

/// Body of the booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub tour: String,
    #[serde(rename = "guestsCount")]
    pub guests_count: u32,
}

/// Data of a successful booking: the payment session to open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPayment {
    #[serde(rename = "paymentUrl")]
    pub payment_url: String,
    #[serde(default)]
    pub booking: Option<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ApiResponse;

    #[test]
    fn test_request_wire_shape() {
        let req = CreateBookingRequest { tour: "68a0c".to_string(), guests_count: 3 };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"tour": "68a0c", "guestsCount": 3})
        );
    }

    #[test]
    fn test_payment_response() {
        let json = r#"{
            "success": true,
            "statusCode": 201,
            "message": "Booking created successfully",
            "data": {
                "paymentUrl": "https://sandbox.pay.example.com/session/abc",
                "booking": {"_id": "b1", "tour": "68a0c", "guestsCount": 2, "status": "PENDING"}
            }
        }"#;
        let resp: ApiResponse<BookingPayment> = serde_json::from_str(json).unwrap();
        let payment = resp.into_result().unwrap();
        assert_eq!(payment.payment_url, "https://sandbox.pay.example.com/session/abc");
        let booking = payment.booking.unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.tour.as_ref().map(|t| t.id()), Some("68a0c"));
        assert_eq!(booking.tour_title(), None);
    }

    #[test]
    fn test_history_item_with_populated_tour() {
        let json = r#"{
            "_id": "b2",
            "tour": {"_id": "68a0c", "title": "Cox's Bazar Beach Adventure"},
            "guestsCount": 4,
            "status": "COMPLETE",
            "createdAt": "2025-10-01T08:30:00.000Z"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.tour_title(), Some("Cox's Bazar Beach Adventure"));
        assert_eq!(booking.status.label(), "Complete");
        assert!(booking.created_at.is_some());
    }
}
