use contracts::domain::a004_booking::{Booking, BookingPayment, CreateBookingRequest};
use contracts::domain::common::Record;

use crate::shared::api_utils::{get_json, post_json};

/// Create a booking and get the payment session to open
pub async fn create_booking(request: &CreateBookingRequest) -> Result<BookingPayment, String> {
    post_json::<BookingPayment, _>(&Booking::create_path(), request)
        .await?
        .into_result()
        .map_err(|e| e.to_string())
}

/// Bookings of the signed-in user
pub async fn fetch_my_bookings() -> Result<Vec<Booking>, String> {
    get_json::<Vec<Booking>>(&format!("{}/my-bookings", Booking::endpoint()))
        .await?
        .into_result()
        .map_err(|e| format!("Failed to load bookings: {}", e))
}
