pub mod aggregate;
pub mod selection;

pub use aggregate::{Booking, BookingPayment, BookingStatus, CreateBookingRequest};
pub use selection::GuestSelection;
