pub mod a001_division;
pub mod a002_tour_type;
pub mod a003_tour;
pub mod a004_booking;
pub mod common;
