pub mod aggregate;

pub use aggregate::{TourType, TourTypeDto};
