//! Guest count selection on the booking page.
//!
//! Binds a [`QuantitySelector`] to a tour: the floor is one guest, the
//! ceiling is the tour's `maxGuests` and the unit price is `costFrom`.

use super::aggregate::CreateBookingRequest;
use crate::domain::a003_tour::Tour;
use crate::shared::quantity_selector::{
    QuantitySelector, SelectionError, SelectionSnapshot, MIN_QUANTITY,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GuestSelection {
    tour_id: String,
    selector: QuantitySelector,
}

impl GuestSelection {
    /// Starts at one guest for `tour`.
    pub fn for_tour(tour: &Tour) -> Result<Self, SelectionError> {
        let pricing = tour.pricing()?;
        Ok(Self {
            tour_id: tour.id.clone(),
            selector: QuantitySelector::new(MIN_QUANTITY, pricing.max_guests, pricing.unit_price)?,
        })
    }

    pub fn tour_id(&self) -> &str {
        &self.tour_id
    }

    pub fn selector(&self) -> &QuantitySelector {
        &self.selector
    }

    pub fn guests(&self) -> u32 {
        self.selector.quantity()
    }

    pub fn total(&self) -> f64 {
        self.selector.total()
    }

    pub fn increment(&mut self) -> SelectionSnapshot {
        self.selector.increment()
    }

    pub fn decrement(&mut self) -> SelectionSnapshot {
        self.selector.decrement()
    }

    /// Applies a refetched copy of the tour.
    ///
    /// Price and capacity are checked together before anything is written,
    /// so a bad record leaves the selection exactly as it was.
    pub fn sync_with_tour(&mut self, tour: &Tour) -> Result<SelectionSnapshot, SelectionError> {
        let pricing = tour.pricing()?;
        self.selector.set_bounds(MIN_QUANTITY, pricing.max_guests)?;
        self.selector.set_unit_price(pricing.unit_price)
    }

    /// Request for the current guest count, taken at the moment of the call
    pub fn checkout_request(&self) -> CreateBookingRequest {
        CreateBookingRequest {
            tour: self.tour_id.clone(),
            guests_count: self.selector.quantity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_tour::aggregate::tests::sample_tour;

    #[test]
    fn test_starts_with_one_guest() {
        let s = GuestSelection::for_tour(&sample_tour()).unwrap();
        assert_eq!(s.guests(), 1);
        assert_eq!(s.total(), 15000.0);
        assert_eq!(s.selector().max(), 25);
        assert_eq!(s.tour_id(), "68a0c");
    }

    #[test]
    fn test_for_tour_rejects_zero_capacity() {
        let mut tour = sample_tour();
        tour.max_guests = 0;
        assert!(matches!(
            GuestSelection::for_tour(&tour),
            Err(SelectionError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_refetch_with_lower_capacity_and_new_price() {
        let mut tour = sample_tour();
        let mut s = GuestSelection::for_tour(&tour).unwrap();
        for _ in 0..5 {
            s.increment();
        }
        assert_eq!(s.guests(), 6);

        tour.max_guests = 4;
        tour.cost_from = 12000.0;
        let snap = s.sync_with_tour(&tour).unwrap();
        assert_eq!(snap, SelectionSnapshot { quantity: 4, total: 48000.0 });
    }

    #[test]
    fn test_refetch_with_bad_price_changes_nothing() {
        let mut tour = sample_tour();
        let mut s = GuestSelection::for_tour(&tour).unwrap();
        s.increment();
        let before = s.clone();

        tour.max_guests = 1;
        tour.cost_from = -5.0;
        assert!(s.sync_with_tour(&tour).is_err());
        assert_eq!(s, before);
    }

    #[test]
    fn test_checkout_request_snapshots_guests() {
        let mut s = GuestSelection::for_tour(&sample_tour()).unwrap();
        s.increment();
        s.increment();
        let req = s.checkout_request();
        s.increment();

        assert_eq!(req, CreateBookingRequest { tour: "68a0c".to_string(), guests_count: 3 });
        assert_eq!(s.guests(), 4);
    }
}
