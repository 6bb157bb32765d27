//! Bounded quantity selector with a derived total.
//!
//! Keeps an integer quantity inside the closed range `[min, max]` and
//! exposes `total = quantity * unit_price`. The total is never stored, so a
//! stale value cannot be observed.
//!
//! Every mutating call returns a fresh [`SelectionSnapshot`]; a UI layer
//! re-renders from it instead of tracking dependencies implicitly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest bound a selector accepts.
pub const MIN_QUANTITY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionError {
    #[error("invalid bounds [{min}, {max}]: min must be at least 1 and max must not be below min")]
    InvalidBounds { min: u32, max: u32 },

    #[error("invalid unit price {0}: price must be a finite, non-negative number")]
    InvalidPrice(f64),
}

/// `{ quantity, total }` pair handed to checkout and to the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuantitySelector {
    quantity: u32,
    min: u32,
    max: u32,
    unit_price: f64,
}

impl QuantitySelector {
    /// Creates a selector with the quantity at `min`.
    pub fn new(min: u32, max: u32, unit_price: f64) -> Result<Self, SelectionError> {
        check_bounds(min, max)?;
        check_price(unit_price)?;

        Ok(Self {
            quantity: min,
            min,
            max,
            unit_price,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > self.min
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            quantity: self.quantity,
            total: self.total(),
        }
    }

    /// Adds one unit. No-op at `max`.
    pub fn increment(&mut self) -> SelectionSnapshot {
        if self.can_increment() {
            self.quantity += 1;
        }
        self.snapshot()
    }

    /// Removes one unit. No-op at `min`.
    pub fn decrement(&mut self) -> SelectionSnapshot {
        if self.can_decrement() {
            self.quantity -= 1;
        }
        self.snapshot()
    }

    /// Replaces the bounds and clamps the current quantity into them.
    ///
    /// On error nothing changes.
    pub fn set_bounds(&mut self, min: u32, max: u32) -> Result<SelectionSnapshot, SelectionError> {
        if let Err(e) = check_bounds(min, max) {
            log::debug!("rejected bounds update: {}", e);
            return Err(e);
        }

        self.min = min;
        self.max = max;

        let clamped = self.quantity.clamp(min, max);
        if clamped != self.quantity {
            log::debug!("quantity {} clamped to {} by bounds [{}, {}]", self.quantity, clamped, min, max);
            self.quantity = clamped;
        }

        Ok(self.snapshot())
    }

    /// Replaces the unit price. The quantity is left alone.
    pub fn set_unit_price(&mut self, price: f64) -> Result<SelectionSnapshot, SelectionError> {
        if let Err(e) = check_price(price) {
            log::debug!("rejected unit price update: {}", e);
            return Err(e);
        }

        self.unit_price = price;
        Ok(self.snapshot())
    }
}

fn check_bounds(min: u32, max: u32) -> Result<(), SelectionError> {
    if min < MIN_QUANTITY || max < min {
        return Err(SelectionError::InvalidBounds { min, max });
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), SelectionError> {
    if !price.is_finite() || price < 0.0 {
        return Err(SelectionError::InvalidPrice(price));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> QuantitySelector {
        QuantitySelector::new(1, 25, 15000.0).unwrap()
    }

    #[test]
    fn test_new_starts_at_min() {
        let s = QuantitySelector::new(2, 5, 10.0).unwrap();
        assert_eq!(s.quantity(), 2);
        assert_eq!(s.total(), 20.0);
        assert!(!s.can_decrement());
        assert!(s.can_increment());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert_eq!(
            QuantitySelector::new(5, 3, 1.0),
            Err(SelectionError::InvalidBounds { min: 5, max: 3 })
        );
        assert_eq!(
            QuantitySelector::new(0, 3, 1.0),
            Err(SelectionError::InvalidBounds { min: 0, max: 3 })
        );
        assert_eq!(
            QuantitySelector::new(1, 3, -0.5),
            Err(SelectionError::InvalidPrice(-0.5))
        );
        assert!(QuantitySelector::new(1, 3, f64::NAN).is_err());
        assert!(QuantitySelector::new(1, 3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_booking_scenario() {
        let mut s = selector();
        assert_eq!(s.total(), 15000.0);

        s.increment();
        s.increment();
        let snap = s.increment();
        assert_eq!(snap, SelectionSnapshot { quantity: 4, total: 60000.0 });

        let snap = s.set_bounds(1, 3).unwrap();
        assert_eq!(snap, SelectionSnapshot { quantity: 3, total: 45000.0 });

        for _ in 0..4 {
            s.decrement();
        }
        assert_eq!(s.quantity(), 1);
        assert_eq!(s.total(), 15000.0);
    }

    #[test]
    fn test_increment_is_noop_at_max() {
        let mut s = QuantitySelector::new(1, 2, 7.0).unwrap();
        for _ in 0..10 {
            s.increment();
        }
        assert_eq!(s.quantity(), 2);
        assert!(!s.can_increment());
        assert_eq!(s.total(), 14.0);
    }

    #[test]
    fn test_decrement_is_noop_at_min() {
        let mut s = selector();
        for _ in 0..10 {
            s.decrement();
        }
        assert_eq!(s.quantity(), 1);
        assert!(!s.can_decrement());
    }

    #[test]
    fn test_invalid_bounds_leave_state_untouched() {
        let mut s = selector();
        s.increment();
        let before = s.clone();

        assert_eq!(
            s.set_bounds(5, 3),
            Err(SelectionError::InvalidBounds { min: 5, max: 3 })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_set_bounds_clamps_up_to_new_min() {
        let mut s = selector();
        let snap = s.set_bounds(4, 10).unwrap();
        assert_eq!(snap.quantity, 4);
        assert_eq!(s.min(), 4);
        assert_eq!(s.max(), 10);
    }

    #[test]
    fn test_invalid_price_leaves_state_untouched() {
        let mut s = selector();
        s.increment();

        assert_eq!(s.set_unit_price(-1.0), Err(SelectionError::InvalidPrice(-1.0)));
        assert_eq!(s.unit_price(), 15000.0);
        assert_eq!(s.quantity(), 2);
    }

    #[test]
    fn test_price_change_keeps_quantity() {
        let mut s = selector();
        s.increment();
        let snap = s.set_unit_price(12500.0).unwrap();
        assert_eq!(snap, SelectionSnapshot { quantity: 2, total: 25000.0 });

        let snap = s.set_unit_price(0.0).unwrap();
        assert_eq!(snap.total, 0.0);
    }

    #[test]
    fn test_single_unit_range() {
        let mut s = QuantitySelector::new(1, 1, 99.0).unwrap();
        assert!(!s.can_increment());
        assert!(!s.can_decrement());
        assert_eq!(s.increment().quantity, 1);
        assert_eq!(s.decrement().quantity, 1);
    }
}
