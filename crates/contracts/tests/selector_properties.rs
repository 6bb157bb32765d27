use contracts::shared::quantity_selector::{QuantitySelector, SelectionError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Increment,
    Decrement,
    SetBounds(u32, u32),
    SetUnitPrice(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Increment),
        3 => Just(Op::Decrement),
        1 => (0u32..40, 0u32..40).prop_map(|(min, max)| Op::SetBounds(min, max)),
        1 => (-1000i32..100_000).prop_map(|p| Op::SetUnitPrice(f64::from(p) / 4.0)),
    ]
}

/// Plain copy of the selector state, advanced by hand next to the real one
#[derive(Debug, Clone, Copy)]
struct Model {
    quantity: u32,
    min: u32,
    max: u32,
    price: f64,
}

impl Model {
    fn apply(&mut self, op: &Op) {
        match *op {
            Op::Increment if self.quantity < self.max => self.quantity += 1,
            Op::Decrement if self.quantity > self.min => self.quantity -= 1,
            Op::Increment | Op::Decrement => {}
            Op::SetBounds(lo, hi) if lo >= 1 && hi >= lo => {
                self.min = lo;
                self.max = hi;
                if self.quantity < lo {
                    self.quantity = lo;
                } else if self.quantity > hi {
                    self.quantity = hi;
                }
            }
            Op::SetUnitPrice(p) if p >= 0.0 => self.price = p,
            Op::SetBounds(..) | Op::SetUnitPrice(_) => {}
        }
    }
}

proptest! {
    #[test]
    fn test_quantity_stays_in_bounds_and_total_is_derived(
        min in 1u32..10,
        span in 0u32..30,
        price in 0u32..50_000,
        ops in prop::collection::vec(op(), 0..200)
    ) {
        let mut s = QuantitySelector::new(min, min + span, f64::from(price)).unwrap();
        let mut model = Model { quantity: min, min, max: min + span, price: f64::from(price) };

        for op in ops {
            let before = s.clone();
            let result = match op {
                Op::Increment => Ok(s.increment()),
                Op::Decrement => Ok(s.decrement()),
                Op::SetBounds(lo, hi) => s.set_bounds(lo, hi),
                Op::SetUnitPrice(p) => s.set_unit_price(p),
            };
            model.apply(&op);

            match result {
                Ok(snap) => {
                    prop_assert_eq!(snap.quantity, s.quantity());
                    prop_assert_eq!(snap.total, s.total());
                }
                Err(SelectionError::InvalidBounds { .. }) | Err(SelectionError::InvalidPrice(_)) => {
                    prop_assert_eq!(&s, &before);
                }
            }

            prop_assert_eq!(s.quantity(), model.quantity, "after {:?}", op);
            prop_assert_eq!((s.min(), s.max()), (model.min, model.max));
            prop_assert_eq!(s.unit_price(), model.price);

            prop_assert!(s.min() <= s.quantity() && s.quantity() <= s.max());
            prop_assert_eq!(s.total(), f64::from(s.quantity()) * s.unit_price());
            prop_assert_eq!(s.can_increment(), s.quantity() < s.max());
            prop_assert_eq!(s.can_decrement(), s.quantity() > s.min());
        }
    }

    #[test]
    fn test_single_steps_move_by_exactly_one(min in 1u32..20, span in 1u32..20, steps in 0u32..40) {
        let max = min + span;
        let mut s = QuantitySelector::new(min, max, 1.0).unwrap();
        for _ in 0..steps {
            let q = s.quantity();
            let snap = s.increment();
            prop_assert_eq!(snap.quantity, if q < max { q + 1 } else { max });
        }
        for _ in 0..steps {
            let q = s.quantity();
            let snap = s.decrement();
            prop_assert_eq!(snap.quantity, if q > min { q - 1 } else { min });
        }
    }

    #[test]
    fn test_set_bounds_keeps_quantity_already_in_range(
        steps in 0u32..20,
        lo in 1u32..30,
        width in 0u32..30,
    ) {
        let mut s = QuantitySelector::new(1, 25, 100.0).unwrap();
        for _ in 0..steps {
            s.increment();
        }
        let q = s.quantity();
        let hi = lo + width;

        let snap = s.set_bounds(lo, hi).unwrap();
        prop_assert_eq!(snap.quantity, q.clamp(lo, hi));
        if (lo..=hi).contains(&q) {
            prop_assert_eq!(snap.quantity, q);
        }
    }

    #[test]
    fn test_increment_is_idempotent_at_max(max in 1u32..50, extra in 1usize..20) {
        let mut s = QuantitySelector::new(1, max, 10.0).unwrap();
        for _ in 0..max {
            s.increment();
        }
        prop_assert_eq!(s.quantity(), max);
        for _ in 0..extra {
            s.increment();
        }
        prop_assert_eq!(s.quantity(), max);
    }

    #[test]
    fn test_decrement_is_idempotent_at_min(min in 1u32..50, extra in 1usize..20) {
        let mut s = QuantitySelector::new(min, min + 5, 10.0).unwrap();
        for _ in 0..extra {
            s.decrement();
        }
        prop_assert_eq!(s.quantity(), min);
    }

    #[test]
    fn test_price_change_never_moves_quantity(steps in 0usize..10, price in 0u32..1_000_000) {
        let mut s = QuantitySelector::new(1, 25, 15000.0).unwrap();
        for _ in 0..steps {
            s.increment();
        }
        let quantity = s.quantity();
        s.set_unit_price(f64::from(price)).unwrap();
        prop_assert_eq!(s.quantity(), quantity);
        prop_assert_eq!(s.total(), f64::from(quantity) * f64::from(price));
    }
}

#[test]
fn test_in_range_bounds_change_and_saturation_at_u32_max() {
    let mut s = QuantitySelector::new(1, 25, 10.0).unwrap();
    for _ in 0..5 {
        s.increment();
    }
    assert_eq!(s.quantity(), 6);
    assert_eq!(s.set_bounds(2, 10).unwrap().quantity, 6);

    let mut s = QuantitySelector::new(u32::MAX - 1, u32::MAX, 0.0).unwrap();
    assert_eq!(s.increment().quantity, u32::MAX);
    assert_eq!(s.increment().quantity, u32::MAX);
    assert!(!s.can_increment());
}
