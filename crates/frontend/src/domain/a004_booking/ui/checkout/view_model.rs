use contracts::domain::a003_tour::Tour;
use contracts::domain::a004_booking::GuestSelection;
use leptos::prelude::*;

use crate::domain::a003_tour::api as tour_api;
use crate::domain::a004_booking::api;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Missing,
    Failed(String),
}

/// What one fetch of the tour does to the page
#[derive(Debug)]
enum PageUpdate {
    Show(Tour, GuestSelection),
    State(LoadState),
    /// A tour is already on screen; it stays together with its selection
    Keep,
}

/// Decide the page update for a fetch result.
///
/// `current` is the selection on screen, if any. A refetch of the same tour
/// re-syncs a copy of it, so a rejected record leaves both the summary and
/// the guest count untouched.
fn resolve_fetch(current: Option<&GuestSelection>, fetched: Result<Option<Tour>, String>) -> PageUpdate {
    let on_screen = current.is_some();

    match fetched {
        Ok(Some(tour)) => {
            let next = match current.filter(|s| s.tour_id() == tour.id) {
                Some(s) => {
                    let mut s = s.clone();
                    s.sync_with_tour(&tour).map(|_| s)
                }
                None => GuestSelection::for_tour(&tour),
            };
            match next {
                Ok(selection) => PageUpdate::Show(tour, selection),
                Err(e) => {
                    log::error!("tour {} cannot be booked: {}", tour.id, e);
                    if on_screen {
                        PageUpdate::Keep
                    } else {
                        PageUpdate::State(LoadState::Failed(
                            "This tour is not available for booking.".to_string(),
                        ))
                    }
                }
            }
        }
        Ok(None) if on_screen => {
            log::warn!("tour disappeared on refetch");
            PageUpdate::Keep
        }
        Ok(None) => PageUpdate::State(LoadState::Missing),
        Err(e) => {
            log::error!("{}", e);
            if on_screen {
                PageUpdate::Keep
            } else {
                PageUpdate::State(LoadState::Failed(e))
            }
        }
    }
}

/// ViewModel for the booking page.
///
/// The guest count lives in a [`GuestSelection`]; the view only reads
/// quantity, total and the +/- availability from it.
#[derive(Clone, Copy)]
pub struct BookingViewModel {
    pub tour: RwSignal<Option<Tour>>,
    pub selection: RwSignal<Option<GuestSelection>>,
    pub state: RwSignal<LoadState>,
    pub is_submitting: RwSignal<bool>,
}

impl BookingViewModel {
    pub fn new() -> Self {
        Self {
            tour: RwSignal::new(None),
            selection: RwSignal::new(None),
            state: RwSignal::new(LoadState::Loading),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Fetch the tour; on a refetch the existing selection is re-synced
    /// with the new price and capacity instead of being reset
    pub fn load(&self, id: String) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let fetched = tour_api::fetch_tour(&id).await;
            let update = this
                .selection
                .with_untracked(|current| resolve_fetch(current.as_ref(), fetched));

            match update {
                PageUpdate::Show(tour, selection) => {
                    this.selection.set(Some(selection));
                    this.tour.set(Some(tour));
                    this.state.set(LoadState::Ready);
                }
                PageUpdate::State(state) => this.state.set(state),
                PageUpdate::Keep => {}
            }
        });
    }

    pub fn guests(&self) -> u32 {
        self.selection.with(|s| s.as_ref().map(GuestSelection::guests).unwrap_or(0))
    }

    pub fn total(&self) -> f64 {
        self.selection.with(|s| s.as_ref().map(GuestSelection::total).unwrap_or(0.0))
    }

    pub fn can_increment(&self) -> bool {
        self.selection
            .with(|s| s.as_ref().map(|s| s.selector().can_increment()).unwrap_or(false))
    }

    pub fn can_decrement(&self) -> bool {
        self.selection
            .with(|s| s.as_ref().map(|s| s.selector().can_decrement()).unwrap_or(false))
    }

    pub fn increment(&self) {
        self.selection.update(|s| {
            if let Some(s) = s {
                s.increment();
            }
        });
    }

    pub fn decrement(&self) {
        self.selection.update(|s| {
            if let Some(s) = s {
                s.decrement();
            }
        });
    }

    /// Post the guest count as it is right now and open the payment page
    pub fn checkout_command(&self, toast: ToastService) {
        let Some(request) = self
            .selection
            .with_untracked(|s| s.as_ref().map(GuestSelection::checkout_request))
        else {
            return;
        };

        let is_submitting = self.is_submitting;
        is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_booking(&request).await {
                Ok(payment) => {
                    log::info!(
                        "booking for tour {} with {} guest(s) created",
                        request.tour,
                        request.guests_count
                    );
                    toast.success("Booking Successful");
                    if let Some(w) = web_sys::window() {
                        if let Err(e) = w.open_with_url(&payment.payment_url) {
                            log::error!("failed to open payment page: {:?}", e);
                        }
                    }
                }
                Err(e) => {
                    log::error!("Booking failed: {}", e);
                    toast.error(e);
                }
            }
            is_submitting.set(false);
        });
    }
}

impl Default for BookingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour(max_guests: i64, cost_from: f64) -> Tour {
        serde_json::from_value(serde_json::json!({
            "_id": "68a0c",
            "title": "Sajek Valley",
            "costFrom": cost_from,
            "maxGuests": max_guests,
        }))
        .unwrap()
    }

    fn on_screen(guests: u32) -> GuestSelection {
        let mut s = GuestSelection::for_tour(&tour(25, 15000.0)).unwrap();
        while s.guests() < guests {
            s.increment();
        }
        s
    }

    #[test]
    fn test_first_load() {
        match resolve_fetch(None, Ok(Some(tour(25, 15000.0)))) {
            PageUpdate::Show(t, s) => {
                assert_eq!(t.max_guests, 25);
                assert_eq!(s.guests(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            resolve_fetch(None, Ok(Some(tour(0, 15000.0)))),
            PageUpdate::State(LoadState::Failed(_))
        ));
        assert!(matches!(resolve_fetch(None, Ok(None)), PageUpdate::State(LoadState::Missing)));
    }

    #[test]
    fn test_refetch_clamps_guests_and_shows_new_tour() {
        let current = on_screen(6);
        match resolve_fetch(Some(&current), Ok(Some(tour(4, 12000.0)))) {
            PageUpdate::Show(t, s) => {
                assert_eq!(t.cost_from, 12000.0);
                assert_eq!(s.guests(), 4);
                assert_eq!(s.total(), 48000.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejected_refetch_keeps_page() {
        let current = on_screen(3);
        assert!(matches!(
            resolve_fetch(Some(&current), Ok(Some(tour(0, 12000.0)))),
            PageUpdate::Keep
        ));
        assert!(matches!(
            resolve_fetch(Some(&current), Ok(Some(tour(25, -1.0)))),
            PageUpdate::Keep
        ));
        assert!(matches!(resolve_fetch(Some(&current), Ok(None)), PageUpdate::Keep));
        assert!(matches!(
            resolve_fetch(Some(&current), Err("offline".to_string())),
            PageUpdate::Keep
        ));
        assert_eq!(current.guests(), 3);
    }
}
