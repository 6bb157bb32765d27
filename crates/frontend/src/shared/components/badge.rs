use contracts::domain::a004_booking::BookingStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

pub fn booking_status_variant(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Complete => "success",
        BookingStatus::Pending => "warning",
        BookingStatus::Cancel | BookingStatus::Failed => "error",
    }
}

/// Booking status as a colored badge
#[component]
pub fn BookingStatusBadge(status: BookingStatus) -> impl IntoView {
    view! {
        <Badge variant=booking_status_variant(status)>{status.label()}</Badge>
    }
}
