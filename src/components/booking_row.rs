use dioxus::prelude::*;
use crate::models::{ Booking, BookingStatus };

#[component]
pub fn StatusBadge(status: BookingStatus) -> Element {
    let badge = status.badge_class();

    rsx! {
        span {
            class: "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {badge}",
            "{status}"
        }
    }
}

#[component]
pub fn BookingRow(booking: Booking) -> Element {
    rsx! {
        li {
            class: "py-4",
            div {
                class: "flex items-center space-x-4",
                div {
                    class: "flex-1 min-w-0",
                    p { class: "text-sm font-medium text-gray-900 truncate", {booking.title()} }
                    p { class: "text-sm text-gray-500", "{booking.time}" }
                }
                div {
                    StatusBadge { status: booking.status }
                }
            }
        }
    }
}
