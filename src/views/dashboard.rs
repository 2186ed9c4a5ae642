use dioxus::prelude::*;
use crate::components::{ BookingRow, MetricTile };
use crate::models::{ RECENT_BOOKINGS, SUMMARY_METRICS };

#[component]
fn Header() -> Element {
    rsx! {
        div {
            class: "bg-white shadow",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center py-6",
                    div {
                        class: "flex items-center",
                        h1 { class: "text-2xl font-bold text-gray-900", "🦁 Blue Lion Dashboard" }
                    }
                    div {
                        class: "flex items-center space-x-4",
                        span { class: "text-sm text-gray-500", "Welcome, Admin" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentBookings() -> Element {
    rsx! {
        div {
            class: "mt-8",
            div {
                class: "bg-white shadow rounded-lg",
                div {
                    class: "px-4 py-5 sm:p-6",
                    h3 {
                        class: "text-lg leading-6 font-medium text-gray-900",
                        "Recent Bookings"
                    }
                    div {
                        class: "mt-5",
                        div {
                            class: "flow-root",
                            ul {
                                class: "-my-5 divide-y divide-gray-200",
                                for booking in RECENT_BOOKINGS {
                                    BookingRow { key: "{booking.name}", booking: booking }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Admin dashboard with placeholder figures. Nothing here is fetched or computed.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",
            Header {}
            div {
                class: "max-w-7xl mx-auto py-6 sm:px-6 lg:px-8",
                div {
                    class: "px-4 py-6 sm:px-0",
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        for metric in SUMMARY_METRICS {
                            MetricTile { key: "{metric.label}", metric: metric }
                        }
                    }
                    RecentBookings {}
                }
            }
        }
    }
}
