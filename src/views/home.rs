use dioxus::prelude::*;
use crate::models::LANDING_LINKS;

/// Landing page: product name, a one-line pitch and the two entry points.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100",
            div {
                class: "container mx-auto px-4 py-16",
                div {
                    class: "text-center",
                    h1 {
                        class: "text-4xl font-bold text-gray-900 mb-4",
                        "🦁 Blue Lion Booking Engine"
                    }
                    p {
                        class: "text-xl text-gray-600 mb-8",
                        "Professional booking platform for restaurants and appointment-based businesses"
                    }
                    div {
                        class: "space-x-4",
                        for link in LANDING_LINKS {
                            a {
                                key: "{link.href}",
                                class: link.class,
                                href: link.href,
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
