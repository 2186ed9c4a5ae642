use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center bg-gray-50",
            h1 { class: "text-6xl font-bold text-gray-300", "404" }
            p { class: "mt-4 text-xl text-gray-600", "Page not found" }
            p { class: "mt-2 text-sm text-gray-500", "Nothing is served at {path}" }
            Link {
                class: "mt-6 px-4 py-2 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-lg transition-colors",
                to: Route::Home,
                "Back to Home"
            }
        }
    }
}
