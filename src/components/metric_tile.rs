use dioxus::prelude::*;
use crate::models::Metric;

#[component]
pub fn MetricTile(metric: Metric) -> Element {
    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg",
            div {
                class: "p-5",
                div {
                    class: "flex items-center",
                    div {
                        class: "flex-shrink-0",
                        div {
                            class: "w-8 h-8 {metric.accent} rounded-md flex items-center justify-center",
                            span { class: "text-white font-bold", "{metric.icon}" }
                        }
                    }
                    div {
                        class: "ml-5 w-0 flex-1",
                        dl {
                            dt { class: "text-sm font-medium text-gray-500 truncate", "{metric.label}" }
                            dd { class: "text-lg font-medium text-gray-900", "{metric.value}" }
                        }
                    }
                }
            }
        }
    }
}
