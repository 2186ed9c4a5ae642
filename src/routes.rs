use dioxus::prelude::*;
use crate::views::{ Dashboard, Home, PageNotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home,
    #[route("/dashboard")]
    Dashboard,
    // `/login` and `/book` land here until those pages exist.
    #[route("/:..segments")]
    PageNotFound {
        segments: Vec<String>,
    },
}
