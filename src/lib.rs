mod views;
mod components;
pub mod models;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::views::{ Dashboard, Home, PageNotFound };
pub use crate::configs::SiteConfig;
pub use crate::error::ConfigError;
