//! Core library for the Sahab weather app.
//!
//! This crate defines:
//! - The decoded weather data model and its display formatting
//! - The fetch client for the fixed current-conditions endpoint
//! - The view-state controller observed by the rendering layer
//! - Localization strings and the saved language preference
//!
//! It is used by `sahab-app`, but can also be reused by other front-ends.

pub mod config;
pub mod controller;
pub mod localize;
pub mod model;
pub mod source;

pub use config::Config;
pub use controller::{WeatherController, WeatherState};
pub use localize::{Direction, Language, Localizer};
pub use model::WeatherReport;
pub use source::{FetchError, HttpWeatherSource, WeatherSource};
