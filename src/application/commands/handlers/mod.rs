//! Command Handlers

mod dashboard_handlers;
mod weather_handlers;

pub use dashboard_handlers::DashboardHandler;
pub use weather_handlers::{FetchWeatherConfig, FetchWeatherHandler};
