#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and the integration tests)
pub use app::{ActiveForecast, App, AppController, ForecastTicket, View};
pub use config::PERSISTENCE;
pub use data::{
    ForecastClient, ForecastError, HistoryLog, HistoryStore, MemoryHistoryStore,
    default_history_store,
};
pub use domain::{
    Focus, Forecast, ForecastScores, Gender, HistoryEntry, Period, Profile, ProfileUpdate, Style,
    ZodiacSign,
};

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>) -> anyhow::Result<App> {
    App::new(cc)
}
