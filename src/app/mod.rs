mod controller;
mod phases;
mod root;
mod state;

pub use {
    controller::AppController,
    root::App,
    state::{ActiveForecast, ForecastTicket, View},
};
