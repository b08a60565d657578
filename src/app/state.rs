// src/app/state.rs

use crate::domain::{Forecast, Profile};

/// The five screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Intro,
    Form,
    Loading,
    Result,
    History,
}

/// What the Result screen shows: a forecast and the profile that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveForecast {
    pub forecast: Forecast,
    pub profile: Profile,
}

/// Handed out when a submission starts; must be returned with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastTicket {
    pub(crate) generation: u64,
    pub(crate) profile: Profile,
}

impl ForecastTicket {
    /// Snapshot frozen at submission time.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
