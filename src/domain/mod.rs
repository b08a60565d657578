// Domain types and value objects
mod forecast;
mod profile;
mod zodiac;

pub use forecast::{Forecast, ForecastScores, HistoryEntry};
pub use profile::{Focus, Gender, Period, Profile, ProfileUpdate, Style};
pub use zodiac::ZodiacSign;
