use {
    crate::domain::Profile,
    serde::{Deserialize, Serialize},
};

/// Favourability of the period per sphere, 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastScores {
    pub general: u8,
    pub love: u8,
    pub career: u8,
    pub health: u8,
}

/// Structured prediction returned by the remote model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub date: String,
    pub general: String,
    pub love: String,
    pub career: String,
    pub health: String,
    pub lucky_color: String,
    pub lucky_number: String,
    pub mood: String,
    pub advice: String,
    pub scores: ForecastScores,
}

/// A persisted, immutable pairing of a past forecast with the profile that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub forecast: Forecast,
    pub id: String,
    pub timestamp: i64,
    pub profile: Profile,
}

impl HistoryEntry {
    pub fn new(forecast: Forecast, profile: Profile, timestamp: i64) -> Self {
        Self {
            forecast,
            id: timestamp.to_string(),
            timestamp,
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::ZodiacSign};

    #[test]
    fn entry_is_flat_on_disk() {
        let forecast = Forecast {
            date: "15 октября".into(),
            lucky_color: "Синий".into(),
            lucky_number: "7".into(),
            scores: ForecastScores {
                general: 80,
                love: 60,
                career: 70,
                health: 90,
            },
            ..Default::default()
        };
        let profile = Profile {
            sign: Some(ZodiacSign::Leo),
            ..Default::default()
        };
        let entry = HistoryEntry::new(forecast, profile, 1_700_000_000_123);
        let v = serde_json::to_value(&entry).unwrap();

        assert_eq!(v["id"], "1700000000123");
        assert_eq!(v["timestamp"], 1_700_000_000_123_i64);
        assert_eq!(v["luckyColor"], "Синий");
        assert_eq!(v["luckyNumber"], "7");
        assert_eq!(v["scores"]["health"], 90);
        assert_eq!(v["profile"]["sign"], "Лев");
        assert!(v.get("forecast").is_none());
    }

    #[test]
    fn score_out_of_u8_range_is_rejected() {
        let raw = r#"{"general":300,"love":1,"career":2,"health":3}"#;
        assert!(serde_json::from_str::<ForecastScores>(raw).is_err());
    }
}
