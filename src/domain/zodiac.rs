use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The twelve signs of the tropical zodiac.
/// Serialized with their Russian names so stored history stays readable by older builds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
)]
pub enum ZodiacSign {
    #[serde(rename = "Овен")]
    #[strum(to_string = "Овен")]
    Aries,
    #[serde(rename = "Телец")]
    #[strum(to_string = "Телец")]
    Taurus,
    #[serde(rename = "Близнецы")]
    #[strum(to_string = "Близнецы")]
    Gemini,
    #[serde(rename = "Рак")]
    #[strum(to_string = "Рак")]
    Cancer,
    #[serde(rename = "Лев")]
    #[strum(to_string = "Лев")]
    Leo,
    #[serde(rename = "Дева")]
    #[strum(to_string = "Дева")]
    Virgo,
    #[serde(rename = "Весы")]
    #[strum(to_string = "Весы")]
    Libra,
    #[serde(rename = "Скорпион")]
    #[strum(to_string = "Скорпион")]
    Scorpio,
    #[serde(rename = "Стрелец")]
    #[strum(to_string = "Стрелец")]
    Sagittarius,
    #[serde(rename = "Козерог")]
    #[strum(to_string = "Козерог")]
    Capricorn,
    #[serde(rename = "Водолей")]
    #[strum(to_string = "Водолей")]
    Aquarius,
    #[serde(rename = "Рыбы")]
    #[strum(to_string = "Рыбы")]
    Pisces,
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    #[test]
    fn twelve_signs_with_distinct_names() {
        let names: Vec<String> = ZodiacSign::iter().map(|s| s.to_string()).collect();
        assert_eq!(names.len(), 12);
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 12);
    }

    #[test]
    fn serde_name_matches_display() {
        for sign in ZodiacSign::iter() {
            let json = serde_json::to_string(&sign).unwrap();
            assert_eq!(json, format!("\"{}\"", sign));
            let back: ZodiacSign = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sign);
        }
    }
}
