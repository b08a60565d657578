use {
    crate::domain::ZodiacSign,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Gender {
    #[default]
    #[serde(rename = "Мужской")]
    #[strum(to_string = "Мужской")]
    Male,
    #[serde(rename = "Женский")]
    #[strum(to_string = "Женский")]
    Female,
    #[serde(rename = "Другой")]
    #[strum(to_string = "Другой")]
    Other,
}

/// Area of life the user cares most about. Stored as the Russian label.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Focus {
    #[default]
    #[serde(rename = "Общий")]
    #[strum(to_string = "Общий")]
    General,
    #[serde(rename = "Любовь")]
    #[strum(to_string = "Любовь")]
    Love,
    #[serde(rename = "Карьера")]
    #[strum(to_string = "Карьера")]
    Career,
    #[serde(rename = "Здоровье")]
    #[strum(to_string = "Здоровье")]
    Health,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Period {
    #[default]
    Today,
    Tomorrow,
    Week,
    Month,
}

impl Period {
    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Сегодня",
            Self::Tomorrow => "Завтра",
            Self::Week => "Неделя",
            Self::Month => "Месяц",
        }
    }

    /// Accusative form, as in "на период «Неделю»".
    pub fn label_accusative(self) -> &'static str {
        match self {
            Self::Today => "Сегодня",
            Self::Tomorrow => "Завтра",
            Self::Week => "Неделю",
            Self::Month => "Месяц",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Style {
    #[default]
    Serious,
    Humorous,
}

impl Style {
    pub fn label(self) -> &'static str {
        match self {
            Self::Serious => "Серьезный",
            Self::Humorous => "Шуточный",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Self::Serious => "Серьез",
            Self::Humorous => "Шутк",
        }
    }
}

/// The user's astrological and preference inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub sign: Option<ZodiacSign>,
    pub gender: Gender,
    pub focus: Focus,
    pub period: Period,
    pub style: Style,
}

impl Profile {
    pub fn is_complete(&self) -> bool {
        self.sign.is_some()
    }
}

/// A single-field edit coming from a form control.
/// The sign has its own operation on the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileUpdate {
    Name(String),
    Gender(Gender),
    Focus(Focus),
    Period(Period),
    Style(Style),
}

impl Profile {
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Name(name) => self.name = name,
            ProfileUpdate::Gender(gender) => self.gender = gender,
            ProfileUpdate::Focus(focus) => self.focus = focus,
            ProfileUpdate::Period(period) => self.period = period,
            ProfileUpdate::Style(style) => self.style = style,
        }
    }
}
