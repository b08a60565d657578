use {
    crate::{
        domain::{Focus, Period, Profile, Style},
        utils::long_date_ru,
    },
    chrono::NaiveDate,
};

const DEFAULT_NAME: &str = "Путешественник";

fn period_phrase(period: Period, today: NaiveDate) -> String {
    match period {
        Period::Today => format!("на сегодня ({})", long_date_ru(today)),
        Period::Tomorrow => "на завтра".to_string(),
        Period::Week => "на ближайшую неделю".to_string(),
        Period::Month => "на текущий месяц".to_string(),
    }
}

fn style_instruction(style: Style) -> &'static str {
    match style {
        Style::Serious => {
            "Стиль: Профессиональный, мистический, глубокий, но лаконичный и поддерживающий. Избегай негатива."
        }
        Style::Humorous => {
            "Стиль: Шуточный, веселый, ироничный, с добрым сарказмом. Используй забавные метафоры."
        }
    }
}

fn focus_instruction(focus: Focus) -> String {
    match focus {
        Focus::General => "Составь сбалансированный прогноз, где все разделы (Общее, Любовь, Карьера, Здоровье) одинаково важны и информативны.".to_string(),
        Focus::Love | Focus::Career | Focus::Health => format!(
            "Пользователя особенно волнует сфера \"{focus}\". Сделай раздел \"{focus}\" максимально развернутым, подробным и детальным (минимум 4-5 предложений). Остальные разделы опиши кратко."
        ),
    }
}

/// Natural-language instruction sent as the single user turn.
pub fn build_prompt(profile: &Profile, today: NaiveDate) -> String {
    let name = match profile.name.trim() {
        "" => DEFAULT_NAME,
        name => name,
    };
    let sign = profile
        .sign
        .map(|s| s.to_string())
        .unwrap_or_default();

    format!(
        "Ты мудрый астролог. Составь персональный гороскоп.

Информация о пользователе:
- Имя: {name}
- Знак зодиака: {sign}
- Пол: {gender}
- Период прогноза: {period}

{style}
{focus}

Также оцени благоприятность этого периода в процентах (0-100) для четырех сфер: Любовь, Карьера, Здоровье, Общая удача.

Ответ должен быть строго в формате JSON.",
        gender = profile.gender,
        period = period_phrase(profile.period, today),
        style = style_instruction(profile.style),
        focus = focus_instruction(profile.focus),
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{Gender, ZodiacSign},
    };

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn blank_name_falls_back_to_traveller() {
        let profile = Profile {
            name: "   ".into(),
            sign: Some(ZodiacSign::Pisces),
            ..Default::default()
        };
        let prompt = build_prompt(&profile, day());
        assert!(prompt.contains("- Имя: Путешественник"));
        assert!(prompt.contains("- Знак зодиака: Рыбы"));
        assert!(prompt.contains("- Пол: Мужской"));
    }

    #[test]
    fn today_embeds_the_date() {
        let profile = Profile {
            sign: Some(ZodiacSign::Leo),
            ..Default::default()
        };
        let prompt = build_prompt(&profile, day());
        assert!(prompt.contains("на сегодня (15 "));
        assert!(prompt.contains("2026)"));
    }

    #[test]
    fn focused_sphere_gets_expanded() {
        let profile = Profile {
            name: "Anna".into(),
            sign: Some(ZodiacSign::Leo),
            gender: Gender::Female,
            focus: Focus::Career,
            period: Period::Week,
            style: Style::Serious,
        };
        let prompt = build_prompt(&profile, day());
        assert!(prompt.contains("- Имя: Anna"));
        assert!(prompt.contains("на ближайшую неделю"));
        assert!(prompt.contains("сфера \"Карьера\""));
        assert!(prompt.contains("Профессиональный"));
        assert!(!prompt.contains("сбалансированный"));
    }

    #[test]
    fn general_focus_asks_for_balance() {
        let profile = Profile {
            sign: Some(ZodiacSign::Aries),
            style: Style::Humorous,
            ..Default::default()
        };
        let prompt = build_prompt(&profile, day());
        assert!(prompt.contains("сбалансированный"));
        assert!(prompt.contains("Шуточный"));
    }
}
