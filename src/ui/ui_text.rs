use std::sync::LazyLock;

// Glyphs available in egui's bundled emoji font.
pub const ICON_HISTORY: &str = "🕓";
pub const ICON_BACK: &str = "⬅";
pub const ICON_SPARKLE: &str = "✨";

pub struct UiText {
    pub icon_history: String,
    pub icon_back: String,
    pub icon_sparkle: String,

    // --- Header ---
    pub app_title_1: String,
    pub app_title_2: String,
    pub app_subtitle: String,

    // --- Intro ---
    pub intro_title: String,
    pub intro_body: String,

    // --- Form ---
    pub form_name: String,
    pub form_name_hint: String,
    pub form_sign: String,
    pub form_gender: String,
    pub form_period: String,
    pub form_focus: String,
    pub form_style: String,
    pub form_submit: String,

    // --- Loading ---
    pub loading_title: String,
    pub loading_body_prefix: String,
    pub loading_body_period: String,

    // --- Result ---
    pub result_personal: String,
    pub result_mood: String,
    pub result_lucky_color: String,
    pub result_lucky_number: String,
    pub result_balance: String,
    pub result_general: String,
    pub result_love: String,
    pub result_career: String,
    pub result_health: String,
    pub result_advice: String,
    pub result_new: String,

    // --- Chart axis labels ---
    pub chart_general: String,
    pub chart_career: String,
    pub chart_love: String,
    pub chart_health: String,

    // --- History ---
    pub history_title: String,
    pub history_empty: String,
    pub history_empty_hint: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_history: ICON_HISTORY.to_string(),
    icon_back: ICON_BACK.to_string(),
    icon_sparkle: ICON_SPARKLE.to_string(),

    app_title_1: "СОЗВЕЗДИЕ".to_string(),
    app_title_2: "МЫСЛИ".to_string(),
    app_subtitle: "ПЕРСОНАЛЬНЫЙ ГОРОСКОП".to_string(),

    intro_title: "Звезды говорят".to_string(),
    intro_body: "Ваш путь начинается здесь.".to_string(),

    form_name: "ВАШЕ ИМЯ".to_string(),
    form_name_hint: "Как к вам обращаться?".to_string(),
    form_sign: "ЗНАК ЗОДИАКА".to_string(),
    form_gender: "ПОЛ".to_string(),
    form_period: "ПЕРИОД".to_string(),
    form_focus: "ЧТО ВАС ВОЛНУЕТ?".to_string(),
    form_style: "СТИЛЬ ГОРОСКОПА".to_string(),
    form_submit: "УЗНАТЬ СУДЬБУ".to_string(),

    loading_title: "Связь с космосом...".to_string(),
    loading_body_prefix: "ИИ анализирует положение звезд для".to_string(),
    loading_body_period: "на период".to_string(),

    result_personal: "Персональный прогноз".to_string(),
    result_mood: "НАСТРОЕНИЕ".to_string(),
    result_lucky_color: "ЦВЕТ УДАЧИ".to_string(),
    result_lucky_number: "ЧИСЛО УДАЧИ".to_string(),
    result_balance: "ЭНЕРГЕТИЧЕСКИЙ БАЛАНС".to_string(),
    result_general: "Общее".to_string(),
    result_love: "Любовь и Отношения".to_string(),
    result_career: "Карьера".to_string(),
    result_health: "Здоровье".to_string(),
    result_advice: "СОВЕТ ЗВЕЗД".to_string(),
    result_new: "НОВЫЙ ПРОГНОЗ".to_string(),

    chart_general: "УДАЧА".to_string(),
    chart_career: "КАРЬЕРА".to_string(),
    chart_love: "ЛЮБОВЬ".to_string(),
    chart_health: "ЗДОРОВЬЕ".to_string(),

    history_title: "История звезд".to_string(),
    history_empty: "История пуста.".to_string(),
    history_empty_hint: "Получите свой первый гороскоп!".to_string(),
});
