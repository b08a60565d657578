use {
    crate::{
        app::ActiveForecast,
        domain::Focus,
        ui::{
            UI_CONFIG, UI_TEXT, UiStyleExt, caps_heading, render_chart, screens::with_column,
            zodiac_icon,
        },
    },
    eframe::egui::{
        Align, Button, Color32, Context, CornerRadius, Frame, Layout, Margin, RichText, Sense,
        Ui, Vec2,
    },
};

/// One of the four prose sections under the chart.
struct Section<'a> {
    focus: Focus,
    title: &'a str,
    body: &'a str,
    accent: Color32,
}

/// Returns true when the user asked for a new forecast (either back button).
pub(crate) fn render_result(ctx: &Context, active: &ActiveForecast) -> bool {
    let mut leave = false;
    let forecast = &active.forecast;
    let profile = &active.profile;

    with_column(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let back = Button::new(
                RichText::new(&UI_TEXT.icon_back)
                    .size(18.0)
                    .color(UI_CONFIG.colors.label),
            )
            .frame(false);
            if ui.add(back).clicked() {
                leave = true;
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                date_badge(ui, &forecast.date);
            });
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if let Some(sign) = profile.sign {
                zodiac_icon(ui, sign, 56.0, UI_CONFIG.colors.ink);
                ui.add_space(8.0);
            }
            ui.vertical(|ui| {
                let sign = profile.sign.map(|s| s.to_string()).unwrap_or_default();
                ui.label(
                    RichText::new(sign)
                        .size(30.0)
                        .strong()
                        .color(UI_CONFIG.colors.ink),
                );
                let who = if profile.name.trim().is_empty() {
                    UI_TEXT.result_personal.clone()
                } else {
                    profile.name.trim().to_string()
                };
                ui.label(
                    RichText::new(format!("{who} • {}", profile.focus))
                        .size(13.0)
                        .color(UI_CONFIG.colors.subdued),
                );
            });
        });
        ui.add_space(16.0);

        UI_CONFIG.dark_card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(caps_heading(&UI_TEXT.result_mood).color(UI_CONFIG.colors.accent_yellow));
            ui.add_space(4.0);
            ui.label(
                RichText::new(&forecast.mood)
                    .size(20.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
        ui.add_space(12.0);

        ui.columns(2, |cols| {
            lucky_tile(&mut cols[0], &UI_TEXT.result_lucky_color, &forecast.lucky_color);
            lucky_tile(&mut cols[1], &UI_TEXT.result_lucky_number, &forecast.lucky_number);
        });
        ui.add_space(12.0);

        render_chart(ui, &forecast.scores);
        ui.add_space(12.0);

        let colors = &UI_CONFIG.colors;
        let sections = [
            Section {
                focus: Focus::General,
                title: &UI_TEXT.result_general,
                body: &forecast.general,
                accent: colors.ink,
            },
            Section {
                focus: Focus::Love,
                title: &UI_TEXT.result_love,
                body: &forecast.love,
                accent: colors.accent_red,
            },
            Section {
                focus: Focus::Career,
                title: &UI_TEXT.result_career,
                body: &forecast.career,
                accent: colors.accent_yellow_dark,
            },
            Section {
                focus: Focus::Health,
                title: &UI_TEXT.result_health,
                body: &forecast.health,
                accent: colors.accent_green,
            },
        ];
        for section in &sections {
            section_card(ui, section, profile.focus == section.focus);
            ui.add_space(10.0);
        }

        UI_CONFIG
            .highlighted_card_frame(UI_CONFIG.colors.accent_yellow)
            .fill(UI_CONFIG.colors.accent_yellow.gamma_multiply(0.15))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    caps_heading(&UI_TEXT.result_advice).color(UI_CONFIG.colors.accent_yellow_dark),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(&forecast.advice)
                        .size(15.0)
                        .italics()
                        .color(UI_CONFIG.colors.ink),
                );
            });
        ui.add_space(20.0);

        if ui.secondary_button(&UI_TEXT.result_new).clicked() {
            leave = true;
        }
        ui.add_space(24.0);
    });

    leave
}

fn date_badge(ui: &mut Ui, date: &str) {
    Frame::new()
        .fill(UI_CONFIG.colors.ink)
        .corner_radius(CornerRadius::same(255))
        .inner_margin(Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(
                RichText::new(date.to_uppercase())
                    .size(10.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

fn lucky_tile(ui: &mut Ui, title: &str, value: &str) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(56.0);
        ui.label(caps_heading(title));
        ui.add_space(2.0);
        ui.label(
            RichText::new(value)
                .size(16.0)
                .strong()
                .color(UI_CONFIG.colors.ink),
        );
    });
}

fn section_card(ui: &mut Ui, section: &Section<'_>, is_focused: bool) {
    let frame = if is_focused {
        UI_CONFIG.highlighted_card_frame(section.accent)
    } else {
        UI_CONFIG.card_frame()
    };
    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(Vec2::splat(8.0), Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, section.accent);
            ui.label(
                RichText::new(section.title)
                    .size(15.0)
                    .strong()
                    .color(UI_CONFIG.colors.ink),
            );
        });
        ui.add_space(4.0);
        ui.label(
            RichText::new(section.body)
                .size(14.0)
                .color(UI_CONFIG.colors.label),
        );
    });
}
