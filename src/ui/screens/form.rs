use {
    crate::{
        domain::{Focus, Gender, Period, Profile, ProfileUpdate, Style, ZodiacSign},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, paint_zodiac_icon, screens::with_column},
    },
    eframe::egui::{
        Align2, Color32, Context, CornerRadius, FontId, Grid, Margin, Rect, Response, RichText,
        Sense, Stroke, StrokeKind, TextEdit, TopBottomPanel, Ui, Vec2, vec2,
    },
    strum::IntoEnumIterator,
};

/// What the user did on the form this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormAction {
    SelectSign(ZodiacSign),
    Update(ProfileUpdate),
    Submit,
}

pub(crate) fn render_form(
    ctx: &Context,
    profile: &Profile,
    error: Option<&str>,
) -> Option<FormAction> {
    let mut action = None;

    TopBottomPanel::bottom("submit_bar")
        .frame(UI_CONFIG.panel_frame())
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(UI_CONFIG.column_width);
                if ui
                    .primary_button(&UI_TEXT.form_submit, profile.is_complete())
                    .clicked()
                {
                    action = Some(FormAction::Submit);
                }
            });
            ui.add_space(8.0);
        });

    with_column(ctx, |ui| {
        ui.add_space(8.0);
        name_input(ui, profile, &mut action);
        ui.add_space(20.0);
        sign_grid(ui, profile, &mut action);
        ui.add_space(20.0);

        ui.section_title(&UI_TEXT.form_gender);
        ui.horizontal_wrapped(|ui| {
            for gender in Gender::iter() {
                let chip = ui.choice_chip(
                    &gender.to_string(),
                    profile.gender == gender,
                    UI_CONFIG.colors.label,
                );
                if chip.clicked() {
                    action = Some(FormAction::Update(ProfileUpdate::Gender(gender)));
                }
            }
        });
        ui.add_space(20.0);

        ui.section_title(&UI_TEXT.form_period);
        ui.horizontal_wrapped(|ui| {
            for period in Period::iter() {
                let chip =
                    ui.choice_chip(period.label(), profile.period == period, UI_CONFIG.colors.ink);
                if chip.clicked() {
                    action = Some(FormAction::Update(ProfileUpdate::Period(period)));
                }
            }
        });
        ui.add_space(20.0);

        ui.section_title(&UI_TEXT.form_focus);
        ui.horizontal_wrapped(|ui| {
            for focus in Focus::iter() {
                let chip = ui.choice_chip(
                    &focus.to_string(),
                    profile.focus == focus,
                    UI_CONFIG.colors.accent_red,
                );
                if chip.clicked() {
                    action = Some(FormAction::Update(ProfileUpdate::Focus(focus)));
                }
            }
        });
        ui.add_space(20.0);

        ui.section_title(&UI_TEXT.form_style);
        ui.horizontal_wrapped(|ui| {
            for style in Style::iter() {
                let chip = ui.choice_chip(style.label(), profile.style == style, UI_CONFIG.colors.ink);
                if chip.clicked() {
                    action = Some(FormAction::Update(ProfileUpdate::Style(style)));
                }
            }
        });

        if let Some(message) = error {
            ui.add_space(20.0);
            UI_CONFIG.error_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(message).color(UI_CONFIG.colors.accent_red));
            });
        }
        ui.add_space(24.0);
    });

    action
}

fn name_input(ui: &mut Ui, profile: &Profile, action: &mut Option<FormAction>) {
    ui.section_title(&UI_TEXT.form_name);
    let mut name = profile.name.clone();
    let edit = TextEdit::singleline(&mut name)
        .hint_text(&UI_TEXT.form_name_hint)
        .font(FontId::proportional(18.0))
        .desired_width(f32::INFINITY)
        .margin(Margin::symmetric(8, 10));
    if ui.add(edit).changed() {
        *action = Some(FormAction::Update(ProfileUpdate::Name(name)));
    }
}

fn sign_grid(ui: &mut Ui, profile: &Profile, action: &mut Option<FormAction>) {
    ui.section_title(&UI_TEXT.form_sign);
    let spacing = 8.0;
    let tile = ((ui.available_width() - spacing * 3.0) / 4.0).max(48.0);
    Grid::new("sign_grid")
        .spacing(Vec2::splat(spacing))
        .show(ui, |ui| {
            for (i, sign) in ZodiacSign::iter().enumerate() {
                if sign_tile(ui, sign, profile.sign == Some(sign), tile).clicked() {
                    *action = Some(FormAction::SelectSign(sign));
                }
                if (i + 1) % 4 == 0 {
                    ui.end_row();
                }
            }
        });
}

fn sign_tile(ui: &mut Ui, sign: ZodiacSign, is_selected: bool, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let (fill, stroke, ink) = if is_selected {
        (UI_CONFIG.colors.ink, Stroke::NONE, Color32::WHITE)
    } else if response.hovered() {
        (
            UI_CONFIG.colors.card,
            Stroke::new(1.0, UI_CONFIG.colors.subdued),
            UI_CONFIG.colors.label,
        )
    } else {
        (
            UI_CONFIG.colors.card,
            Stroke::new(1.0, UI_CONFIG.colors.card_border),
            UI_CONFIG.colors.subdued,
        )
    };
    let painter = ui.painter();
    painter.rect(rect, CornerRadius::same(12), fill, stroke, StrokeKind::Inside);

    let icon_side = size * 0.4;
    let icon_rect = Rect::from_center_size(
        rect.center() - vec2(0.0, size * 0.1),
        Vec2::splat(icon_side),
    );
    paint_zodiac_icon(painter, icon_rect, sign, ink);
    painter.text(
        rect.center_bottom() - vec2(0.0, size * 0.12),
        Align2::CENTER_BOTTOM,
        sign.to_string().to_uppercase(),
        FontId::proportional(9.0),
        ink,
    );
    response
}
