use {
    crate::ui::{UI_CONFIG, UI_TEXT, screens::with_column},
    eframe::egui::{Align2, Context, FontId, RichText, Sense, Vec2},
};

pub(crate) fn render_intro(ctx: &Context) {
    let t = ctx.input(|i| i.time) as f32;
    let pulse = 0.85 + 0.15 * (t * 3.0).sin().abs();

    with_column(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.ctx().screen_rect().height() * 0.25);
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(96.0), Sense::hover());
            let painter = ui.painter();
            painter.circle_filled(
                rect.center(),
                48.0 * pulse,
                UI_CONFIG.colors.accent_yellow,
            );
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                &UI_TEXT.icon_sparkle,
                FontId::proportional(40.0),
                UI_CONFIG.colors.background,
            );
            ui.add_space(24.0);
            ui.label(
                RichText::new(&UI_TEXT.intro_title)
                    .size(30.0)
                    .strong()
                    .color(UI_CONFIG.colors.ink),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&UI_TEXT.intro_body).color(UI_CONFIG.colors.subdued));
        });
    });
}
