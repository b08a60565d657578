use {
    crate::ui::{UI_CONFIG, UI_TEXT},
    eframe::egui::{
        Button, Context, FontId, Rect, RichText, TextFormat, TopBottomPanel, pos2,
        text::LayoutJob, vec2,
    },
};

/// Title bar. Returns true when the history button was clicked.
pub(crate) fn render_header(ctx: &Context, show_history_button: bool) -> bool {
    let mut clicked = false;
    TopBottomPanel::top("header")
        .frame(UI_CONFIG.header_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let font_id = FontId::proportional(20.0);
                let mut title = LayoutJob::default();
                title.append(
                    &format!("{} ", UI_TEXT.app_title_1),
                    0.0,
                    TextFormat::simple(font_id.clone(), UI_CONFIG.colors.ink),
                );
                title.append(
                    &UI_TEXT.app_title_2,
                    0.0,
                    TextFormat::simple(font_id, UI_CONFIG.colors.accent_red),
                );
                ui.label(title);
                ui.label(
                    RichText::new(&UI_TEXT.app_subtitle)
                        .size(10.0)
                        .color(UI_CONFIG.colors.subdued),
                );
            });

            if show_history_button {
                let bar = ui.max_rect();
                let rect = Rect::from_min_size(
                    pos2(bar.right() - 32.0, bar.center().y - 16.0),
                    vec2(32.0, 32.0),
                );
                let button = Button::new(
                    RichText::new(&UI_TEXT.icon_history)
                        .size(20.0)
                        .color(UI_CONFIG.colors.label),
                )
                .frame(false);
                clicked = ui.put(rect, button).clicked();
            }
        });
    clicked
}
