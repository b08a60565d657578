use {
    crate::{
        data::HistoryLog,
        domain::HistoryEntry,
        ui::{UI_CONFIG, UI_TEXT, paint_zodiac_icon, screens::with_column},
        utils::epoch_ms_to_local_string,
    },
    eframe::egui::{
        Align, Align2, Button, Context, CornerRadius, FontId, Layout, Rect, Response, RichText,
        Sense, Stroke, StrokeKind, Ui, Vec2, pos2, vec2,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryAction {
    Back,
    /// Index into the log, newest first.
    Open(usize),
}

const ROW_HEIGHT: f32 = 72.0;
const ICON_BOX: f32 = 48.0;

pub(crate) fn render_history(ctx: &Context, history: &HistoryLog) -> Option<HistoryAction> {
    let mut action = None;

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
                action = Some(HistoryAction::Back);
            }
            ui.label(
                RichText::new(&UI_TEXT.history_title)
                    .size(22.0)
                    .strong()
                    .color(UI_CONFIG.colors.ink),
            );
        });
        ui.add_space(16.0);

        if history.is_empty() {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(60.0);
                ui.label(
                    RichText::new(&UI_TEXT.history_empty)
                        .size(16.0)
                        .color(UI_CONFIG.colors.subdued),
                );
                ui.label(
                    RichText::new(&UI_TEXT.history_empty_hint)
                        .size(13.0)
                        .color(UI_CONFIG.colors.subdued),
                );
            });
            return;
        }

        for (index, entry) in history.iter().enumerate() {
            if history_row(ui, entry).clicked() {
                action = Some(HistoryAction::Open(index));
            }
            ui.add_space(8.0);
        }
        ui.add_space(16.0);
    });

    action
}

fn history_row(ui: &mut Ui, entry: &HistoryEntry) -> Response {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(vec2(width, ROW_HEIGHT), Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let colors = &UI_CONFIG.colors;
    let border = if response.hovered() {
        colors.subdued
    } else {
        colors.card_border
    };
    let painter = ui.painter();
    painter.rect(
        rect,
        CornerRadius::same(UI_CONFIG.card_radius),
        colors.card,
        Stroke::new(1.0, border),
        StrokeKind::Inside,
    );

    let icon_box = Rect::from_min_size(
        pos2(rect.left() + 12.0, rect.center().y - ICON_BOX / 2.0),
        Vec2::splat(ICON_BOX),
    );
    painter.rect_filled(icon_box, CornerRadius::same(12), colors.field);
    if let Some(sign) = entry.profile.sign {
        paint_zodiac_icon(painter, icon_box.shrink(ICON_BOX * 0.25), sign, colors.ink);
    }

    let text_left = icon_box.right() + 12.0;
    painter.text(
        pos2(text_left, rect.top() + 14.0),
        Align2::LEFT_TOP,
        entry.forecast.date.to_uppercase(),
        FontId::proportional(10.0),
        colors.subdued,
    );
    let sign = entry
        .profile
        .sign
        .map(|s| s.to_string())
        .unwrap_or_default();
    painter.text(
        pos2(text_left, rect.top() + 28.0),
        Align2::LEFT_TOP,
        format!("{sign} • {}", entry.profile.focus),
        FontId::proportional(16.0),
        colors.ink,
    );
    painter.text(
        pos2(text_left, rect.bottom() - 14.0),
        Align2::LEFT_BOTTOM,
        epoch_ms_to_local_string(entry.timestamp),
        FontId::proportional(10.0),
        colors.subdued,
    );
    painter.text(
        pos2(rect.right() - 14.0, rect.center().y),
        Align2::RIGHT_CENTER,
        entry.profile.style.badge(),
        FontId::proportional(11.0),
        colors.label,
    );

    response
}
