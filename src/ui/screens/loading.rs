use {
    crate::{
        domain::Profile,
        ui::{UI_CONFIG, UI_TEXT, paint_zodiac_icon, screens::with_column},
    },
    eframe::egui::{Align, Context, Layout, Rect, RichText, Sense, Shape, Stroke, Vec2},
    std::f32::consts::TAU,
};

const SPINNER_SIZE: f32 = 96.0;
const SPINNER_SWEEP: f32 = TAU * 0.3;
const SPINNER_SPEED: f32 = 2.5;

/// Spinner while the request is in flight. Painting happens every frame; the
/// caller keeps the context repainting.
pub(crate) fn render_loading(ctx: &Context, profile: &Profile) {
    with_column(ctx, |ui| {
        ui.add_space(80.0);
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(SPINNER_SIZE), Sense::hover());
            let painter = ui.painter();
            let radius = SPINNER_SIZE / 2.0 - 4.0;
            painter.circle_stroke(
                rect.center(),
                radius,
                Stroke::new(4.0, UI_CONFIG.colors.card_border),
            );

            let start = ui.input(|i| i.time) as f32 * SPINNER_SPEED;
            let points: Vec<_> = (0..=24)
                .map(|i| {
                    let a = start + SPINNER_SWEEP * i as f32 / 24.0;
                    rect.center() + radius * Vec2::angled(a)
                })
                .collect();
            painter.add(Shape::line(points, Stroke::new(4.0, UI_CONFIG.colors.accent_red)));

            if let Some(sign) = profile.sign {
                let icon = Rect::from_center_size(rect.center(), Vec2::splat(SPINNER_SIZE * 0.4));
                paint_zodiac_icon(painter, icon, sign, UI_CONFIG.colors.ink);
            } else {
                painter.circle_filled(rect.center(), 4.0, UI_CONFIG.colors.ink);
            }

            ui.add_space(24.0);
            ui.label(
                RichText::new(&UI_TEXT.loading_title)
                    .size(22.0)
                    .strong()
                    .color(UI_CONFIG.colors.ink),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(loading_caption(profile))
                    .size(14.0)
                    .color(UI_CONFIG.colors.subdued),
            );
        });
    });
    ctx.request_repaint();
}

fn loading_caption(profile: &Profile) -> String {
    let sign = profile.sign.map(|s| s.to_string()).unwrap_or_default();
    format!(
        "{} {} {} \"{}\"",
        UI_TEXT.loading_body_prefix,
        sign,
        UI_TEXT.loading_body_period,
        profile.period.label_accusative()
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{Period, ZodiacSign},
    };

    #[test]
    fn caption_names_sign_and_period() {
        let profile = Profile {
            sign: Some(ZodiacSign::Leo),
            period: Period::Week,
            ..Default::default()
        };
        let caption = loading_caption(&profile);
        assert!(caption.contains("Лев"), "{caption}");
        assert!(caption.contains(Period::Week.label_accusative()), "{caption}");
    }
}
