use {
    crate::ui::UI_CONFIG,
    eframe::egui::{
        Button, Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui,
        Vec2, WidgetInfo, WidgetType,
    },
};

pub(crate) fn caps_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .size(11.0)
        .strong()
        .color(UI_CONFIG.colors.subdued)
}

pub(crate) trait UiStyleExt {
    /// Small grey caps title above a form group.
    fn section_title(&mut self, text: &str);

    /// Pill that looks filled when selected. Acts as a button.
    fn choice_chip(&mut self, text: &str, is_selected: bool, accent: Color32) -> Response;

    /// Full-width black call to action.
    fn primary_button(&mut self, text: &str, enabled: bool) -> Response;

    /// Full-width light grey button.
    fn secondary_button(&mut self, text: &str) -> Response;
}

impl UiStyleExt for Ui {
    fn section_title(&mut self, text: &str) {
        self.label(caps_heading(text));
        self.add_space(4.0);
    }

    fn choice_chip(&mut self, text: &str, is_selected: bool, accent: Color32) -> Response {
        let padding = Vec2::new(14.0, 8.0);
        let font_id = FontId::proportional(13.0);
        let idle_color = UI_CONFIG.colors.label;
        let galley = self
            .painter()
            .layout_no_wrap(text.to_string(), font_id, idle_color);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let (bg_fill, stroke, text_color) = if is_selected {
                (accent, Stroke::new(1.0, accent), Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (
                    UI_CONFIG.colors.field,
                    Stroke::new(1.0, accent.linear_multiply(0.5)),
                    idle_color,
                )
            } else {
                (
                    UI_CONFIG.colors.card,
                    Stroke::new(1.0, UI_CONFIG.colors.card_border),
                    idle_color,
                )
            };

            self.painter().rect(
                rect,
                CornerRadius::same(255),
                bg_fill,
                stroke,
                StrokeKind::Inside,
            );
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn primary_button(&mut self, text: &str, enabled: bool) -> Response {
        let width = self.available_width();
        let button = Button::new(
            RichText::new(text)
                .size(14.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(UI_CONFIG.colors.ink)
        .corner_radius(CornerRadius::same(12))
        .min_size(Vec2::new(width, 48.0));
        self.add_enabled(enabled, button)
    }

    fn secondary_button(&mut self, text: &str) -> Response {
        let width = self.available_width();
        let button = Button::new(
            RichText::new(text)
                .size(14.0)
                .strong()
                .color(UI_CONFIG.colors.ink),
        )
        .fill(UI_CONFIG.colors.card_border)
        .corner_radius(CornerRadius::same(12))
        .min_size(Vec2::new(width, 48.0));
        self.add(button)
    }
}
