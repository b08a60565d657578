use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub background: Color32,
    pub ink: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub field: Color32,
    pub accent_red: Color32,
    pub accent_yellow: Color32,
    pub accent_yellow_dark: Color32,
    pub accent_green: Color32,
    pub error_fill: Color32,
    pub star: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Content column width, like a phone screen.
    pub column_width: f32,
    pub card_radius: u8,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::WHITE,
        ink: Color32::BLACK,
        label: Color32::from_rgb(75, 85, 99),
        subdued: Color32::from_rgb(156, 163, 175),
        card: Color32::WHITE,
        card_border: Color32::from_rgb(243, 244, 246),
        field: Color32::from_rgb(249, 250, 251),
        accent_red: Color32::from_rgb(239, 68, 68),
        accent_yellow: Color32::from_rgb(234, 179, 8),
        accent_yellow_dark: Color32::from_rgb(202, 138, 4),
        accent_green: Color32::from_rgb(22, 163, 74),
        error_fill: Color32::from_rgb(254, 242, 242),
        star: Color32::from_rgb(234, 179, 8),
    },
    column_width: 420.0,
    card_radius: 16,
};

impl UiConfig {
    /// White card with a hairline border.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(self.card_radius),
            ..Default::default()
        }
    }

    /// Card for the section the user asked about.
    pub fn highlighted_card_frame(&self, accent: Color32) -> Frame {
        Frame {
            stroke: Stroke::new(1.5, accent.linear_multiply(0.4)),
            ..self.card_frame()
        }
    }

    pub fn dark_card_frame(&self) -> Frame {
        Frame {
            fill: Color32::from_rgb(17, 24, 39),
            stroke: Stroke::NONE,
            inner_margin: Margin::same(20),
            corner_radius: CornerRadius::same(self.card_radius),
            ..Default::default()
        }
    }

    pub fn error_frame(&self) -> Frame {
        Frame {
            fill: self.colors.error_fill,
            stroke: Stroke::new(1.0, self.colors.accent_red.linear_multiply(0.3)),
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }

    /// Panels stay transparent so the starfield shows through.
    pub fn panel_frame(&self) -> Frame {
        Frame {
            fill: Color32::TRANSPARENT,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    /// Frame for the header bar
    pub fn header_frame(&self) -> Frame {
        Frame {
            fill: Color32::from_white_alpha(220),
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }
}
