mod chart;
mod screens;
mod starfield;
mod styles;
mod ui_config;
mod ui_text;
mod zodiac_icon;

pub use chart::{ChartAxis, ChartGeometry, ChartLabel, ChartPoint};
pub(crate) use chart::render_chart;

pub(crate) use screens::{
    FormAction, HistoryAction, render_form, render_header, render_history, render_intro,
    render_loading, render_result,
};

pub use starfield::Starfield;

pub(crate) use styles::{UiStyleExt, caps_heading};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};

pub use zodiac_icon::{GlyphStroke, glyph};
pub(crate) use zodiac_icon::{paint_zodiac_icon, zodiac_icon};
