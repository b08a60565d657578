use std::time::Duration;

/// How long the splash screen stays up before the form appears.
pub const INTRO_DELAY: Duration = Duration::from_secs(2);

pub mod chart {
    /// Logical canvas edge; the chart is scaled down to the available width.
    pub const CANVAS_SIZE: f32 = 420.0;
    pub const RADIUS: f32 = 80.0;
    pub const LABEL_PADDING: f32 = 55.0;
    pub const MAX_SCORE: f32 = 100.0;
    pub const WEB_SCALES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];
    pub const POINT_RADIUS: f32 = 6.0;
}

pub mod starfield {
    /// One star per this many square points of viewport.
    pub const AREA_PER_STAR: f32 = 8000.0;
    pub const MIN_RADIUS: f32 = 0.5;
    pub const RADIUS_SPREAD: f32 = 2.0;
    pub const MIN_TWINKLE: f32 = 0.005;
    pub const TWINKLE_SPREAD: f32 = 0.02;
}

pub mod zodiac_icon {
    /// Glyphs are authored on a square grid of this size.
    pub const GRID: f32 = 24.0;
    /// Points used to approximate a full circle.
    pub const ARC_SEGMENTS_PER_TURN: usize = 32;
}
