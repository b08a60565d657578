use {
    crate::{
        config::constants::chart::{
            CANVAS_SIZE, LABEL_PADDING, MAX_SCORE, POINT_RADIUS, RADIUS, WEB_SCALES,
        },
        domain::ForecastScores,
        ui::{UI_CONFIG, UI_TEXT, styles::caps_heading},
    },
    eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2, vec2},
    std::f32::consts::{FRAC_PI_2, TAU},
};

/// Radar axes, clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartAxis {
    General,
    Career,
    Love,
    Health,
}

impl ChartAxis {
    pub const ALL: [ChartAxis; 4] = [Self::General, Self::Career, Self::Love, Self::Health];

    fn score(self, scores: &ForecastScores) -> u8 {
        match self {
            Self::General => scores.general,
            Self::Career => scores.career,
            Self::Love => scores.love,
            Self::Health => scores.health,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => &UI_TEXT.chart_general,
            Self::Career => &UI_TEXT.chart_career,
            Self::Love => &UI_TEXT.chart_love,
            Self::Health => &UI_TEXT.chart_health,
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::General => UI_CONFIG.colors.ink,
            Self::Career => UI_CONFIG.colors.accent_yellow_dark,
            Self::Love => UI_CONFIG.colors.accent_red,
            Self::Health => UI_CONFIG.colors.accent_green,
        }
    }

    /// Top, right, bottom, left: anchor so the text sits outside the web.
    fn label_anchor(self) -> Align2 {
        match self {
            Self::General => Align2::CENTER_BOTTOM,
            Self::Career => Align2::LEFT_CENTER,
            Self::Love => Align2::CENTER_TOP,
            Self::Health => Align2::RIGHT_CENTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub axis: ChartAxis,
    pub pos: Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLabel {
    pub axis: ChartAxis,
    pub pos: Pos2,
    pub anchor: Align2,
}

/// Everything needed to draw the radar, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub center: Pos2,
    pub radius: f32,
    pub points: [ChartPoint; 4],
    /// Reference polygons at 25/50/75/100%.
    pub webs: [[Pos2; 4]; 4],
    pub spokes: [Pos2; 4],
    pub labels: [ChartLabel; 4],
}

fn axis_angle(index: usize) -> f32 {
    TAU * index as f32 / ChartAxis::ALL.len() as f32 - FRAC_PI_2
}

fn polar(center: Pos2, r: f32, angle: f32) -> Pos2 {
    center + vec2(r * angle.cos(), r * angle.sin())
}

impl ChartGeometry {
    pub fn new(scores: &ForecastScores, center: Pos2, radius: f32) -> Self {
        let at = |value: f32, i: usize| polar(center, value / MAX_SCORE * radius, axis_angle(i));

        let points = ChartAxis::ALL.map(|axis| {
            let i = axis as usize;
            ChartPoint {
                axis,
                pos: at(axis.score(scores) as f32, i),
            }
        });
        let webs: [[Pos2; 4]; 4] =
            WEB_SCALES.map(|scale| std::array::from_fn(|i| at(MAX_SCORE * scale, i)));
        let spokes: [Pos2; 4] = std::array::from_fn(|i| at(MAX_SCORE, i));
        let labels = ChartAxis::ALL.map(|axis| ChartLabel {
            axis,
            pos: polar(center, radius + LABEL_PADDING, axis_angle(axis as usize)),
            anchor: axis.label_anchor(),
        });

        Self {
            center,
            radius,
            points,
            webs,
            spokes,
            labels,
        }
    }
}

/// Card with the radar, scaled to the available width.
pub(crate) fn render_chart(ui: &mut Ui, scores: &ForecastScores) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(caps_heading(&UI_TEXT.result_balance));
        });
        let side = ui.available_width().min(CANVAS_SIZE);
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
        if ui.is_rect_visible(rect) {
            paint_chart(ui, rect, scores);
        }
    });
}

fn paint_chart(ui: &Ui, rect: Rect, scores: &ForecastScores) {
    let k = rect.width() / CANVAS_SIZE;
    let geo = ChartGeometry::new(scores, rect.center(), RADIUS * k);
    let painter = ui.painter_at(rect);
    let grid = Stroke::new(1.5, Color32::from_rgb(229, 231, 235));

    for (i, web) in geo.webs.iter().enumerate() {
        let mut ring = web.to_vec();
        ring.push(web[0]);
        if i == geo.webs.len() - 1 {
            painter.add(Shape::line(ring, grid));
        } else {
            painter.extend(Shape::dashed_line(&ring, grid, 4.0, 3.0));
        }
    }
    for spoke in geo.spokes {
        painter.line_segment([geo.center, spoke], grid);
    }

    let polygon: Vec<Pos2> = geo.points.iter().map(|p| p.pos).collect();
    painter.add(Shape::convex_polygon(
        polygon,
        UI_CONFIG.colors.accent_red.gamma_multiply(0.08),
        Stroke::new(2.5, UI_CONFIG.colors.accent_red),
    ));
    for p in geo.points {
        painter.circle(
            p.pos,
            POINT_RADIUS * k,
            p.axis.color(),
            Stroke::new(2.0, Color32::WHITE),
        );
    }
    for label in geo.labels {
        painter.text(
            label.pos,
            label.anchor,
            label.axis.label(),
            FontId::proportional(11.0),
            UI_CONFIG.colors.label,
        );
    }
}

#[cfg(test)]
mod tests {
    use {super::*, eframe::egui::pos2};

    fn close(a: Pos2, b: Pos2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn general_only_reaches_the_top() {
        let scores = ForecastScores {
            general: 100,
            career: 0,
            love: 0,
            health: 0,
        };
        let c = pos2(210.0, 210.0);
        let geo = ChartGeometry::new(&scores, c, RADIUS);

        assert!(close(geo.points[0].pos, pos2(210.0, 210.0 - RADIUS)));
        for p in &geo.points[1..] {
            assert!(close(p.pos, c), "{:?}", p);
        }
    }

    #[test]
    fn axes_go_clockwise_from_top() {
        let full = ForecastScores {
            general: 100,
            career: 100,
            love: 100,
            health: 100,
        };
        let c = pos2(0.0, 0.0);
        let geo = ChartGeometry::new(&full, c, 10.0);
        let expect = [pos2(0.0, -10.0), pos2(10.0, 0.0), pos2(0.0, 10.0), pos2(-10.0, 0.0)];
        for (p, e) in geo.points.iter().zip(expect) {
            assert!(close(p.pos, e), "{:?} vs {:?}", p.pos, e);
        }
        assert_eq!(
            geo.points.map(|p| p.axis),
            [ChartAxis::General, ChartAxis::Career, ChartAxis::Love, ChartAxis::Health]
        );
    }

    #[test]
    fn same_scores_same_layout() {
        let s = ForecastScores {
            general: 73,
            career: 12,
            love: 99,
            health: 40,
        };
        let a = ChartGeometry::new(&s, pos2(100.0, 100.0), RADIUS);
        let b = ChartGeometry::new(&s, pos2(100.0, 100.0), RADIUS);
        assert_eq!(a, b);
    }

    #[test]
    fn webs_and_labels() {
        let geo = ChartGeometry::new(&ForecastScores::default(), pos2(0.0, 0.0), 80.0);
        assert!(close(geo.webs[0][0], pos2(0.0, -20.0)));
        assert!(close(geo.webs[3][1], pos2(80.0, 0.0)));
        assert!(close(geo.labels[0].pos, pos2(0.0, -(80.0 + LABEL_PADDING))));
        assert_eq!(geo.labels[0].anchor, Align2::CENTER_BOTTOM);
        assert_eq!(geo.labels[1].anchor, Align2::LEFT_CENTER);
        assert_eq!(geo.labels[2].anchor, Align2::CENTER_TOP);
        assert_eq!(geo.labels[3].anchor, Align2::RIGHT_CENTER);
    }
}
