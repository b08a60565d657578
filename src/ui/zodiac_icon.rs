use {
    crate::{
        config::constants::zodiac_icon::{ARC_SEGMENTS_PER_TURN, GRID},
        domain::ZodiacSign,
    },
    eframe::egui::{Color32, Painter, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, pos2},
    std::f32::consts::TAU,
};

/// One pen stroke, in grid units (0..=GRID, y down).
pub type GlyphStroke = Vec<Pos2>;

fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> GlyphStroke {
    vec![pos2(x0, y0), pos2(x1, y1)]
}

fn polyline(points: &[(f32, f32)]) -> GlyphStroke {
    points.iter().map(|&(x, y)| pos2(x, y)).collect()
}

/// Circular arc, angles in degrees, clockwise on screen (0 = right, 90 = down).
fn arc(cx: f32, cy: f32, r: f32, from_deg: f32, to_deg: f32) -> GlyphStroke {
    let sweep = (to_deg - from_deg).to_radians();
    let steps = ((sweep.abs() / TAU) * ARC_SEGMENTS_PER_TURN as f32).ceil().max(2.0) as usize;
    let start = from_deg.to_radians();
    (0..=steps)
        .map(|i| {
            let a = start + sweep * i as f32 / steps as f32;
            pos2(cx + r * a.cos(), cy + r * a.sin())
        })
        .collect()
}

fn cubic(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> GlyphStroke {
    const STEPS: usize = 12;
    (0..=STEPS)
        .map(|i| {
            let t = i as f32 / STEPS as f32;
            let u = 1.0 - t;
            let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
            pos2(
                a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
                a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
            )
        })
        .collect()
}

/// Horizontal wave from x=3 to x=21 around `y0`.
fn wave(y0: f32) -> GlyphStroke {
    (0..=36)
        .map(|i| {
            let x = 3.0 + i as f32 * 0.5;
            let phase = (x - 3.0) / 12.0 * TAU;
            pos2(x, y0 - 1.5 * phase.sin())
        })
        .collect()
}

/// Vector glyph for a sign on a GRID x GRID canvas.
pub fn glyph(sign: ZodiacSign) -> Vec<GlyphStroke> {
    match sign {
        ZodiacSign::Aries => vec![
            arc(12.0, 12.0, 9.0, 0.0, 180.0),
            line(12.0, 3.0, 12.0, 9.0),
            polyline(&[(7.0, 6.0), (12.0, 9.0), (17.0, 6.0)]),
        ],
        ZodiacSign::Taurus => vec![
            arc(12.0, 10.0, 4.0, 0.0, 360.0),
            line(12.0, 6.0, 12.0, 3.0),
            arc(12.0, 8.0, 6.0, 180.0, 360.0),
        ],
        ZodiacSign::Gemini => vec![
            line(8.0, 3.0, 8.0, 21.0),
            line(16.0, 3.0, 16.0, 21.0),
            line(5.0, 3.0, 19.0, 3.0),
            line(5.0, 21.0, 19.0, 21.0),
        ],
        ZodiacSign::Cancer => vec![
            arc(6.0, 8.0, 4.0, 90.0, 360.0),
            arc(18.0, 16.0, 4.0, 270.0, 540.0),
        ],
        ZodiacSign::Leo => vec![
            arc(12.0, 9.0, 3.0, 0.0, 360.0),
            cubic((12.0, 12.0), (14.0, 12.0), (15.0, 14.0), (16.0, 16.0)),
            cubic((16.0, 16.0), (17.0, 18.0), (19.0, 19.0), (21.0, 19.0)),
        ],
        ZodiacSign::Virgo => vec![polyline(&[
            (5.0, 5.0),
            (5.0, 19.0),
            (5.6, 20.4),
            (7.0, 21.0),
            (8.4, 20.4),
            (9.0, 19.0),
            (9.0, 9.0),
            (10.0, 7.0),
            (13.0, 6.0),
            (16.0, 7.0),
            (17.0, 9.0),
            (17.0, 19.0),
            (17.6, 20.4),
            (19.0, 21.0),
        ])],
        ZodiacSign::Libra => vec![
            line(4.0, 18.0, 20.0, 18.0),
            line(4.0, 21.0, 20.0, 21.0),
            arc(12.0, 14.0, 5.0, 180.0, 360.0),
            line(4.0, 14.0, 7.0, 14.0),
            line(17.0, 14.0, 20.0, 14.0),
        ],
        ZodiacSign::Scorpio => vec![
            line(5.0, 5.0, 5.0, 19.0),
            polyline(&[(5.0, 9.0), (6.0, 7.0), (9.0, 6.0), (12.0, 7.0), (13.0, 9.0), (13.0, 19.0)]),
            polyline(&[
                (13.0, 9.0),
                (14.0, 7.0),
                (17.0, 6.0),
                (20.0, 7.0),
                (21.0, 9.0),
                (21.0, 17.0),
                (23.0, 19.0),
            ]),
        ],
        ZodiacSign::Sagittarius => vec![
            line(4.0, 20.0, 20.0, 4.0),
            line(20.0, 4.0, 20.0, 12.0),
            line(20.0, 4.0, 12.0, 4.0),
            line(7.0, 11.0, 13.0, 17.0),
        ],
        ZodiacSign::Capricorn => vec![
            cubic((7.0, 6.0), (7.0, 9.0), (9.0, 11.0), (9.0, 15.0)),
            cubic((9.0, 15.0), (9.0, 19.0), (13.0, 19.0), (13.0, 19.0)),
            cubic((13.0, 19.0), (13.0, 19.0), (17.0, 17.0), (17.0, 14.0)),
            cubic((17.0, 14.0), (17.0, 10.0), (11.0, 10.0), (11.0, 6.0)),
        ],
        ZodiacSign::Aquarius => vec![wave(10.0), wave(14.0)],
        ZodiacSign::Pisces => vec![
            cubic((5.0, 5.0), (9.0, 9.0), (9.0, 15.0), (5.0, 19.0)),
            cubic((19.0, 5.0), (15.0, 9.0), (15.0, 15.0), (19.0, 19.0)),
            line(5.0, 12.0, 19.0, 12.0),
        ],
    }
}

/// Paint a glyph scaled into `rect` (assumed square).
pub(crate) fn paint_zodiac_icon(painter: &Painter, rect: Rect, sign: ZodiacSign, color: Color32) {
    let scale = rect.width() / GRID;
    let stroke = Stroke::new((2.0 * scale).max(1.0), color);
    for path in glyph(sign) {
        let points: Vec<Pos2> = path
            .into_iter()
            .map(|p| rect.min + p.to_vec2() * scale)
            .collect();
        painter.add(Shape::line(points, stroke));
    }
}

/// Allocate a `size` square in the layout and draw the sign into it.
pub(crate) fn zodiac_icon(ui: &mut Ui, sign: ZodiacSign, size: f32, color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if ui.is_rect_visible(rect) {
        paint_zodiac_icon(ui.painter(), rect, sign, color);
    }
    response
}
