use {
    crate::{
        config::{
            DF,
            constants::starfield::{
                AREA_PER_STAR, MIN_RADIUS, MIN_TWINKLE, RADIUS_SPREAD, TWINKLE_SPREAD,
            },
        },
        ui::UI_CONFIG,
    },
    eframe::egui::{Context, CornerRadius, LayerId, Pos2, Rect, Vec2, pos2},
    rand::Rng,
};

#[derive(Debug, Clone, Copy)]
struct Star {
    pos: Pos2,
    radius: f32,
    alpha: f32,
    /// Alpha change per frame; flips sign at 0 and 1.
    speed: f32,
}

/// Twinkling background. Knows nothing about the rest of the app.
#[derive(Debug, Default)]
pub struct Starfield {
    stars: Vec<Star>,
    size: Vec2,
}

impl Starfield {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Reseed when the viewport changes size.
    pub fn fit(&mut self, rect: Rect, rng: &mut impl Rng) {
        if rect.size() == self.size && !self.stars.is_empty() {
            return;
        }
        self.size = rect.size();
        let count = (rect.area() / AREA_PER_STAR).floor().max(0.0) as usize;
        self.stars = (0..count)
            .map(|_| Star {
                pos: pos2(
                    rect.min.x + rng.gen_range(0.0..=1.0) * rect.width(),
                    rect.min.y + rng.gen_range(0.0..=1.0) * rect.height(),
                ),
                radius: MIN_RADIUS + rng.gen_range(0.0..1.0) * RADIUS_SPREAD,
                alpha: rng.gen_range(0.0..1.0),
                speed: MIN_TWINKLE + rng.gen_range(0.0..1.0) * TWINKLE_SPREAD,
            })
            .collect();

        if DF.log_starfield {
            log::info!("Starfield reseeded: {} stars for {:?}", count, self.size);
        }
    }

    /// One animation frame.
    pub fn step(&mut self) {
        for star in &mut self.stars {
            star.alpha += star.speed;
            if !(0.0..=1.0).contains(&star.alpha) {
                star.speed = -star.speed;
            }
        }
    }

    /// Draw behind every panel and keep the animation going.
    pub fn show(&mut self, ctx: &Context) {
        let rect = ctx.screen_rect();
        self.fit(rect, &mut rand::thread_rng());
        self.step();

        let painter = ctx.layer_painter(LayerId::background());
        painter.rect_filled(rect, CornerRadius::ZERO, UI_CONFIG.colors.background);
        for star in &self.stars {
            let a = star.alpha.abs().min(1.0);
            painter.circle_filled(star.pos, star.radius, UI_CONFIG.colors.star.gamma_multiply(a));
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rand::SeedableRng, rand::rngs::StdRng};

    fn rect(w: f32, h: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(w, h))
    }

    #[test]
    fn density_follows_area() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = Starfield::new();
        field.fit(rect(800.0, 600.0), &mut rng);
        assert_eq!(field.len(), 60);
        for s in &field.stars {
            assert!(s.radius >= MIN_RADIUS && s.radius <= MIN_RADIUS + RADIUS_SPREAD);
            assert!(s.pos.x >= 0.0 && s.pos.x <= 800.0);
        }
    }

    #[test]
    fn same_size_keeps_stars_new_size_reseeds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = Starfield::new();
        field.fit(rect(400.0, 400.0), &mut rng);
        let before: Vec<Pos2> = field.stars.iter().map(|s| s.pos).collect();
        field.fit(rect(400.0, 400.0), &mut rng);
        let after: Vec<Pos2> = field.stars.iter().map(|s| s.pos).collect();
        assert_eq!(before, after);

        field.fit(rect(1600.0, 400.0), &mut rng);
        assert_eq!(field.len(), 80);
    }

    #[test]
    fn twinkle_bounces() {
        let mut field = Starfield {
            stars: vec![Star {
                pos: Pos2::ZERO,
                radius: 1.0,
                alpha: 0.99,
                speed: 0.02,
            }],
            size: Vec2::ZERO,
        };
        field.step();
        assert!(field.stars[0].speed < 0.0);
        for _ in 0..200 {
            field.step();
            assert!(field.stars[0].alpha > -0.05 && field.stars[0].alpha < 1.05);
        }
    }
}
