use {
    crate::{
        app::{App, phases::PhaseView},
        ui::render_intro,
        utils::AppInstant,
    },
    eframe::egui::Context,
};

pub(crate) struct IntroPhase;

impl PhaseView for IntroPhase {
    fn tick(&mut self, app: &mut App, ctx: &Context) {
        render_intro(ctx);
        // Wake up in time for the switch even if nothing else repaints.
        if let Some(left) = app.controller.intro_remaining(AppInstant::now()) {
            ctx.request_repaint_after(left);
        }
    }
}
