use {
    crate::{
        app::{App, View, phases::PhaseView},
        ui::render_result,
    },
    eframe::egui::Context,
};

pub(crate) struct ResultPhase;

impl PhaseView for ResultPhase {
    fn tick(&mut self, app: &mut App, ctx: &Context) {
        let Some(active) = app.controller.active() else {
            log::warn!("Result view without a forecast, returning to the form");
            app.controller.go_to(View::Form);
            return;
        };
        if render_result(ctx, active) {
            app.controller.go_to(View::Form);
        }
    }
}
