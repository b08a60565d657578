use {
    crate::{
        app::{App, phases::PhaseView},
        ui::render_loading,
    },
    eframe::egui::Context,
};

pub(crate) struct LoadingPhase;

impl PhaseView for LoadingPhase {
    fn tick(&mut self, app: &mut App, ctx: &Context) {
        // The spinner shows the submitted profile, not whatever the draft is now.
        let profile = match &app.pending {
            Some(pending) => pending.ticket.profile(),
            None => app.controller.profile(),
        };
        render_loading(ctx, profile);
    }
}
