use {
    crate::{
        app::{App, phases::PhaseView},
        ui::{FormAction, render_form},
    },
    eframe::egui::Context,
};

pub(crate) struct FormPhase;

impl PhaseView for FormPhase {
    fn tick(&mut self, app: &mut App, ctx: &Context) {
        let action = render_form(ctx, app.controller.profile(), app.controller.error());
        match action {
            Some(FormAction::SelectSign(sign)) => app.controller.select_sign(sign),
            Some(FormAction::Update(update)) => app.controller.update_field(update),
            Some(FormAction::Submit) => app.start_submission(ctx),
            None => {}
        }
    }
}
