use {
    crate::{
        app::{App, View, phases::PhaseView},
        config::DF,
        ui::{HistoryAction, render_history},
    },
    eframe::egui::Context,
};

pub(crate) struct HistoryPhase;

impl PhaseView for HistoryPhase {
    fn tick(&mut self, app: &mut App, ctx: &Context) {
        match render_history(ctx, app.controller.history()) {
            Some(HistoryAction::Back) => {
                app.controller.go_to(View::Form);
            }
            Some(HistoryAction::Open(index)) => {
                let Some(entry) = app.controller.history().get(index).cloned() else {
                    return;
                };
                if DF.log_history {
                    log::info!("Opening history entry {}", entry.id);
                }
                app.controller.select_history_entry(&entry);
            }
            None => {}
        }
    }
}
