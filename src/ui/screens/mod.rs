mod form;
mod header;
mod history;
mod intro;
mod loading;
mod result;

pub(crate) use {
    form::{FormAction, render_form},
    header::render_header,
    history::{HistoryAction, render_history},
    intro::render_intro,
    loading::render_loading,
    result::render_result,
};

use {
    crate::ui::UI_CONFIG,
    eframe::egui::{CentralPanel, Context, ScrollArea, Ui},
};

/// Central panel with a phone-width column in the middle.
pub(crate) fn with_column<R>(ctx: &Context, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    CentralPanel::default()
        .frame(UI_CONFIG.panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let width = ui.available_width().min(UI_CONFIG.column_width);
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.horizontal_top(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            add_contents(ui)
                        })
                        .inner
                    })
                    .inner
                })
                .inner
        })
        .inner
}
