use {crate::app::App, eframe::egui::Context};

/// One screen's frame: draw it and feed the user's input back into the controller.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context);
}
