use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    poll_promise::Promise,
    std::sync::Arc,
};

use crate::{
    app::{
        AppController, ForecastTicket, View,
        phases::{FormPhase, HistoryPhase, IntroPhase, LoadingPhase, PhaseView, ResultPhase},
    },
    config::DF,
    data::{ForecastError, GeminiClient, SharedForecastClient, default_history_store},
    domain::Forecast,
    ui::{Starfield, UI_CONFIG, render_header},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context as _, tokio::runtime::Runtime};

/// A call in flight and the ticket it must be committed with.
pub(crate) struct PendingForecast {
    pub(crate) ticket: ForecastTicket,
    promise: Promise<Result<Forecast, ForecastError>>,
}

pub struct App {
    pub(crate) controller: AppController,
    client: SharedForecastClient,
    pub(crate) pending: Option<PendingForecast>,
    starfield: Starfield,
    // Lives as long as the app so the shared HTTP pool never outlives its reactor.
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Runtime,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        setup_custom_visuals(&cc.egui_ctx);

        let client: SharedForecastClient = Arc::new(GeminiClient::from_env(reqwest::Client::new()));
        let controller = AppController::new(default_history_store(), AppInstant::now());

        #[cfg(not(target_arch = "wasm32"))]
        let runtime = Runtime::new().context("Failed to create async runtime")?;

        Ok(Self {
            controller,
            client,
            pending: None,
            starfield: Starfield::new(),
            #[cfg(not(target_arch = "wasm32"))]
            runtime,
        })
    }

    /// Enter Loading and fire the remote call in the background.
    /// The outcome comes back through `poll_pending`.
    pub(crate) fn start_submission(&mut self, ctx: &Context) {
        let Some(ticket) = self.controller.begin_submit() else {
            return;
        };

        let (sender, promise) = Promise::new();
        let client = Arc::clone(&self.client);
        let profile = ticket.profile().clone();
        let repaint = ctx.clone();
        let task = async move {
            let outcome = client.generate(&profile).await;
            #[cfg(debug_assertions)]
            if DF.log_remote {
                log::info!("Forecast call finished, ok = {}", outcome.is_ok());
            }
            sender.send(outcome);
            repaint.request_repaint();
        };

        #[cfg(not(target_arch = "wasm32"))]
        self.runtime.spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);

        self.pending = Some(PendingForecast { ticket, promise });
    }

    fn poll_pending(&mut self) {
        let Some(PendingForecast { ticket, promise }) = self.pending.take() else {
            return;
        };
        match promise.try_take() {
            Ok(outcome) => {
                self.controller.finish_submit(ticket, outcome);
            }
            Err(promise) => self.pending = Some(PendingForecast { ticket, promise }),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.starfield.show(ctx);
        self.poll_pending();
        self.controller.tick(AppInstant::now());

        let view = self.controller.view();
        if view != View::Intro && render_header(ctx, view == View::Form) {
            self.controller.go_to(View::History);
        }

        match self.controller.view() {
            View::Intro => IntroPhase.tick(self, ctx),
            View::Form => FormPhase.tick(self, ctx),
            View::Loading => LoadingPhase.tick(self, ctx),
            View::Result => ResultPhase.tick(self, ctx),
            View::History => HistoryPhase.tick(self, ctx),
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.extreme_bg_color = UI_CONFIG.colors.field;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.ink;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.ink;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent_yellow;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
