pub(super) mod phase_view;
pub(super) mod intro;
pub(super) mod form;
pub(super) mod loading;
pub(super) mod result;
pub(super) mod history;

pub(crate) use {
    form::FormPhase, history::HistoryPhase, intro::IntroPhase, loading::LoadingPhase,
    phase_view::PhaseView, result::ResultPhase,
};
