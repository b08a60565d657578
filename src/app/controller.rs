use {
    crate::{
        app::state::{ActiveForecast, ForecastTicket, View},
        config::{DF, INTRO_DELAY},
        data::{ForecastClient, ForecastError, HistoryLog, HistoryStore},
        domain::{Forecast, HistoryEntry, Profile, ProfileUpdate, ZodiacSign},
        utils::{AppInstant, now_timestamp_ms},
    },
    std::mem,
};

/// View-state machine. Owns the draft profile, the shown forecast and the history log;
/// the methods below are the only way to change them.
pub struct AppController {
    view: View,
    profile: Profile,
    active: Option<ActiveForecast>,
    history: HistoryLog,
    error: Option<String>,
    store: Box<dyn HistoryStore>,
    generation: u64,
    intro_started: AppInstant,
}

impl AppController {
    /// Loads history once and starts on the intro screen.
    pub fn new(store: Box<dyn HistoryStore>, started: AppInstant) -> Self {
        let history = store.load();
        Self {
            view: View::Intro,
            profile: Profile::default(),
            active: None,
            history,
            error: None,
            store,
            generation: 0,
            intro_started: started,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn active(&self) -> Option<&ActiveForecast> {
        self.active.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Time left on the intro screen, `None` once it is over.
    pub fn intro_remaining(&self, now: AppInstant) -> Option<std::time::Duration> {
        if self.view != View::Intro {
            return None;
        }
        Some(INTRO_DELAY.saturating_sub(now.saturating_duration_since(self.intro_started)))
    }

    /// Advances the intro timer. Returns true if the view changed.
    pub fn tick(&mut self, now: AppInstant) -> bool {
        match self.intro_remaining(now) {
            Some(left) if left.is_zero() => {
                self.set_view(View::Form);
                true
            }
            _ => false,
        }
    }

    pub fn select_sign(&mut self, sign: ZodiacSign) {
        self.profile.sign = Some(sign);
    }

    pub fn update_field(&mut self, update: ProfileUpdate) {
        self.profile.apply(update);
    }

    /// User navigation. Only Form <-> History and Result -> Form are allowed.
    pub fn go_to(&mut self, target: View) -> bool {
        let allowed = matches!(
            (self.view, target),
            (View::Form, View::History) | (View::History, View::Form) | (View::Result, View::Form)
        );
        if allowed {
            self.set_view(target);
        } else {
            log::warn!("Refused navigation {:?} -> {:?}", self.view, target);
        }
        allowed
    }

    /// Shows a past forecast with the profile it was made for. The draft is not touched.
    pub fn select_history_entry(&mut self, entry: &HistoryEntry) -> bool {
        if self.view != View::History {
            return false;
        }
        self.active = Some(ActiveForecast {
            forecast: entry.forecast.clone(),
            profile: entry.profile.clone(),
        });
        self.set_view(View::Result);
        true
    }

    /// Synchronous half of a submission: guard, clear the error, enter Loading.
    /// Returns `None` (and changes nothing) unless a sign is chosen on the form.
    pub fn begin_submit(&mut self) -> Option<ForecastTicket> {
        if self.view != View::Form || !self.profile.is_complete() {
            return None;
        }
        self.error = None;
        self.generation += 1;
        self.set_view(View::Loading);
        Some(ForecastTicket {
            generation: self.generation,
            profile: self.profile.clone(),
        })
    }

    /// Commits the outcome of a call started by `begin_submit`.
    /// Outcomes for an outdated ticket, or arriving after the user left Loading, are dropped.
    /// Returns true if the outcome was applied.
    pub fn finish_submit(
        &mut self,
        ticket: ForecastTicket,
        outcome: Result<Forecast, ForecastError>,
    ) -> bool {
        if ticket.generation != self.generation || self.view != View::Loading {
            log::info!(
                "Discarding forecast for ticket {} (current {}, view {:?})",
                ticket.generation(),
                self.generation,
                self.view
            );
            return false;
        }

        match outcome {
            Ok(forecast) => {
                self.record(forecast.clone(), ticket.profile.clone());
                self.active = Some(ActiveForecast {
                    forecast,
                    profile: ticket.profile,
                });
                self.set_view(View::Result);
            }
            Err(e) => {
                log::error!("Forecast failed: {}", e);
                self.error = Some(e.user_message().to_string());
                self.set_view(View::Form);
            }
        }
        true
    }

    /// Begin, await the client, finish. Does nothing when the submission is refused.
    pub async fn submit(&mut self, client: &dyn ForecastClient) {
        let Some(ticket) = self.begin_submit() else {
            return;
        };
        let outcome = client.generate(ticket.profile()).await;
        self.finish_submit(ticket, outcome);
    }

    fn record(&mut self, forecast: Forecast, profile: Profile) {
        // Ids are timestamps, so two entries in one millisecond need a nudge.
        let mut timestamp = now_timestamp_ms();
        if let Some(newest) = self.history.newest() {
            timestamp = timestamp.max(newest.timestamp.saturating_add(1));
        }
        self.history
            .push_newest(HistoryEntry::new(forecast, profile, timestamp));

        if let Err(e) = self.store.save(&self.history) {
            log::error!("Failed to save history: {:#}", e);
        }
    }

    fn set_view(&mut self, next: View) {
        let prev = mem::replace(&mut self.view, next);
        if DF.log_transitions && prev != next {
            log::info!("View {:?} -> {:?}", prev, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            data::{MemoryHistoryStore, REMOTE_FAILURE_MESSAGE},
            domain::{ForecastScores, Period},
        },
        std::time::Duration,
    };

    fn forecast(mood: &str) -> Forecast {
        Forecast {
            date: "15 октября".into(),
            mood: mood.into(),
            scores: ForecastScores {
                general: 50,
                love: 50,
                career: 50,
                health: 50,
            },
            ..Default::default()
        }
    }

    fn at_form() -> (AppController, MemoryHistoryStore) {
        let store = MemoryHistoryStore::new();
        let start = AppInstant::now();
        let mut c = AppController::new(Box::new(store.clone()), start);
        assert!(c.tick(start + INTRO_DELAY));
        (c, store)
    }

    #[test]
    fn intro_waits_the_full_delay() {
        let start = AppInstant::now();
        let mut c = AppController::new(Box::new(MemoryHistoryStore::new()), start);
        assert_eq!(c.view(), View::Intro);
        assert!(!c.tick(start + Duration::from_millis(1999)));
        assert_eq!(c.view(), View::Intro);
        assert!(c.tick(start + Duration::from_millis(2000)));
        assert_eq!(c.view(), View::Form);
        assert!(!c.tick(start + Duration::from_secs(10)));
        assert_eq!(c.intro_remaining(start), None);
    }

    #[test]
    fn nothing_escapes_intro_early() {
        let start = AppInstant::now();
        let mut c = AppController::new(Box::new(MemoryHistoryStore::new()), start);
        c.select_sign(ZodiacSign::Leo);
        assert!(!c.go_to(View::Form));
        assert!(!c.go_to(View::History));
        assert!(c.begin_submit().is_none());
        assert_eq!(c.view(), View::Intro);
    }

    #[test]
    fn submit_without_sign_is_silent() {
        let (mut c, store) = at_form();
        assert!(c.begin_submit().is_none());
        assert_eq!(c.view(), View::Form);
        assert!(store.raw().is_none());
    }

    #[test]
    fn success_records_snapshot_not_later_draft() {
        let (mut c, store) = at_form();
        c.select_sign(ZodiacSign::Leo);
        c.update_field(ProfileUpdate::Period(Period::Week));
        let ticket = c.begin_submit().unwrap();
        assert_eq!(c.view(), View::Loading);

        // Draft edits while loading must not leak into the stored snapshot.
        c.select_sign(ZodiacSign::Aries);
        assert!(c.finish_submit(ticket, Ok(forecast("calm"))));

        assert_eq!(c.view(), View::Result);
        let shown = c.active().unwrap();
        assert_eq!(shown.profile.sign, Some(ZodiacSign::Leo));
        assert_eq!(c.history().len(), 1);
        assert_eq!(c.history().newest().unwrap().profile.period, Period::Week);
        assert_eq!(c.history().newest().unwrap().profile.sign, Some(ZodiacSign::Leo));
        assert_eq!(store.load(), *c.history());
    }

    #[test]
    fn failure_returns_to_form_with_message() {
        let (mut c, store) = at_form();
        c.select_sign(ZodiacSign::Virgo);
        let ticket = c.begin_submit().unwrap();
        assert!(c.finish_submit(ticket, Err(ForecastError::Transport("reset".into()))));

        assert_eq!(c.view(), View::Form);
        assert_eq!(c.error(), Some(REMOTE_FAILURE_MESSAGE));
        assert!(c.history().is_empty());
        assert!(c.active().is_none());
        assert!(store.raw().is_none());

        // Resubmitting clears the banner.
        assert!(c.begin_submit().is_some());
        assert_eq!(c.error(), None);
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Leo);
        let first = c.begin_submit().unwrap();
        assert!(c.finish_submit(first.clone(), Err(ForecastError::EmptyReply)));
        let second = c.begin_submit().unwrap();

        assert!(!c.finish_submit(first, Ok(forecast("late"))));
        assert_eq!(c.view(), View::Loading);
        assert!(c.history().is_empty());

        assert!(c.finish_submit(second, Ok(forecast("fresh"))));
        assert_eq!(c.active().unwrap().forecast.mood, "fresh");
    }

    #[test]
    fn navigation_table() {
        let (mut c, _store) = at_form();
        assert!(!c.go_to(View::Loading));
        assert!(!c.go_to(View::Result));
        assert!(!c.go_to(View::Intro));
        assert!(c.go_to(View::History));
        assert!(!c.go_to(View::History));
        assert!(!c.go_to(View::Result));
        assert!(c.go_to(View::Form));

        c.select_sign(ZodiacSign::Libra);
        let ticket = c.begin_submit().unwrap();
        assert!(!c.go_to(View::Form));
        assert!(!c.go_to(View::History));
        c.finish_submit(ticket, Ok(forecast("ok")));
        assert!(!c.go_to(View::History));
        assert!(c.go_to(View::Form));
    }

    #[test]
    fn new_forecast_keeps_the_draft() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Gemini);
        c.update_field(ProfileUpdate::Name("Ivan".into()));
        let ticket = c.begin_submit().unwrap();
        c.finish_submit(ticket, Ok(forecast("ok")));
        c.go_to(View::Form);
        assert_eq!(c.profile().sign, Some(ZodiacSign::Gemini));
        assert_eq!(c.profile().name, "Ivan");
    }

    #[test]
    fn history_entry_restores_its_own_profile() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Cancer);
        let ticket = c.begin_submit().unwrap();
        c.finish_submit(ticket, Ok(forecast("old")));
        c.go_to(View::Form);

        c.select_sign(ZodiacSign::Pisces);
        c.update_field(ProfileUpdate::Name("Changed".into()));
        c.go_to(View::History);
        let entry = c.history().newest().cloned().unwrap();
        assert!(c.select_history_entry(&entry));

        let shown = c.active().unwrap();
        assert_eq!(c.view(), View::Result);
        assert_eq!(shown.profile, entry.profile);
        assert_eq!(shown.forecast, entry.forecast);
        assert_eq!(c.profile().sign, Some(ZodiacSign::Pisces));
    }

    #[test]
    fn history_entry_ignored_outside_history_view() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Cancer);
        let ticket = c.begin_submit().unwrap();
        c.finish_submit(ticket, Ok(forecast("old")));
        let entry = c.history().newest().cloned().unwrap();
        c.go_to(View::Form);
        assert!(!c.select_history_entry(&entry));
        assert_eq!(c.view(), View::Form);
    }

    #[test]
    fn ids_stay_unique_within_a_millisecond() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Taurus);
        for _ in 0..5 {
            let ticket = c.begin_submit().unwrap();
            c.finish_submit(ticket, Ok(forecast("x")));
            c.go_to(View::Form);
        }
        let mut ids: Vec<&str> = c.history().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn newest_stamp_at_the_limit_does_not_overflow() {
        let mut log = HistoryLog::new();
        log.push_newest(HistoryEntry::new(forecast("old"), Profile::default(), i64::MAX));
        let store = MemoryHistoryStore::with_raw(serde_json::to_string(&log).unwrap());
        let start = AppInstant::now();
        let mut c = AppController::new(Box::new(store), start);
        assert!(c.tick(start + INTRO_DELAY));
        c.select_sign(ZodiacSign::Gemini);

        let ticket = c.begin_submit().unwrap();
        assert!(c.finish_submit(ticket, Ok(forecast("new"))));
        assert_eq!(c.view(), View::Result);
        assert_eq!(c.history().len(), 2);
        let newest = c.history().newest().unwrap();
        assert_eq!(newest.forecast.mood, "new");
        assert_eq!(newest.timestamp, i64::MAX);
    }

    #[test]
    fn stale_ticket_keeps_its_generation() {
        let (mut c, _store) = at_form();
        c.select_sign(ZodiacSign::Virgo);
        let first = c.begin_submit().unwrap();
        assert_eq!(first.generation(), 1);
        assert!(c.finish_submit(first.clone(), Err(ForecastError::EmptyReply)));
        let second = c.begin_submit().unwrap();
        assert_eq!(second.generation(), 2);
        assert!(!c.finish_submit(first, Ok(forecast("late"))));
        assert_eq!(c.view(), View::Loading);
    }

    #[test]
    fn corrupt_history_starts_empty_without_error() {
        let store = MemoryHistoryStore::with_raw("not json at all");
        let c = AppController::new(Box::new(store), AppInstant::now());
        assert!(c.history().is_empty());
        assert_eq!(c.error(), None);
    }
}
