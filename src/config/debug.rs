//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every view change made by the controller.
    pub log_transitions: bool,

    /// History loads and saves.
    pub log_history: bool,

    /// Outgoing prompts and raw model replies. Noisy.
    pub log_remote: bool,

    /// Starfield reseeds on resize.
    pub log_starfield: bool,
}

pub const DF: LogFlags = LogFlags {
    log_transitions: true,
    log_history: true,

    log_remote: false,
    log_starfield: false,
};
