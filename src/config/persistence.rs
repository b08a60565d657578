//! File persistence and serialization configuration

/// Configuration for forecast history persistence
pub struct HistoryPersistenceConfig {
    /// Single fixed key: localStorage key on the web, file stem natively.
    pub key: &'static str,
    /// Env var that overrides the native data directory.
    pub dir_env_var: &'static str,
    /// Maximum number of entries kept, newest first.
    pub cap: usize,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading eframe window state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub history: HistoryPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    history: HistoryPersistenceConfig {
        key: "horoscope_history",
        dir_env_var: "STAR_ORACLE_DATA_DIR",
        cap: 50,
    },
    app: AppPersistenceConfig {
        state_path: ".star_oracle_state.json",
    },
};

/// Example: "horoscope_history.json"
pub fn history_filename() -> String {
    format!("{}.json", PERSISTENCE.history.key)
}
