mod forecast_client;
mod gemini;
mod history_io;
mod history_store;
mod prompt;

pub use {
    forecast_client::{
        ForecastClient, ForecastError, MISSING_CREDENTIAL_MESSAGE, REMOTE_FAILURE_MESSAGE,
        SharedForecastClient,
    },
    gemini::GeminiClient,
    history_io::default_history_store,
    history_store::{HistoryLog, HistoryStore, MemoryHistoryStore},
    prompt::build_prompt,
};

#[cfg(not(target_arch = "wasm32"))]
pub use history_io::FileHistoryStore;

#[cfg(target_arch = "wasm32")]
pub use history_io::LocalStorageHistoryStore;
