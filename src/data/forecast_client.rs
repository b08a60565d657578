use {
    crate::domain::{Forecast, Profile},
    async_trait::async_trait,
    std::sync::Arc,
    thiserror::Error,
};

pub const MISSING_CREDENTIAL_MESSAGE: &str = "Отсутствует ключ API.";
pub const REMOTE_FAILURE_MESSAGE: &str = "Не удалось получить предсказание звезд. Попробуйте позже.";

/// Everything that can go wrong while asking the model for a forecast.
/// The variants exist for the log; the user only ever sees `user_message()`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("API key is missing")]
    MissingCredential,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("empty reply from model")]
    EmptyReply,
    #[error("reply does not match forecast schema: {0}")]
    Schema(String),
}

impl ForecastError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            Self::Transport(_) | Self::Status { .. } | Self::EmptyReply | Self::Schema(_) => {
                REMOTE_FAILURE_MESSAGE
            }
        }
    }
}

/// Turns a complete profile into a forecast. One attempt, no retries.
/// Callers guarantee `profile.sign` is set.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ForecastClient {
    async fn generate(&self, profile: &Profile) -> Result<Forecast, ForecastError>;
}

/// Handle the app shell moves into the worker that runs the call.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedForecastClient = Arc<dyn ForecastClient + Send + Sync>;

#[cfg(target_arch = "wasm32")]
pub type SharedForecastClient = Arc<dyn ForecastClient>;
