//! Configuration module for the star oracle application.

// Can all be private now because we have a public re-export.
mod debug;
mod gemini;
mod persistence;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::INTRO_DELAY;
pub use debug::DF;
pub use gemini::{GEMINI, GeminiConfig};
pub use persistence::{PERSISTENCE, history_filename};
