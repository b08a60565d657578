/// Where the credential and model override come from.
pub struct GeminiEnv {
    /// Checked in order; the first non-empty value wins.
    pub api_key_vars: &'static [&'static str],
    pub model_var: &'static str,
}

pub struct GeminiConfig {
    pub base_url: &'static str,
    pub default_model: &'static str,
    pub api_key_header: &'static str,
    pub env: GeminiEnv,
    /// Longest slice of an error body we keep for the log.
    pub error_snippet_chars: usize,
}

pub const GEMINI: GeminiConfig = GeminiConfig {
    base_url: "https://generativelanguage.googleapis.com/v1beta/models",
    default_model: "gemini-2.5-flash",
    api_key_header: "x-goog-api-key",
    env: GeminiEnv {
        api_key_vars: &["GEMINI_API_KEY", "API_KEY"],
        model_var: "GEMINI_MODEL",
    },
    error_snippet_chars: 800,
};

impl GeminiConfig {
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model)
    }
}
