use {
    crate::{
        config::{DF, GEMINI},
        data::{
            forecast_client::{ForecastClient, ForecastError},
            prompt::build_prompt,
        },
        domain::{Forecast, Profile},
        utils::today_local,
    },
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
    serde_json::{Value, json},
};

/// Google Gemini `generateContent` with a schema-constrained JSON reply.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
        }
    }

    /// Reads the credential and model once. A missing key is not an error here;
    /// every later `generate` call is refused instead.
    pub fn from_env(http: reqwest::Client) -> Self {
        let api_key = read_api_key();
        if api_key.is_none() {
            log::warn!(
                "No API key found in {:?}; forecasts will be refused",
                GEMINI.env.api_key_vars
            );
        }
        let model = read_env(GEMINI.env.model_var).unwrap_or_else(|| GEMINI.default_model.to_string());
        let client = Self::new(http, api_key, model);
        log::info!("Forecasts will use model {}", client.model());
        client
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn call(&self, api_key: &str, prompt: String) -> Result<Forecast, ForecastError> {
        let req = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![PartIn { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: forecast_schema(),
            },
        };

        let resp = self
            .http
            .post(GEMINI.generate_url(&self.model))
            .header(GEMINI.api_key_header, api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;

        if !status.is_success() {
            let snippet: String = body.chars().take(GEMINI.error_snippet_chars).collect();
            return Err(ForecastError::Status {
                status: status.as_u16(),
                body: snippet,
            });
        }

        #[cfg(debug_assertions)]
        if DF.log_remote {
            log::info!("Model reply: {}", body);
        }

        parse_reply(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

// No process environment in the browser: values are baked in at build time.
#[cfg(target_arch = "wasm32")]
fn read_env(var: &str) -> Option<String> {
    let baked = match var {
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "API_KEY" => option_env!("API_KEY"),
        "GEMINI_MODEL" => option_env!("GEMINI_MODEL"),
        _ => None,
    };
    baked.map(str::to_string).filter(|s| !s.trim().is_empty())
}

fn read_api_key() -> Option<String> {
    GEMINI.env.api_key_vars.iter().find_map(|var| read_env(var))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ForecastClient for GeminiClient {
    async fn generate(&self, profile: &Profile) -> Result<Forecast, ForecastError> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::error!("Forecast refused: {}", ForecastError::MissingCredential);
            return Err(ForecastError::MissingCredential);
        };

        let prompt = build_prompt(profile, today_local());
        #[cfg(debug_assertions)]
        if DF.log_remote {
            log::info!("Prompt for {}: {}", self.model, prompt);
        }

        self.call(api_key, prompt).await.inspect_err(|e| {
            log::error!("Gemini API error: {}", e);
        })
    }
}

/// Pull the JSON text out of a `generateContent` response and decode it.
pub(crate) fn parse_reply(body: &str) -> Result<Forecast, ForecastError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ForecastError::Schema(e.to_string()))?;
    let text: String = parsed
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ForecastError::EmptyReply);
    }
    serde_json::from_str(&text).map_err(|e| ForecastError::Schema(e.to_string()))
}

fn score(description: &str) -> Value {
    json!({
        "type": "INTEGER",
        "description": description,
        "minimum": 0,
        "maximum": 100,
    })
}

fn text(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

/// Response schema matching `Forecast` field for field.
pub(crate) fn forecast_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "date": text("Заголовок даты или периода прогноза (например '15 Октября' или '16-22 Октября')"),
            "general": text("Общий прогноз"),
            "love": text("Прогноз в сфере отношений"),
            "career": text("Прогноз в сфере работы и финансов"),
            "health": text("Прогноз здоровья и самочувствия"),
            "luckyColor": text("Цвет удачи (одним словом или словосочетанием)"),
            "luckyNumber": text("Число удачи"),
            "mood": text("Эмоциональный фон (одним словом)"),
            "advice": text("Короткий совет"),
            "scores": {
                "type": "OBJECT",
                "properties": {
                    "love": score("Оценка сферы Любви (0-100)"),
                    "career": score("Оценка сферы Карьеры (0-100)"),
                    "health": score("Оценка сферы Здоровья (0-100)"),
                    "general": score("Оценка Общей удачи (0-100)"),
                },
                "required": ["love", "career", "health", "general"],
            },
        },
        "required": [
            "date", "general", "love", "career", "health",
            "luckyColor", "luckyNumber", "mood", "advice", "scores"
        ],
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<PartIn>,
}

#[derive(Debug, Serialize)]
struct PartIn {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentOut>,
}

#[derive(Debug, Deserialize)]
struct ContentOut {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(Debug, Deserialize)]
struct PartOut {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use {super::*, crate::domain::ZodiacSign};

    const FORECAST_JSON: &str = r#"{"date":"16-22 октября","general":"Спокойно","love":"Тепло","career":"Рост","health":"Бодрость","luckyColor":"Зелёный","luckyNumber":"8","mood":"Уверенность","advice":"Действуйте","scores":{"love":61,"career":88,"health":70,"general":75}}"#;

    fn wrap(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn parses_schema_conforming_reply() {
        let forecast = parse_reply(&wrap(FORECAST_JSON)).unwrap();
        assert_eq!(forecast.lucky_number, "8");
        assert_eq!(forecast.scores.career, 88);
        assert_eq!(forecast.scores.general, 75);
    }

    #[test]
    fn text_split_across_parts_is_joined() {
        let (a, b) = FORECAST_JSON.split_at(40);
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": a }, { "text": b }] } }]
        })
        .to_string();
        assert_eq!(parse_reply(&body).unwrap().mood, "Уверенность");
    }

    #[test]
    fn no_candidates_is_empty_reply() {
        assert_eq!(parse_reply(r#"{"candidates":[]}"#), Err(ForecastError::EmptyReply));
        assert_eq!(parse_reply("{}"), Err(ForecastError::EmptyReply));
        assert_eq!(parse_reply(&wrap("  ")), Err(ForecastError::EmptyReply));
    }

    #[test]
    fn missing_field_is_schema_error() {
        let partial = r#"{"date":"x","general":"y"}"#;
        assert!(matches!(
            parse_reply(&wrap(partial)),
            Err(ForecastError::Schema(_))
        ));
        assert!(matches!(parse_reply("not json"), Err(ForecastError::Schema(_))));
    }

    #[test]
    fn schema_requires_every_forecast_field() {
        let schema = forecast_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let sample: Value = serde_json::from_str(FORECAST_JSON).unwrap();
        let mut keys: Vec<&str> = sample.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        let mut required_sorted = required.clone();
        required_sorted.sort();
        assert_eq!(keys, required_sorted);
        assert_eq!(schema["properties"]["scores"]["properties"]["love"]["maximum"], 100);
    }

    #[test]
    fn model_and_key_are_kept() {
        let client = GeminiClient::new(reqwest::Client::new(), Some("k".into()), "gemini-x");
        assert!(client.has_credential());
        assert_eq!(client.model(), "gemini-x");
        assert!(GEMINI.generate_url(client.model()).ends_with("/gemini-x:generateContent"));
    }

    #[tokio::test]
    async fn missing_key_is_refused_without_network() {
        let client = GeminiClient::new(reqwest::Client::new(), Some("   ".into()), "m");
        assert!(!client.has_credential());
        assert_eq!(client.model(), "m");
        let profile = Profile {
            sign: Some(ZodiacSign::Leo),
            ..Default::default()
        };
        assert_eq!(
            client.generate(&profile).await,
            Err(ForecastError::MissingCredential)
        );
    }
}
