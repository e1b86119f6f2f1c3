//! AI tag classification client
//!
//! Best-effort helper for menu item intake: given a free-text dish
//! description, asks an OpenAI-compatible chat-completions endpoint for a
//! structured guess at the hazard flags and calorie count. The output only
//! pre-fills the editable item payload; the filter engine trusts nothing
//! but the flags the restaurant finally stores. Any failure here degrades
//! to [`TagSuggestion::default`] at the call site.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use std::time::Duration;

/// Structured classifier verdict
///
/// Field names are the wire contract: the prompt instructs the model to
/// answer with exactly these keys, and missing keys read as "not flagged".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSuggestion {
    #[serde(default)]
    pub contains_gluten: bool,
    #[serde(default)]
    pub contains_lactose: bool,
    #[serde(default)]
    pub nut_allergy: bool,
    #[serde(default)]
    pub cholesterol_risk: bool,
    #[serde(default)]
    pub diabetes_risk: bool,
    #[serde(default)]
    pub hypertension_risk: bool,
    #[serde(default)]
    pub high_carb: bool,
    #[serde(default)]
    pub high_fat: bool,
    #[serde(default)]
    pub calories: Option<u32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

/// HTTP client for the classification endpoint
pub struct ClassificationService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ClassificationService {
    /// Create a new client against `base_url` (e.g. `https://api.openai.com`)
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout_ms: u64,
    ) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Classify a dish description into a tag suggestion
    pub async fn classify(&self, description: &str) -> AppResult<TagSuggestion> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(description),
            }],
            temperature: 0.4,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_message(
                    ErrorCode::ClassificationFailed,
                    format!("classifier request failed: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::with_message(
                ErrorCode::ClassificationFailed,
                format!("classifier returned HTTP {status}"),
            ));
        }

        let reply: ChatResponse = response.json().await.map_err(|e| {
            AppError::with_message(
                ErrorCode::ClassificationFailed,
                format!("classifier reply unreadable: {e}"),
            )
        })?;

        let content = reply
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::ClassificationFailed, "classifier reply empty")
            })?;

        parse_suggestion(content).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ClassificationFailed,
                "no JSON object in classifier reply",
            )
        })
    }
}

impl std::fmt::Debug for ClassificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationService")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Prompt asking for a strict JSON verdict, one key per hazard flag
fn build_prompt(description: &str) -> String {
    format!(
        "Analyze the following food description for health restrictions:\n\n\
         \"{description}\"\n\n\
         Return a JSON object with:\n\
         {{\n\
           \"contains_gluten\": true/false,\n\
           \"contains_lactose\": true/false,\n\
           \"nut_allergy\": true/false,\n\
           \"cholesterol_risk\": true/false,\n\
           \"diabetes_risk\": true/false,\n\
           \"hypertension_risk\": true/false,\n\
           \"high_carb\": true/false,\n\
           \"high_fat\": true/false,\n\
           \"calories\": number\n\
         }}\n\n\
         Be strict. Assume peanut sauce contains gluten and nuts unless stated \
         otherwise. Estimate calories for the full meal, not per portion."
    )
}

/// Extract the first JSON object from a free-form model reply
fn parse_suggestion(content: &str) -> Option<TagSuggestion> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&content[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_object() {
        let reply = r#"{"contains_gluten": true, "nut_allergy": true, "calories": 650}"#;
        let suggestion = parse_suggestion(reply).unwrap();
        assert!(suggestion.contains_gluten);
        assert!(suggestion.nut_allergy);
        assert!(!suggestion.high_fat);
        assert_eq!(suggestion.calories, Some(650));
    }

    #[test]
    fn parses_json_wrapped_in_prose_and_fences() {
        let reply = "Here is my analysis:\n```json\n{\"high_fat\": true, \"calories\": 900}\n```\nStay healthy!";
        let suggestion = parse_suggestion(reply).unwrap();
        assert!(suggestion.high_fat);
        assert_eq!(suggestion.calories, Some(900));
    }

    #[test]
    fn missing_keys_default_to_unflagged() {
        let suggestion = parse_suggestion("{}").unwrap();
        assert_eq!(suggestion, TagSuggestion::default());
        assert_eq!(suggestion.calories, None);
    }

    #[test]
    fn garbage_reply_yields_none() {
        assert!(parse_suggestion("I could not decide.").is_none());
        assert!(parse_suggestion("} backwards {").is_none());
    }

    #[test]
    fn prompt_embeds_the_description() {
        let prompt = build_prompt("spicy peanut noodles");
        assert!(prompt.contains("spicy peanut noodles"));
        assert!(prompt.contains("\"high_carb\""));
    }
}
