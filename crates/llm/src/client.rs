use crate::ai_types::{ChatRequest, ChatResponse, Message};
use crate::error::LlmError;

/// Default LLM model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default API root; `/v1/chat/completions` is appended.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
/// Sampling temperature used for every generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for LLM API calls.
#[derive(Clone)]
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("client", &self.client)
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl LlmClient {
    /// Creates a new LLM client with the given API key and base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, api_key, base_url, model: DEFAULT_MODEL.to_owned() })
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Single-prompt completion with an output budget of `max_output_tokens`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status (429 included)
    /// or an unparsable response.
    pub async fn invoke(&self, prompt: &str, max_output_tokens: u32) -> Result<String, LlmError> {
        self.complete(vec![Message::user(prompt)], max_output_tokens).await
    }

    /// Completion over an explicit message list. Returns the trimmed content.
    pub(crate) async fn complete(
        &self,
        messages: Vec<Message>,
        max_output_tokens: u32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(max_output_tokens),
            temperature: Some(DEFAULT_TEMPERATURE),
        };
        self.chat_completion(&request).await
    }

    /// Send a chat completion request and return the extracted content string.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails, the API returns a
    /// non-success status, the response body cannot be parsed, or the choices
    /// array is empty.
    pub(crate) async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            let code = status.as_u16();
            tracing::warn!(code, body = truncate(&body, ERROR_BODY_PREVIEW), "LLM API error");
            return Err(LlmError::HttpStatus { code, body });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!(
                    "chat completion response (body: {})",
                    truncate(&body, ERROR_BODY_PREVIEW)
                ),
                source: e,
            })?;

        let first_choice = chat_response.choices.first().ok_or(LlmError::EmptyResponse)?;
        Ok(first_choice.message.content.as_deref().unwrap_or_default().trim().to_owned())
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
