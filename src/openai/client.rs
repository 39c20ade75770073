use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{self, ApiError, Chat, Service};

/// Base URL of the OpenAI API.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

pub const MODEL: &str = "gpt-3.5-turbo";
pub const TEMPERATURE: f64 = 0.9;
pub const MAX_TOKENS: u32 = 1000;

const SERVICE: Service = Service::OpenAI;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'static str,
    messages: [Message<'a>; 1],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    // null for tool-call replies
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// Client for the OpenAI chat-completions endpoint.
///
/// Every call is a fresh single-turn conversation with fixed generation settings.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ChatClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

impl Chat for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let chat_request = ChatCompletionRequest {
            model: MODEL,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let body = serde_json::to_vec(&chat_request).map_err(|source| ApiError::Serialize {
            service: SERVICE,
            source,
        })?;

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .build()
            .map_err(|source| ApiError::BuildRequest {
                service: SERVICE,
                source,
            })?;

        debug!(%url, model = MODEL, "sending chat completion request");

        let body = api::execute(&self.client, request, SERVICE).await?;
        parse_replies(&body)
    }
}

fn parse_replies(body: &[u8]) -> Result<Vec<String>, ApiError> {
    let response: ChatCompletionResponse =
        serde_json::from_slice(body).map_err(|source| ApiError::Decode {
            service: SERVICE,
            source,
        })?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "chat completion usage"
        );
    }

    if response.choices.is_empty() {
        return Err(ApiError::Empty { service: SERVICE });
    }

    Ok(response
        .choices
        .into_iter()
        .map(|choice| {
            if let Some(reason) = choice.finish_reason.as_deref()
                && reason != "stop"
            {
                debug!(reason, "choice finished early");
            }
            choice.message.content.unwrap_or_default()
        })
        .collect())
}
