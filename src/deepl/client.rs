use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{self, ApiError, Service, Translate};

/// Base URL of the DeepL free-tier API.
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2";

const SERVICE: Service = Service::DeepL;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a [String],
    target_lang: &'a str,
}

/// One entry of the `translations` array returned by DeepL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub detected_source_language: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

/// Client for the DeepL `/translate` endpoint.
///
/// The API key travels as the `auth_key` query parameter.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Translates every entry of `texts` and returns all translations DeepL sent back.
    pub async fn translate_all(
        &self,
        texts: &[String],
        target_lang: &str,
    ) -> Result<Vec<Translation>, ApiError> {
        if texts.is_empty() {
            return Err(ApiError::EmptyRequest { service: SERVICE });
        }

        let url = format!("{}/translate", self.endpoint.trim_end_matches('/'));
        let body = serde_json::to_vec(&TranslateRequest { text: texts, target_lang })
            .map_err(|source| ApiError::Serialize {
                service: SERVICE,
                source,
            })?;

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(|source| ApiError::BuildRequest {
                service: SERVICE,
                source,
            })?;
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair("auth_key", &self.api_key);

        // `url` has no query string, so the key never reaches the log
        debug!(%url, target_lang, texts = texts.len(), "sending translation request");

        let body = api::execute(&self.client, request, SERVICE).await?;
        parse_translations(&body)
    }
}

impl Translate for TranslationClient {
    async fn translate(&self, texts: &[String], target_lang: &str) -> Result<String, ApiError> {
        let first = self
            .translate_all(texts, target_lang)
            .await?
            .into_iter()
            .next()
            .ok_or(ApiError::Empty { service: SERVICE })?;

        if let Some(source_lang) = first.detected_source_language.as_deref() {
            debug!(source_lang, target_lang, "translation received");
        }

        Ok(first.text)
    }
}

fn parse_translations(body: &[u8]) -> Result<Vec<Translation>, ApiError> {
    let response: TranslateResponse =
        serde_json::from_slice(body).map_err(|source| ApiError::Decode {
            service: SERVICE,
            source,
        })?;

    if response.translations.is_empty() {
        return Err(ApiError::Empty { service: SERVICE });
    }

    Ok(response.translations)
}
