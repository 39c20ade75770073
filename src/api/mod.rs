//! Shared plumbing for the remote APIs: error taxonomy, the traits the relay
//! loop is written against, and the request executor both clients use.

mod error;

pub use error::{ApiError, ErrorKind, Service};

use reqwest::{Client, Request};

/// Translates text into a target language.
#[allow(async_fn_in_trait)]
pub trait Translate {
    /// Translates `texts` into `target_lang` and returns the first translation.
    async fn translate(&self, texts: &[String], target_lang: &str) -> Result<String, ApiError>;
}

/// Produces chat replies for a single user prompt.
#[allow(async_fn_in_trait)]
pub trait Chat {
    /// Returns one reply per completion choice, in the order the service returned them.
    async fn complete(&self, prompt: &str) -> Result<Vec<String>, ApiError>;
}

/// Sends a prepared request and returns the raw response body.
///
/// Non-success statuses are reported as [`ApiError::Status`] with the body text
/// so the service's own error message reaches the user.
pub(crate) async fn execute(
    client: &Client,
    request: Request,
    service: Service,
) -> Result<Vec<u8>, ApiError> {
    let response = client
        .execute(request)
        .await
        .map_err(|source| ApiError::Send { service, source })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            service,
            status,
            body,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ApiError::ReadBody { service, source })?;

    Ok(body.to_vec())
}
