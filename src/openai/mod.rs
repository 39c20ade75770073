mod client;

pub use client::{ChatClient, DEFAULT_ENDPOINT, MAX_TOKENS, MODEL, TEMPERATURE};
