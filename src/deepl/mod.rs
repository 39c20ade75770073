mod client;
mod language;

pub use client::{DEFAULT_ENDPOINT, Translation, TranslationClient};
pub use language::{
    DEFAULT_PIVOT_LANGUAGE, DEFAULT_REPLY_LANGUAGE, TARGET_LANGUAGES, normalize_language,
    print_languages,
};
