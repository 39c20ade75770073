//! DeepL target language codes.

use crate::ui::Style;

/// Target language codes accepted by DeepL and their names.
pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("AR", "Arabic"),
    ("BG", "Bulgarian"),
    ("CS", "Czech"),
    ("DA", "Danish"),
    ("DE", "German"),
    ("EL", "Greek"),
    ("EN", "English"),
    ("EN-GB", "English (British)"),
    ("EN-US", "English (American)"),
    ("ES", "Spanish"),
    ("ET", "Estonian"),
    ("FI", "Finnish"),
    ("FR", "French"),
    ("HU", "Hungarian"),
    ("ID", "Indonesian"),
    ("IT", "Italian"),
    ("JA", "Japanese"),
    ("KO", "Korean"),
    ("LT", "Lithuanian"),
    ("LV", "Latvian"),
    ("NB", "Norwegian (Bokmål)"),
    ("NL", "Dutch"),
    ("PL", "Polish"),
    ("PT", "Portuguese"),
    ("PT-BR", "Portuguese (Brazilian)"),
    ("PT-PT", "Portuguese (European)"),
    ("RO", "Romanian"),
    ("RU", "Russian"),
    ("SK", "Slovak"),
    ("SL", "Slovenian"),
    ("SV", "Swedish"),
    ("TR", "Turkish"),
    ("UK", "Ukrainian"),
    ("ZH", "Chinese"),
];

/// Default language the user's input is translated into before it reaches the model.
pub const DEFAULT_PIVOT_LANGUAGE: &str = "EN";

/// Default language the model's reply is translated into.
pub const DEFAULT_REPLY_LANGUAGE: &str = "JA";

pub fn print_languages() {
    println!("{}", Style::header("Supported target languages (DeepL)"));
    for (code, name) in TARGET_LANGUAGES {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}

/// Upper-cases `lang` and returns it if DeepL accepts it as a target language.
pub fn normalize_language(lang: &str) -> Option<String> {
    let code = lang.trim().to_ascii_uppercase();
    TARGET_LANGUAGES
        .iter()
        .any(|(known, _)| *known == code)
        .then_some(code)
}
