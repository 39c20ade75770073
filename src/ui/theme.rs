//! Color and formatting helpers built on owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for the semantic elements of pivot's output.
pub struct Style;

impl Style {
    /// Section headers and the program name.
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Setting names in `/config` and `pivot config`.
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Model names and other primary values.
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Endpoints, descriptions and other supplementary text.
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Slash commands.
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Language codes.
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}
