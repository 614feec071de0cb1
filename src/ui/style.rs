use console::style;
use std::fmt::Display;

/// Green bold — success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Dim — subtitles, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow — validation notices, warnings
pub fn yellow<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Green — confirmed values, settings values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan underlined — URLs, links
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}
