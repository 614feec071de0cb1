use crate::render::DisplayMode;

/// Deep-link base for opening a chat with a number.
pub const WA_BASE: &str = "https://wa.me/";

/// One generated link, produced fresh per invocation and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    /// Either empty or a well-formed `wa.me` URL.
    pub url: String,
    /// The visible anchor label, already resolved through the precedence chain.
    pub display_text: String,
    pub mode: DisplayMode,
}

/// Remove markup tags from `input`, keeping the text between them.
///
/// Unterminated tags are kept as literal text rather than swallowing the
/// rest of the message.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Build the `wa.me` deep link for an already-validated phone number.
///
/// `phone` must be the output of [`crate::phone::validate_phone`] (digits
/// only); `prefix` and `title` are free text. Returns an empty string when
/// there is no destination or nothing meaningful to send.
pub fn build_link(phone: &str, prefix: &str, title: &str) -> String {
    if phone.is_empty() || title.is_empty() {
        return String::new();
    }

    let message = format!("{prefix} {title}");
    let message = strip_markup(message.trim());
    let message = message.trim();

    let base = format!("{WA_BASE}{phone}");
    if message.is_empty() {
        return base;
    }

    format!("{base}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_phone_yields_empty() {
        assert_eq!(build_link("", "any prefix", "any title"), "");
    }

    #[test]
    fn empty_title_yields_empty() {
        assert_eq!(build_link("15551234567", "any prefix", ""), "");
    }

    #[test]
    fn title_only() {
        assert_eq!(
            build_link("15551234567", "", "Hello"),
            "https://wa.me/15551234567?text=Hello"
        );
    }

    #[test]
    fn prefix_and_title_percent_encoded() {
        assert_eq!(
            build_link("15551234567", "Ask me about:", "Widget Pro"),
            "https://wa.me/15551234567?text=Ask%20me%20about%3A%20Widget%20Pro"
        );
    }

    #[test]
    fn message_is_trimmed() {
        assert_eq!(
            build_link("15551234567", "  ", "Hello  "),
            "https://wa.me/15551234567?text=Hello"
        );
    }

    #[test]
    fn markup_stripped_from_message() {
        assert_eq!(
            build_link("15551234567", "", "<b>Hello</b> <i>World</i>"),
            "https://wa.me/15551234567?text=Hello%20World"
        );
    }

    #[test]
    fn markup_only_message_yields_bare_base_url() {
        assert_eq!(
            build_link("15551234567", "", "<br/>"),
            "https://wa.me/15551234567"
        );
    }

    #[test]
    fn unicode_message_encoded() {
        assert_eq!(
            build_link("15551234567", "", "Caffè"),
            "https://wa.me/15551234567?text=Caff%C3%A8"
        );
    }

    #[test]
    fn strip_markup_plain_text_untouched() {
        assert_eq!(strip_markup("no tags here"), "no tags here");
    }

    #[test]
    fn strip_markup_nested_tags() {
        assert_eq!(strip_markup("<div><p>hi</p></div>"), "hi");
    }

    #[test]
    fn strip_markup_unterminated_tag_kept() {
        assert_eq!(strip_markup("a < b"), "a < b");
    }
}
