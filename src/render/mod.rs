use crate::link::GeneratedLink;
use strum::EnumString;


/// How the generated link is presented.
///
/// Anything unrecognized normalizes to `Text` — a bad mode string is a
/// presentation nuisance, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Text,
    ButtonSmall,
    ButtonMedium,
    ButtonLarge,
}

impl DisplayMode {
    /// Strict parse: `Some` only for the four documented mode strings.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }

    /// Fail-safe parse: unrecognized input becomes [`DisplayMode::Text`].
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn is_button(self) -> bool {
        !matches!(self, Self::Text)
    }

    fn size_class(self) -> &'static str {
        match self {
            Self::Text => "",
            Self::ButtonSmall => "send-whatsapp-button--small",
            Self::ButtonMedium => "send-whatsapp-button--medium",
            Self::ButtonLarge => "send-whatsapp-button--large",
        }
    }
}

/// Resolve the visible anchor label.
///
/// First non-empty of: invocation override, configured link text, resolved
/// title. The localized default only surfaces when even the title is empty,
/// which a successful link build rules out.
pub fn resolve_label(override_text: Option<&str>, configured: &str, title: &str) -> String {
    for candidate in [override_text.unwrap_or(""), configured, title] {
        let candidate = candidate.trim();
        if !candidate.is_empty() {
            return candidate.to_string();
        }
    }
    t!("link.default_label").into_owned()
}

/// Minimal HTML escaping for text nodes and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Chat-bubble glyph shown inside button-mode anchors.
const ICON_SVG: &str = "<svg class=\"send-whatsapp-icon\" viewBox=\"0 0 24 24\" \
aria-hidden=\"true\" focusable=\"false\"><path d=\"M12 3a9 9 0 0 0-7.8 13.5L3 21l4.7-1.2A9 9 0 1 0 12 3zm4.4 \
12.6c-.2.6-1.2 1.1-1.7 1.2-.4 0-1 .1-1.6-.1a14 14 0 0 1-1.5-.6c-2.6-1.1-4.3-3.8-4.4-4-.1-.2-1-1.4-1-2.7s.6-1.9.9-2.2c.2-.3.5-.3.7-.3h.5c.2 \
0 .4 0 .6.4l.9 2c.1.2.1.4 0 .6l-.4.6-.5.5c-.1.2-.3.3-.1.6.2.3.8 1.3 1.7 2.1 1.2 1 2.1 1.4 2.4 1.5.3.1.5.1.7-.1l1-1.2c.2-.3.4-.2.7-.1l2 \
1c.3.1.5.2.6.3 0 .2 0 .7-.2 1.2z\"/></svg>";

/// Shared stylesheet for the three button sizes. Emitted once per render pass.
const BUTTON_STYLES: &str = "<style class=\"send-whatsapp-styles\">\
.send-whatsapp-button{display:inline-flex;align-items:center;gap:.4em;\
background:#25d366;color:#fff;border-radius:.35em;text-decoration:none;\
font-weight:600;line-height:1}\
.send-whatsapp-button:hover{background:#1ebe5d}\
.send-whatsapp-button .send-whatsapp-icon{width:1.1em;height:1.1em;fill:currentColor}\
.send-whatsapp-button--small{font-size:.8rem;padding:.35em .7em}\
.send-whatsapp-button--medium{font-size:1rem;padding:.45em .9em}\
.send-whatsapp-button--large{font-size:1.25rem;padding:.55em 1.1em}\
</style>";

/// Renders generated links as anchors, owning the one-shot stylesheet flag.
///
/// One renderer lives for one render pass; the directive may appear many
/// times on a page, the button styles must appear once.
#[derive(Debug, Default)]
pub struct Renderer {
    styles_registered: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `link` as HTML. Empty URL renders as empty output.
    pub fn render(&mut self, link: &GeneratedLink) -> String {
        if link.url.is_empty() {
            return String::new();
        }

        let href = escape_html(&link.url);
        let label = escape_html(&link.display_text);

        if !link.mode.is_button() {
            return format!(
                "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>"
            );
        }

        let mut out = String::new();
        if !self.styles_registered {
            out.push_str(BUTTON_STYLES);
            self.styles_registered = true;
        }

        out.push_str(&format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" \
class=\"send-whatsapp-button {size}\">{ICON_SVG}<span>{label}</span></a>",
            size = link.mode.size_class(),
        ));
        out
    }
}
