use crate::content::ContentStore;
use crate::error::LinkError;
use crate::link::{GeneratedLink, build_link};
use crate::phone::validate_phone;
use crate::render::{DisplayMode, Renderer, resolve_label};
use crate::settings::Settings;
use crate::title::resolve_title;


/// Per-invocation overrides supplied at the directive call site.
///
/// Every field is optional; an absent or empty attribute defers to the
/// stored configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveArgs {
    pub phone: Option<String>,
    pub prefix: Option<String>,
    pub text: Option<String>,
    pub mode: Option<String>,
    /// Explicit content id, for use outside the ambient context.
    pub content_id: Option<String>,
}

impl DirectiveArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from shortcode-style named attribute pairs. Empty values count
    /// as absent; unknown attribute names are logged and skipped.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut args = Self::default();
        for (name, value) in pairs {
            if value.is_empty() {
                continue;
            }
            let value = Some(value.to_string());
            match name {
                "phone" => args.phone = value,
                "prefix" => args.prefix = value,
                "text" => args.text = value,
                "mode" => args.mode = value,
                "id" => args.content_id = value,
                other => tracing::debug!("directive: ignoring unknown attribute {other}"),
            }
        }
        args
    }
}

/// Phone precedence: valid override > valid configuration > none.
///
/// An override that fails validation is ignored with a warning rather than
/// failing the render; the stored number is re-validated on the way out so a
/// bad value in the store can never reach the URL.
fn resolve_phone(settings: &Settings, args: &DirectiveArgs) -> Option<String> {
    if let Some(raw) = args.phone.as_deref() {
        match validate_phone(raw) {
            Ok(digits) => return Some(digits),
            Err(err) => {
                tracing::warn!("directive: override phone rejected ({err}), using configuration");
            }
        }
    }

    if settings.phone_number.is_empty() {
        return None;
    }
    match validate_phone(&settings.phone_number) {
        Ok(digits) => Some(digits),
        Err(err) => {
            tracing::warn!("directive: configured phone rejected ({err})");
            None
        }
    }
}

/// Mode precedence: override (only when it parses) > stored mode > `Text`.
fn resolve_mode(settings: &Settings, args: &DirectiveArgs) -> DisplayMode {
    args.mode
        .as_deref()
        .and_then(DisplayMode::parse)
        .unwrap_or(settings.display_mode)
}

/// Run Title Resolver → Link Builder for one invocation.
///
/// Errors are short-circuit signals, not failures: the directive boundary
/// turns every one of them into empty output.
pub fn generate(
    settings: &Settings,
    content: &dyn ContentStore,
    args: &DirectiveArgs,
) -> Result<GeneratedLink, LinkError> {
    let phone = resolve_phone(settings, args).ok_or(LinkError::MissingDestination)?;

    let title = resolve_title(content, args.content_id.as_deref());
    if title.is_empty() {
        return Err(LinkError::MissingContent);
    }

    let prefix = args
        .prefix
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(&settings.text_prefix);

    Ok(GeneratedLink {
        url: build_link(&phone, prefix, &title),
        display_text: resolve_label(args.text.as_deref(), &settings.link_text, &title),
        mode: resolve_mode(settings, args),
    })
}

/// Render one directive invocation to HTML.
///
/// The full pipeline: Title Resolver → Link Builder → Display Formatter.
/// Any missing input renders as empty content.
pub fn render_directive(
    settings: &Settings,
    content: &dyn ContentStore,
    args: &DirectiveArgs,
    renderer: &mut Renderer,
) -> String {
    match generate(settings, content, args) {
        Ok(link) => renderer.render(&link),
        Err(err) => {
            tracing::debug!("directive: rendering nothing ({err})");
            String::new()
        }
    }
}
