use crate::content::{ContentStore, ContextObject};

/// Resolve the title a generated message should mention.
///
/// Resolution order, first non-empty wins:
/// 1. the explicitly supplied content id, when it maps to a known item
/// 2. the in-context content item's title
/// 3. the in-context taxonomy term's name
/// 4. the in-context profile's display name
/// 5. the page-level fallback title
/// 6. the site's display name
///
/// Returns an empty string only when every rung comes back empty.
pub fn resolve_title(store: &dyn ContentStore, id: Option<&str>) -> String {
    if let Some(id) = id
        && let Some(title) = store.title_by_id(id)
        && !title.trim().is_empty()
    {
        return title;
    }

    let context_name = match store.current_context() {
        ContextObject::ContentItem { title, .. } => title,
        ContextObject::Taxonomy { name } => name,
        ContextObject::Profile { display_name } => display_name,
        ContextObject::None => String::new(),
    };
    if !context_name.trim().is_empty() {
        return context_name;
    }

    let fallback = store.fallback_title();
    if !fallback.trim().is_empty() {
        return fallback;
    }

    store.site_name()
}
