use std::collections::HashMap;

/// The ambient object being rendered when the directive runs.
///
/// The host platform decides what is "in context"; the title resolver only
/// needs to know which kind it is and what it calls itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContextObject {
    /// A regular content item (post, page, product, ...).
    ContentItem { id: String, title: String },
    /// A categorical/taxonomic archive (category, tag, ...).
    Taxonomy { name: String },
    /// A profile/user-like entity.
    Profile { display_name: String },
    /// Nothing in context (e.g. a search results page).
    #[default]
    None,
}

/// Read-only collaborator over the host's content.
///
/// All lookups are synchronous and side-effect free; implementations are
/// expected to answer from data already in hand.
pub trait ContentStore {
    /// Title of a known content item, `None` when the id is unknown.
    fn title_by_id(&self, id: &str) -> Option<String>;

    /// Whatever is currently being rendered.
    fn current_context(&self) -> ContextObject;

    /// Page-level fallback title.
    fn fallback_title(&self) -> String;

    /// The site's configured display name.
    fn site_name(&self) -> String;
}

/// In-memory `ContentStore` backing tests and the CLI demo.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    items: HashMap<String, String>,
    context: ContextObject,
    fallback_title: String,
    site_name: String,
}

impl StaticContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.items.insert(id.into(), title.into());
        self
    }

    pub fn with_context(mut self, context: ContextObject) -> Self {
        self.context = context;
        self
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn with_site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }
}

impl ContentStore for StaticContent {
    fn title_by_id(&self, id: &str) -> Option<String> {
        self.items.get(id).cloned()
    }

    fn current_context(&self) -> ContextObject {
        self.context.clone()
    }

    fn fallback_title(&self) -> String {
        self.fallback_title.clone()
    }

    fn site_name(&self) -> String {
        self.site_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_content_lookup() {
        let store = StaticContent::new()
            .with_item("42", "The Answer")
            .with_site_name("Demo Site");

        assert_eq!(store.title_by_id("42"), Some("The Answer".to_string()));
        assert_eq!(store.title_by_id("7"), None);
        assert_eq!(store.site_name(), "Demo Site");
        assert_eq!(store.current_context(), ContextObject::None);
    }
}
