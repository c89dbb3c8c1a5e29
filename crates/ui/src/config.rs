use folio_core::Layout;
use web_sys::Document;

/// Page contract: element ids, storage key and catalog location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub catalog_url: String,
    pub container_id: String,
    pub year_id: String,
    pub theme_toggle_id: String,
    pub theme_key: String,
    pub layout: Layout,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_url: "data/projects.json".to_string(),
            container_id: "projects-container".to_string(),
            year_id: "year".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            theme_key: "jj_theme".to_string(),
            layout: Layout::default(),
        }
    }
}

impl SiteConfig {
    /// Read overrides from `data-*` attributes on `<body>`
    pub fn from_document(doc: &Document) -> Self {
        let body = doc.body();
        Self::default().with_overrides(|attr| body.as_ref()?.get_attribute(attr))
    }

    /// Apply non-empty values returned by `lookup` for the known attributes
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fields = [
            ("data-catalog-url", &mut self.catalog_url),
            ("data-theme-key", &mut self.theme_key),
            ("data-preview-folder", &mut self.layout.preview_folder),
        ];
        for (attr, field) in fields {
            if let Some(value) = lookup(attr).filter(|v| !v.trim().is_empty()) {
                tracing::debug!(attr, value = %value, "config override");
                *field = value;
            }
        }
        self
    }
}
