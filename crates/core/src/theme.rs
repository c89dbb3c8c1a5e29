//! Light/dark theme preference
//!
//! The preference is a plain value; persistence sits behind [`ThemeStore`]
//! so the browser build can plug in `localStorage` and tests an in-memory
//! map.

/// Class toggled on `<body>` while the dark theme is active
pub const DARK_CLASS: &str = "dark-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    /// Anything other than exactly `"dark"` reads as light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Toggle control label: the icon of the theme a click switches to
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }
}

/// Persistence port for the theme flag
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Owns the active preference and keeps the store in sync with it
pub struct ThemeController<S> {
    store: S,
    current: ThemePreference,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: ThemePreference::default(),
        }
    }

    /// Adopt whatever the store holds; returns the theme to paint
    pub fn apply_stored(&mut self) -> ThemePreference {
        let stored = self.store.load();
        self.current = ThemePreference::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, theme = self.current.as_str(), "theme restored");
        self.current
    }

    /// Flip the theme and persist it; returns the theme to paint
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        tracing::debug!(theme = self.current.as_str(), "theme toggled");
        self.current
    }

    #[cfg(test)]
    const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: Option<String>,
        writes: usize,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.clone()
        }

        fn save(&mut self, value: &str) {
            self.value = Some(value.to_string());
            self.writes += 1;
        }
    }

    fn controller(stored: Option<&str>) -> ThemeController<MemoryStore> {
        ThemeController::new(MemoryStore {
            value: stored.map(ToString::to_string),
            writes: 0,
        })
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("Dark")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(ThemePreference::Dark.glyph(), "☀️");
        assert_eq!(ThemePreference::Light.glyph(), "🌙");
    }

    #[test]
    fn test_apply_stored_does_not_write() {
        let mut ctl = controller(Some("dark"));
        assert_eq!(ctl.apply_stored(), ThemePreference::Dark);
        assert_eq!(ctl.store().writes, 0);

        let mut ctl = controller(Some("garbage"));
        assert_eq!(ctl.apply_stored(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let mut ctl = controller(None);
        ctl.apply_stored();
        let theme = ctl.toggle();
        assert!(theme.is_dark());
        assert_eq!(ctl.store().value.as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        for stored in ["dark", "light"] {
            let mut ctl = controller(Some(stored));
            let original = ctl.apply_stored();
            ctl.toggle();
            assert_eq!(ctl.toggle(), original);
            assert_eq!(ctl.store().value.as_deref(), Some(stored));
            assert_eq!(ctl.store().writes, 2);
        }
    }
}
