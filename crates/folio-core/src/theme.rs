//! Theme palettes and the switcher that cycles through them.
//!
//! The chosen index survives page visits through a [`PreferenceStore`];
//! anything unreadable in the store falls back to the first palette.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

// === CSS custom properties consumed by the stylesheet ===
pub const PRIMARY_VAR: &str = "--primary-color";
pub const SECONDARY_VAR: &str = "--secondary-color";
pub const ACCENT_VAR: &str = "--accent-color";

// === Palettes (name, primary, secondary, accent) ===
const PALETTE: [(&str, &str, &str, &str); 5] = [
    ("Default Purple", "#4a00e0", "#8e2de2", "#00bcd4"),
    ("Ocean Blue", "#0052D4", "#4364F7", "#6FB1FC"),
    ("Emerald Green", "#1D976C", "#59C173", "#93F9B9"),
    ("Sunset Orange", "#FF8C00", "#FFA500", "#FFD700"),
    ("Crimson Red", "#D31027", "#EA384D", "#FF8A80"),
];

/// A named color triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Theme {
    pub fn new(
        name: impl Into<String>,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        accent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            primary: primary.into(),
            secondary: secondary.into(),
            accent: accent.into(),
        }
    }

    /// Custom property assignments to write on the document root.
    pub fn css_variables(&self) -> [(&'static str, &str); 3] {
        [
            (PRIMARY_VAR, self.primary.as_str()),
            (SECONDARY_VAR, self.secondary.as_str()),
            (ACCENT_VAR, self.accent.as_str()),
        ]
    }

    /// Tooltip for the switcher button.
    pub fn label(&self) -> String {
        format!("Current Theme: {}. Click to change.", self.name)
    }
}

/// The stock palette list, in cycling order.
pub fn default_themes() -> Vec<Theme> {
    PALETTE
        .iter()
        .map(|(name, primary, secondary, accent)| Theme::new(*name, *primary, *secondary, *accent))
        .collect()
}

/// Key/value storage for the single persisted preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory store, for tests and for pages without storage access.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Interpret a stored preference as an index into `count` themes.
///
/// Surrounding whitespace is tolerated; anything else that is not an
/// in-range unsigned integer yields `None`.
pub fn parse_preference(raw: Option<&str>, count: usize) -> Option<usize> {
    let index = raw?.trim().parse::<usize>().ok()?;
    (index < count).then_some(index)
}

/// Cycles through a fixed palette list and remembers the choice.
#[derive(Debug, Clone)]
pub struct ThemeSwitcher {
    themes: Vec<Theme>,
    current: usize,
    storage_key: String,
}

impl ThemeSwitcher {
    pub fn new(themes: Vec<Theme>, storage_key: impl Into<String>) -> FolioResult<Self> {
        if themes.is_empty() {
            return Err(FolioError::EmptyThemes);
        }
        Ok(Self {
            themes,
            current: 0,
            storage_key: storage_key.into(),
        })
    }

    /// Build a switcher seeded from whatever the store holds.
    ///
    /// Must run before the first [`activate`](Self::activate) so repeat
    /// visitors never see the default palette flash.
    pub fn restore(
        themes: Vec<Theme>,
        storage_key: impl Into<String>,
        store: &impl PreferenceStore,
    ) -> FolioResult<Self> {
        let mut switcher = Self::new(themes, storage_key)?;
        let raw = store.load(&switcher.storage_key);
        match parse_preference(raw.as_deref(), switcher.themes.len()) {
            Some(index) => switcher.current = index,
            None if raw.is_some() => {
                tracing::debug!(stored = ?raw, "ignoring unusable theme preference");
            }
            None => {}
        }
        Ok(switcher)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Make `index` the current theme and persist it.
    ///
    /// A failed write is logged; the theme stays applied.
    pub fn activate(
        &mut self,
        index: usize,
        store: &mut impl PreferenceStore,
    ) -> FolioResult<&Theme> {
        if index >= self.themes.len() {
            return Err(FolioError::ThemeOutOfRange {
                index,
                count: self.themes.len(),
            });
        }
        self.current = index;
        if let Err(e) = store.save(&self.storage_key, &index.to_string()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        tracing::debug!(index, name = %self.themes[index].name, "theme activated");
        Ok(&self.themes[index])
    }

    /// Advance to the next theme, wrapping at the end of the list.
    pub fn cycle(&mut self, store: &mut impl PreferenceStore) -> FolioResult<&Theme> {
        let next = (self.current + 1) % self.themes.len();
        self.activate(next, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "portfolioThemeIndex";

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&mut self, _key: &str, _value: &str) -> FolioResult<()> {
            Err(FolioError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn restores_stored_index() {
        let store = MemoryStore::with_value(KEY, "2");
        let switcher = ThemeSwitcher::restore(default_themes(), KEY, &store).unwrap();
        assert_eq!(switcher.current(), 2);
        assert_eq!(switcher.current_theme().name, "Emerald Green");
    }

    #[test]
    fn out_of_range_preference_falls_back() {
        let store = MemoryStore::with_value(KEY, "99");
        let switcher = ThemeSwitcher::restore(default_themes(), KEY, &store).unwrap();
        assert_eq!(switcher.current(), 0);
    }

    #[test]
    fn malformed_preference_falls_back() {
        for raw in ["abc", "-1", "1.5", ""] {
            let store = MemoryStore::with_value(KEY, raw);
            let switcher = ThemeSwitcher::restore(default_themes(), KEY, &store).unwrap();
            assert_eq!(switcher.current(), 0, "raw value {:?}", raw);
        }
    }

    #[test]
    fn parse_preference_trims() {
        assert_eq!(parse_preference(Some(" 3 "), 5), Some(3));
        assert_eq!(parse_preference(Some("5"), 5), None);
        assert_eq!(parse_preference(None, 5), None);
    }

    #[test]
    fn cycle_wraps_and_persists() {
        let mut store = MemoryStore::new();
        let mut switcher = ThemeSwitcher::new(default_themes(), KEY).unwrap();
        switcher.activate(4, &mut store).unwrap();

        let theme = switcher.cycle(&mut store).unwrap();
        assert_eq!(theme.name, "Default Purple");
        assert_eq!(store.get(KEY), Some("0"));
    }

    #[test]
    fn activate_out_of_range_is_rejected() {
        let mut store = MemoryStore::new();
        let mut switcher = ThemeSwitcher::new(default_themes(), KEY).unwrap();
        switcher.activate(1, &mut store).unwrap();

        let err = switcher.activate(7, &mut store).unwrap_err();
        assert!(matches!(err, FolioError::ThemeOutOfRange { index: 7, count: 5 }));
        assert_eq!(switcher.current(), 1);
        assert_eq!(store.get(KEY), Some("1"));
    }

    #[test]
    fn storage_failure_keeps_theme() {
        let mut store = ReadOnlyStore;
        let mut switcher = ThemeSwitcher::new(default_themes(), KEY).unwrap();
        let theme = switcher.activate(3, &mut store).unwrap();
        assert_eq!(theme.name, "Sunset Orange");
        assert_eq!(switcher.current(), 3);
    }

    #[test]
    fn empty_theme_list_is_rejected() {
        assert!(matches!(
            ThemeSwitcher::new(Vec::new(), KEY),
            Err(FolioError::EmptyThemes)
        ));
    }

    #[test]
    fn css_variables_and_label() {
        let theme = &default_themes()[1];
        let vars = theme.css_variables();
        assert_eq!(vars[0], ("--primary-color", "#0052D4"));
        assert_eq!(vars[2], ("--accent-color", "#6FB1FC"));
        assert_eq!(theme.label(), "Current Theme: Ocean Blue. Click to change.");
    }
}
