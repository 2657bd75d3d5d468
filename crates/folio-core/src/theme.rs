//! Light/dark appearance preference.
//!
//! The preference lives in three places that must agree once
//! [`ThemeController::initialize`] has run: the UI state driving the toggle
//! glyph, a [`PreferenceStore`] that survives reloads, and the document-level
//! [`Appearance`] attribute consumed by the stylesheet.
//!
//! Store and appearance are injected so the controller has no hidden global
//! state. Failures on either side never surface to the caller: the visible
//! theme still changes and the preference silently degrades to session-only.

use std::{cell::RefCell, collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Key under which the preference is persisted unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Two-valued appearance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark appearance.
    #[default]
    Dark,
    /// Light appearance.
    Light,
}

impl ThemePreference {
    /// Value written to the store and the `data-theme` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite preference.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph shown on the toggle control.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dark => "\u{1F319}",
            Self::Light => "\u{2600}\u{FE0F}",
        }
    }

    /// Accessible label describing what a click on the toggle does.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CoreError::UnknownTheme(other.to_string())),
        }
    }
}

/// Key-value store that outlives the page session.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Document-level appearance attribute.
pub trait Appearance {
    /// The theme currently applied to the document, if any.
    fn current(&self) -> Option<ThemePreference>;

    /// Apply `theme` to the document.
    fn apply(&self, theme: ThemePreference) -> Result<()>;
}

impl<T: Appearance + ?Sized> Appearance for &T {
    fn current(&self) -> Option<ThemePreference> {
        (**self).current()
    }

    fn apply(&self, theme: ThemePreference) -> Result<()> {
        (**self).apply(theme)
    }
}

/// In-memory store. Holds values for the lifetime of the value only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Owns the appearance preference for one page session.
///
/// Two states, one symmetric transition ([`toggle`](Self::toggle)), no
/// terminal state.
#[derive(Debug, Clone)]
pub struct ThemeController<S, A> {
    store: S,
    appearance: A,
    storage_key: String,
    default: ThemePreference,
}

impl<S: PreferenceStore, A: Appearance> ThemeController<S, A> {
    /// Create a controller using [`DEFAULT_STORAGE_KEY`] and a dark default.
    pub fn new(store: S, appearance: A) -> Self {
        Self {
            store,
            appearance,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default: ThemePreference::default(),
        }
    }

    /// Persist under a different key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Preference used when nothing valid is persisted.
    pub fn with_default(mut self, default: ThemePreference) -> Self {
        self.default = default;
        self
    }

    /// The injected store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The injected appearance writer.
    pub fn appearance(&self) -> &A {
        &self.appearance
    }

    /// Resolve the persisted preference and apply it to the document.
    ///
    /// Never writes the store. The document is only written when its current
    /// value differs, so repeated calls have no further side effects.
    pub fn initialize(&self) -> ThemePreference {
        let resolved = self.resolve();
        if self.appearance.current() != Some(resolved) {
            self.apply(resolved);
        }
        resolved
    }

    /// Switch to the opposite of `current`, apply and persist it.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.toggled();
        self.apply(next);
        if let Err(err) = self.store.set(&self.storage_key, next.as_str()) {
            tracing::warn!(%err, theme = %next, "theme preference not persisted");
        }
        next
    }

    fn resolve(&self) -> ThemePreference {
        match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring persisted theme");
                self.default
            }),
            Ok(None) => self.default,
            Err(err) => {
                tracing::debug!(%err, "preference store unavailable");
                self.default
            }
        }
    }

    fn apply(&self, theme: ThemePreference) {
        if let Err(err) = self.appearance.apply(theme) {
            tracing::warn!(%err, %theme, "failed to apply theme to document");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct RecordingAppearance {
        value: Cell<Option<ThemePreference>>,
        writes: Cell<usize>,
    }

    impl Appearance for RecordingAppearance {
        fn current(&self) -> Option<ThemePreference> {
            self.value.get()
        }

        fn apply(&self, theme: ThemePreference) -> Result<()> {
            self.value.set(Some(theme));
            self.writes.set(self.writes.get() + 1);
            Ok(())
        }
    }

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(CoreError::storage("localStorage disabled"))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(CoreError::storage("localStorage disabled"))
        }
    }

    #[test]
    fn test_toggle_is_symmetric() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::Dark.toggled().toggled(),
            ThemePreference::Dark
        );
    }

    #[test]
    fn test_glyph_follows_preference() {
        assert_eq!(ThemePreference::Dark.glyph(), "🌙");
        assert_eq!(ThemePreference::Light.glyph(), "☀️");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            "light".parse::<ThemePreference>().unwrap(),
            ThemePreference::Light
        );
        assert_eq!(
            " dark ".parse::<ThemePreference>().unwrap(),
            ThemePreference::Dark
        );
        assert!("blue".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Light.to_string(), "light");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn test_default_load_resolves_dark() {
        let controller = ThemeController::new(MemoryStore::new(), RecordingAppearance::default());

        assert_eq!(controller.initialize(), ThemePreference::Dark);
        assert_eq!(
            controller.appearance().current(),
            Some(ThemePreference::Dark)
        );
        assert_eq!(controller.store().get("theme").unwrap(), None);
    }

    #[test]
    fn test_initialize_reads_persisted_value() {
        let store = MemoryStore::with_entry("theme", "light");
        let controller = ThemeController::new(store, RecordingAppearance::default());

        assert_eq!(controller.initialize(), ThemePreference::Light);
        assert_eq!(
            controller.appearance().current(),
            Some(ThemePreference::Light)
        );
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let store = MemoryStore::with_entry("theme", "light");
        let controller = ThemeController::new(store, RecordingAppearance::default());

        let first = controller.initialize();
        let second = controller.initialize();

        assert_eq!(first, second);
        assert_eq!(controller.appearance().writes.get(), 1);
    }

    #[test]
    fn test_toggle_from_default() {
        let controller = ThemeController::new(MemoryStore::new(), RecordingAppearance::default());
        let current = controller.initialize();

        let next = controller.toggle(current);

        assert_eq!(next, ThemePreference::Light);
        assert_eq!(
            controller.appearance().current(),
            Some(ThemePreference::Light)
        );
        assert_eq!(
            controller.store().get("theme").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_writes_once_each() {
        let controller = ThemeController::new(MemoryStore::new(), RecordingAppearance::default());

        controller.toggle(ThemePreference::Light);

        assert_eq!(controller.appearance().writes.get(), 1);
        assert_eq!(
            controller.store().get("theme").unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_toggle_survives_reload() {
        let store = MemoryStore::new();

        let before = ThemeController::new(&store, RecordingAppearance::default());
        let current = before.initialize();
        let written = before.toggle(current);

        let after = ThemeController::new(&store, RecordingAppearance::default());
        assert_eq!(after.initialize(), written);
    }

    #[test]
    fn test_unavailable_store_degrades_to_session() {
        let controller = ThemeController::new(UnavailableStore, RecordingAppearance::default());

        assert_eq!(controller.initialize(), ThemePreference::Dark);
        assert_eq!(
            controller.toggle(ThemePreference::Dark),
            ThemePreference::Light
        );
        assert_eq!(
            controller.appearance().current(),
            Some(ThemePreference::Light)
        );
    }

    #[test]
    fn test_unknown_persisted_value_uses_default() {
        let store = MemoryStore::with_entry("theme", "blue");
        let controller = ThemeController::new(store, RecordingAppearance::default())
            .with_default(ThemePreference::Light);

        assert_eq!(controller.initialize(), ThemePreference::Light);
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::with_entry("folio-theme", "light");
        let controller = ThemeController::new(store, RecordingAppearance::default())
            .with_storage_key("folio-theme");

        assert_eq!(controller.initialize(), ThemePreference::Light);
        controller.toggle(ThemePreference::Light);
        assert_eq!(
            controller.store().get("folio-theme").unwrap().as_deref(),
            Some("dark")
        );
    }
}
