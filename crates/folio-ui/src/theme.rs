//! Theme toggle and its browser bindings.
//!
//! [`BrowserStorage`] persists the preference in `localStorage`;
//! [`DocumentRoot`] mirrors it into the `data-theme` attribute of `<html>`,
//! which the stylesheet keys its color variables on.

use folio_core::{
    Appearance, CoreError, PreferenceStore, Result, ThemeController, ThemePreference,
    theme::DEFAULT_STORAGE_KEY,
};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Attribute on the document element carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// `window.localStorage`, resolved on every access.
///
/// Private browsing modes and disabled storage surface as
/// [`CoreError::Storage`], which the controller swallows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::storage("no window"))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CoreError::storage("localStorage unavailable"))
    }
}

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> CoreError {
    CoreError::storage(format!("{err:?}"))
}

/// The `<html>` element's `data-theme` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()?.document()?.document_element()
    }
}

impl Appearance for DocumentRoot {
    fn current(&self) -> Option<ThemePreference> {
        Self::element()?
            .get_attribute(THEME_ATTRIBUTE)?
            .parse()
            .ok()
    }

    fn apply(&self, theme: ThemePreference) -> Result<()> {
        Self::element()
            .ok_or_else(|| CoreError::appearance("no document element"))?
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(|err| CoreError::appearance(format!("{err:?}")))
    }
}

/// Theme controller wired to the browser.
pub type BrowserThemeController = ThemeController<BrowserStorage, DocumentRoot>;

/// Button switching between the dark and light themes.
///
/// Resolves the persisted preference while the component is created, so the
/// first paint of the glyph already matches the document.
#[component]
pub fn ThemeToggle(
    /// `localStorage` key holding the preference.
    #[prop(into, default = DEFAULT_STORAGE_KEY.to_string())]
    storage_key: String,
    /// Preference used when nothing is persisted.
    #[prop(optional)]
    fallback: ThemePreference,
) -> impl IntoView {
    let controller = BrowserThemeController::new(BrowserStorage, DocumentRoot)
        .with_storage_key(storage_key)
        .with_default(fallback);

    let theme = RwSignal::new(controller.initialize());
    let controller = StoredValue::new(controller);

    let on_click = move |_| {
        let next = controller.with_value(|c| c.toggle(theme.get_untracked()));
        theme.set(next);
    };

    view! {
      <button
        type="button"
        class="folio-theme-toggle"
        on:click=on_click
        aria-label=move || theme.get().toggle_label()
        title=move || theme.get().toggle_label()
      >
        {move || theme.get().glyph()}
      </button>
    }
}
