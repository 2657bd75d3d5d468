//! Folio Core Library
//!
//! Content model, site configuration and the interactive state behind the
//! portfolio page: the persisted light/dark theme and the scroll-position
//! tracking that highlights the navigation link of the visible section.
//!
//! Nothing here touches the browser. The UI crate supplies the
//! `localStorage` store, the `<html>` attribute writer and the measured
//! section geometry.

pub mod config;
pub mod content;
pub mod error;
pub mod navigation;
pub mod theme;

pub use config::{Config, NavEntry};
pub use content::{About, Contact, Experience, Footer, Hero, Portfolio, Project};
pub use error::{CoreError, Result};
pub use navigation::{
    ACTIVATION_MARGIN, MatchPolicy, ScrollSpy, SectionGeometry, compute_active_section,
    fragment_target,
};
pub use theme::{Appearance, MemoryStore, PreferenceStore, ThemeController, ThemePreference};
