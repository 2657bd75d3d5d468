//! Folio UI Components
//!
//! Leptos components and browser bindings for the portfolio page.
//!
//! # Components
//!
//! ## Theme
//! - [`ThemeToggle`] - Dark/light switch persisted in `localStorage`
//!
//! ## Navigation
//! - [`Navigation`] - Header links highlighted by scroll position
//! - [`use_scroll_navigator`] - Smooth anchor scrolling and scroll-spy wiring
//!
//! ## Sections
//! - [`HeroSection`], [`AboutSection`], [`ExperienceSection`],
//!   [`ProjectsSection`], [`ContactSection`], [`SiteFooter`]
//!
//! # Example
//!
//! ```ignore
//! use folio_core::ScrollSpy;
//! use folio_ui::{Navigation, ThemeToggle, use_scroll_navigator};
//! use leptos::prelude::*;
//!
//! #[component]
//! fn Header(links: Vec<folio_core::NavEntry>) -> impl IntoView {
//!     let active = use_scroll_navigator(ScrollSpy::default());
//!
//!     view! {
//!         <Navigation links=links active=active>
//!             <ThemeToggle />
//!         </Navigation>
//!     }
//! }
//! ```

pub mod listeners;
pub mod navigation;
pub mod sections;
pub mod theme;

pub use listeners::ListenerGuard;
pub use navigation::{Navigation, link_color, scroll_to_fragment, use_scroll_navigator};
pub use sections::{
    AboutSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection, SiteFooter,
};
pub use theme::{BrowserStorage, BrowserThemeController, DocumentRoot, ThemeToggle};
