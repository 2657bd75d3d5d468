//! Navigation bar, smooth anchor scrolling and scroll-spy highlighting.
//!
//! [`use_scroll_navigator`] attaches the listeners once the page is mounted
//! and returns the id of the section currently in view. [`Navigation`]
//! turns that id into link colors.

use folio_core::{NavEntry, ScrollSpy, SectionGeometry, fragment_target};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::listeners::ListenerGuard;

/// Text color of a link whose section is not in view.
pub const INACTIVE_LINK_COLOR: &str = "var(--color-text)";

/// Text color of the link whose section is in view.
pub const ACTIVE_LINK_COLOR: &str = "var(--color-accent)";

/// Selector for links that point inside the page.
const FRAGMENT_LINKS: &str = r##"a[href^="#"]"##;

/// Color for a navigation link in the given state.
pub fn link_color(active: bool) -> &'static str {
    if active {
        ACTIVE_LINK_COLOR
    } else {
        INACTIVE_LINK_COLOR
    }
}

/// Smoothly scroll the element referenced by `href` into view.
///
/// Returns `false` without scrolling when `href` is not a fragment or no
/// element carries that id.
pub fn scroll_to_fragment(document: &Document, href: &str) -> bool {
    let Some(id) = fragment_target(href) else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("no element for anchor #{id}");
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Every `<section>` element of the page, in document order.
pub fn section_elements(document: &Document) -> Vec<HtmlElement> {
    let Ok(nodes) = document.query_selector_all("section") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Current geometry of `sections`.
pub fn measure_sections(sections: &[HtmlElement]) -> Vec<SectionGeometry> {
    sections
        .iter()
        .map(|section| {
            SectionGeometry::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Intercept clicks on every in-page link and scroll smoothly instead of
/// jumping. Clicks on links with no matching target are swallowed.
pub fn intercept_anchors(document: &Document, listeners: &mut ListenerGuard) {
    let Ok(anchors) = document.query_selector_all(FRAGMENT_LINKS) else {
        return;
    };

    for anchor in (0..anchors.length()).filter_map(|i| anchors.item(i)) {
        let document = document.clone();
        listeners.listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = event
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.get_attribute("href"));
            if let Some(href) = href {
                scroll_to_fragment(&document, &href);
            }
        });
    }
}

fn highlight(
    window: &Window,
    sections: &[HtmlElement],
    spy: ScrollSpy,
    set_active: WriteSignal<Option<String>>,
) {
    let Ok(scroll_y) = window.scroll_y() else {
        return;
    };
    let geometry = measure_sections(sections);
    if let Some(section) = spy.active_section(&geometry, scroll_y) {
        set_active.set(Some(section.id.clone()));
    }
}

/// Wire anchor interception and scroll tracking to the mounted page.
///
/// The returned signal holds the id of the section in view. It keeps its last
/// value while the scroll position lies outside every section; an empty id
/// means a section without an anchor (the hero) is in view.
///
/// All listeners are removed when the calling component is cleaned up.
pub fn use_scroll_navigator(spy: ScrollSpy) -> ReadSignal<Option<String>> {
    let (active, set_active) = signal(None::<String>);
    let guard = StoredValue::new_local(ListenerGuard::new());

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let mut listeners = ListenerGuard::new();
        intercept_anchors(&document, &mut listeners);

        let sections = section_elements(&document);
        highlight(&window, &sections, spy, set_active);

        let scroll_window = window.clone();
        listeners.listen(&window, "scroll", move |_| {
            highlight(&scroll_window, &sections, spy, set_active);
        });

        log::debug!("scroll navigator attached {} listeners", listeners.len());
        guard.set_value(listeners);
    });

    on_cleanup(move || {
        guard.try_update_value(ListenerGuard::release);
    });

    active
}

/// Fixed header navigation with one link per page section.
#[component]
pub fn Navigation(
    /// Section links, in display order.
    links: Vec<NavEntry>,
    /// Id of the section in view.
    #[prop(into)]
    active: Signal<Option<String>>,
    /// Trailing controls, e.g. the theme toggle.
    children: Children,
) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|entry| {
            let href = entry.href();
            let target = entry.target.clone();
            let is_active = Memo::new(move |_| active.get().as_deref() == Some(target.as_str()));

            view! {
              <li class="folio-nav-item">
                <a
                  href=href
                  class="folio-nav-link"
                  class:active=is_active
                  style:color=move || link_color(is_active.get())
                  aria-current=move || is_active.get().then_some("location")
                >
                  {entry.label}
                </a>
              </li>
            }
        })
        .collect_view();

    view! {
      <nav class="folio-nav" aria-label="Main navigation">
        <a href="#" class="folio-logo" aria-label="Back to top">
          "\u{2302}"
        </a>
        <ul class="folio-nav-items">
          {items}
          <li class="folio-nav-item">{children()}</li>
        </ul>
      </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_color() {
        assert_eq!(link_color(true), "var(--color-accent)");
        assert_eq!(link_color(false), "var(--color-text)");
    }
}
