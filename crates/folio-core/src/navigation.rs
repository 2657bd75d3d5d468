//! Scroll-position tracking for in-page navigation.
//!
//! The browser side observes section geometry and scroll offset; everything
//! here is a pure function of those numbers so the active link is derived
//! state, recomputed on every scroll event.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Distance subtracted from a section's top so it counts as entered before
/// its edge reaches the viewport top. Matches the fixed header height.
pub const ACTIVATION_MARGIN: f64 = 100.0;

/// Observed vertical extent of a page section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    /// Anchor id of the section. Empty for sections without an id.
    pub id: String,

    /// Offset of the section's top edge from the page top.
    pub top: f64,

    /// Rendered height.
    pub height: f64,
}

impl SectionGeometry {
    /// Create a new geometry snapshot.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open range of scroll offsets for which this section is current.
    pub fn activation_range(&self, margin: f64) -> Range<f64> {
        let start = self.top - margin;
        start..start + self.height
    }

    /// Whether `scroll_y` falls inside [`activation_range`](Self::activation_range).
    pub fn contains(&self, scroll_y: f64, margin: f64) -> bool {
        self.activation_range(margin).contains(&scroll_y)
    }
}

/// Which section wins when several activation ranges overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// The first matching section in document order.
    FirstMatch,
    /// The last matching section in document order.
    #[default]
    LastMatch,
}

/// Resolves the current section from a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    margin: f64,
    policy: MatchPolicy,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            margin: ACTIVATION_MARGIN,
            policy: MatchPolicy::default(),
        }
    }
}

impl ScrollSpy {
    /// Create a spy with the default margin and policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different activation margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Use a different tie-break policy.
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Activation margin in use.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Tie-break policy in use.
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Section that is current at `scroll_y`, or `None` when no section
    /// contains it.
    pub fn active_section<'a>(
        &self,
        sections: &'a [SectionGeometry],
        scroll_y: f64,
    ) -> Option<&'a SectionGeometry> {
        let mut matches = sections
            .iter()
            .filter(|section| section.contains(scroll_y, self.margin));

        match self.policy {
            MatchPolicy::FirstMatch => matches.next(),
            MatchPolicy::LastMatch => matches.last(),
        }
    }
}

/// Id of the section current at `scroll_y` using [`ACTIVATION_MARGIN`] and
/// the default policy.
///
/// A matched section without an id yields `Some("")`: no link is highlighted.
pub fn compute_active_section(sections: &[SectionGeometry], scroll_y: f64) -> Option<&str> {
    ScrollSpy::default()
        .active_section(sections, scroll_y)
        .map(|section| section.id.as_str())
}

/// Element id referenced by an in-page link, e.g. `about` for `#about`.
///
/// Returns `None` for anything that is not a non-empty fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
