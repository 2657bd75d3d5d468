//! Portfolio content model.
//!
//! Deserialized from a single JSON document. `experience` and `projects`
//! may be missing or `null`; their accessors return empty slices.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The whole page's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Hero banner.
    pub hero: Hero,

    /// About section.
    pub about: About,

    /// Work history, newest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,

    /// Showcased projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    /// Contact section.
    pub contact: Contact,

    /// Footer credit line.
    pub footer: Footer,
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub intro: String,
    pub focus: String,
}

/// About section paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub intro: String,
    pub story: String,
    pub today: String,
}

/// One entry of work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

impl Experience {
    /// Stable key for keyed list rendering.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.company, self.role, self.duration)
    }
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,

    /// Technology chips.
    #[serde(default)]
    pub tech: Vec<String>,

    /// External project URL.
    #[serde(default)]
    pub link: Option<String>,
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub message: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Contact {
    /// `mailto:` link for the contact address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Footer credit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: String,
    pub href: String,
    pub credit: String,
}

impl Portfolio {
    /// Parse content from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Work history, empty when absent.
    pub fn experience(&self) -> &[Experience] {
        self.experience.as_deref().unwrap_or_default()
    }

    /// Projects, empty when absent.
    pub fn projects(&self) -> &[Project] {
        self.projects.as_deref().unwrap_or_default()
    }

    /// Whether the section with anchor `id` is rendered at all.
    ///
    /// Experience is omitted when empty; every other section always renders.
    pub fn renders_section(&self, id: &str) -> bool {
        match id {
            "experience" => !self.experience().is_empty(),
            _ => true,
        }
    }

    /// Warn about blank fields that leave visible gaps on the page.
    pub fn validate(&self) {
        let required = [
            ("hero.name", &self.hero.name),
            ("hero.title", &self.hero.title),
            ("contact.email", &self.contact.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                tracing::warn!(field, "portfolio field is empty");
            }
        }

        for project in self.projects() {
            if project.name.trim().is_empty() {
                tracing::warn!("project without a name");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "hero": {"name": "Ada", "title": "Engineer", "intro": "I build things. ", "focus": "Mostly Rust."},
        "about": {"intro": "Hi.", "story": "Long ago.", "today": "Now."},
        "experience": [
            {"role": "Dev", "company": "Acme", "duration": "2020-2024", "description": "Shipped."}
        ],
        "projects": [
            {"name": "folio", "description": "This site", "tech": ["Rust", "Leptos"], "link": "https://example.com"},
            {"name": "bare", "description": "No extras"}
        ],
        "contact": {"message": "Say hi", "email": "ada@example.com", "github": "https://github.com/ada", "linkedin": "https://linkedin.com/in/ada"},
        "footer": {"text": "Built by ", "href": "https://example.com", "credit": "Ada"}
    }"#;

    const MINIMAL: &str = r#"{
        "hero": {"name": "Ada", "title": "Engineer", "intro": "", "focus": ""},
        "about": {"intro": "", "story": "", "today": ""},
        "experience": null,
        "contact": {"message": "", "email": "ada@example.com", "github": "", "linkedin": ""},
        "footer": {"text": "", "href": "", "credit": ""}
    }"#;

    #[test]
    fn test_parse_full_portfolio() {
        let portfolio = Portfolio::from_json(FULL).unwrap();
        assert_eq!(portfolio.hero.name, "Ada");
        assert_eq!(portfolio.experience().len(), 1);
        assert_eq!(portfolio.projects().len(), 2);
        assert_eq!(portfolio.projects()[0].tech, vec!["Rust", "Leptos"]);
        assert!(portfolio.projects()[1].tech.is_empty());
        assert!(portfolio.projects()[1].link.is_none());
    }

    #[test]
    fn test_missing_lists_degrade_to_empty() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert!(portfolio.experience().is_empty());
        assert!(portfolio.projects().is_empty());
        assert!(!portfolio.renders_section("experience"));
        assert!(portfolio.renders_section("projects"));
    }

    #[test]
    fn test_experience_key() {
        let portfolio = Portfolio::from_json(FULL).unwrap();
        assert_eq!(portfolio.experience()[0].key(), "Acme-Dev-2020-2024");
    }

    #[test]
    fn test_mailto() {
        let portfolio = Portfolio::from_json(FULL).unwrap();
        assert_eq!(portfolio.contact.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_missing_hero_is_error() {
        let err = Portfolio::from_json("{}").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }
}
