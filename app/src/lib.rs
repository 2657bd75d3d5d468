use folio_core::{Config, NavEntry, Portfolio};
use folio_ui::{
    AboutSection, ContactSection, ExperienceSection, HeroSection, Navigation, ProjectsSection,
    SiteFooter, ThemeToggle, use_scroll_navigator,
};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

/// Site configuration, embedded at compile time.
const SITE_CONFIG: &str = include_str!("../../folio.toml");

/// Portfolio content, embedded at compile time.
const PORTFOLIO: &str = include_str!("../../content/portfolio.json");

/// Profile picture, relative to the site root (shipped from `public/`).
pub const PROFILE_IMAGE: &str = "/profile.svg";

/// Parse the embedded configuration and content.
pub fn load_site() -> folio_core::Result<(Config, Portfolio)> {
    let config = Config::from_toml_str(SITE_CONFIG)?;
    let portfolio = Portfolio::from_json(PORTFOLIO)?;
    portfolio.validate();
    Ok((config, portfolio))
}

/// Navigation entries whose section is actually rendered.
pub fn visible_links(config: &Config, portfolio: &Portfolio) -> Vec<NavEntry> {
    config
        .navigation
        .links
        .iter()
        .filter(|entry| portfolio.renders_section(&entry.target))
        .cloned()
        .collect()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    match load_site() {
        Ok((config, portfolio)) => {
            view! { <PortfolioPage config=config portfolio=portfolio /> }
                .into_any()
        }
        Err(err) => {
            log::error!("failed to load site content: {err}");
            view! {
              <main class="folio-main">
                <p class="folio-error">"This page could not be loaded."</p>
              </main>
            }
            .into_any()
        }
    }
}

/// Renders the single portfolio page.
#[component]
fn PortfolioPage(config: Config, portfolio: Portfolio) -> impl IntoView {
    let active = use_scroll_navigator(config.navigation.scroll_spy());
    let links = visible_links(&config, &portfolio);
    let profile_src = config.url_for(PROFILE_IMAGE);
    let description = config.site.description.clone().unwrap_or_default();

    let Portfolio {
        hero,
        about,
        experience,
        projects,
        contact,
        footer,
    } = portfolio;
    let more_href = contact.github.clone();

    view! {
      <Title text=config.site.title.clone() />
      <Meta name="description" content=description />

      <header class="folio-header">
        <Navigation links=links active=active>
          <ThemeToggle storage_key=config.storage_key().to_string() fallback=config.theme.default />
        </Navigation>
      </header>

      <main class="folio-main">
        <HeroSection hero=hero />
        <AboutSection about=about image_src=profile_src />
        <ExperienceSection items=experience.unwrap_or_default() />
        <ProjectsSection projects=projects.unwrap_or_default() more_href=more_href />
        <ContactSection contact=contact />
      </main>

      <SiteFooter footer=footer />
    }
}
