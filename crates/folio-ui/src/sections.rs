//! Page sections rendered from portfolio content.
//!
//! Sections with an `id` are scroll-spy targets; the hero deliberately has
//! none, so no navigation link is highlighted while it is in view.

use folio_core::{About, Contact, Experience, Footer, Hero, Project};
use leptos::prelude::*;

/// Opening banner.
#[component]
pub fn HeroSection(
    /// Hero content.
    hero: Hero,
) -> impl IntoView {
    view! {
      <section class="folio-hero">
        <span class="folio-hero-tag">"Hi, my name is"</span>
        <h1>{hero.name} "."</h1>
        <h2>{hero.title}</h2>
        <p>{hero.intro} {hero.focus}</p>
        <a href="#projects" class="folio-cta">
          "Check out my work"
        </a>
      </section>
    }
}

/// About section with the profile picture.
#[component]
pub fn AboutSection(
    /// About paragraphs.
    about: About,
    /// URL of the profile picture.
    #[prop(into)]
    image_src: String,
) -> impl IntoView {
    view! {
      <section class="folio-about" id="about">
        <div class="folio-about-content">
          <h2>"About Me"</h2>
          <p>{about.intro}</p>
          <p>{about.story}</p>
          <p>{about.today}</p>
        </div>
        <div class="folio-about-image">
          <img src=image_src alt="Profile picture" width="400" height="400" loading="lazy" />
        </div>
      </section>
    }
}

/// Work history. Renders nothing when `items` is empty.
#[component]
pub fn ExperienceSection(
    /// Work history entries.
    items: Vec<Experience>,
) -> impl IntoView {
    (!items.is_empty()).then(move || {
        view! {
          <section class="folio-experience" id="experience">
            <h2>"Experience"</h2>
            <div class="folio-experience-list">
              <For
                each=move || items.clone()
                key=Experience::key
                children=move |item| {
                  view! {
                    <div class="folio-experience-item">
                      <h3>
                        {item.role} " " <span class="folio-company">"@ " {item.company}</span>
                      </h3>
                      <p class="folio-date">{item.duration}</p>
                      <p>{item.description}</p>
                    </div>
                  }
                }
              />
            </div>
          </section>
        }
    })
}

/// Project grid followed by a link to the GitHub profile.
#[component]
pub fn ProjectsSection(
    /// Projects to show; an empty list renders an empty grid.
    projects: Vec<Project>,
    /// Profile URL for the "view more" link.
    #[prop(into)]
    more_href: String,
) -> impl IntoView {
    view! {
      <section class="folio-projects" id="projects">
        <h2>"Cool stuff I've made"</h2>
        <div class="folio-project-grid">
          <For
            each=move || projects.clone()
            key=|project| project.name.clone()
            children=move |project| view! { <ProjectCard project=project /> }
          />
        </div>
        <div class="folio-more">
          <a href=more_href target="_blank" rel="noreferrer" class="folio-cta">
            "View more on GitHub"
          </a>
        </div>
      </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let has_tech = !project.tech.is_empty();
    let tech = StoredValue::new(project.tech);

    view! {
      <article class="folio-project-card">
        <h3>{project.name}</h3>
        <p>{project.description}</p>
        <Show when=move || has_tech>
          <ul class="folio-tech-chips">
            <For
              each=move || tech.get_value()
              key=|t| t.clone()
              children=move |t| {
                view! {
                  <li class="folio-tech-chip">
                    <span>{t}</span>
                  </li>
                }
              }
            />
          </ul>
        </Show>
        {project
          .link
          .map(|link| {
            view! {
              <a href=link target="_blank" rel="noreferrer" class="folio-project-link">
                "View project"
              </a>
            }
          })}
      </article>
    }
}

/// Contact section with mail and profile links.
#[component]
pub fn ContactSection(
    /// Contact details.
    contact: Contact,
) -> impl IntoView {
    let mailto = contact.mailto();

    view! {
      <section class="folio-contact" id="contact">
        <h2>"Contact"</h2>
        <p>{contact.message}</p>
        <div class="folio-social-links">
          <a href=mailto class="folio-social-link" aria-label="Email">
            "Email"
          </a>
          <a
            href=contact.github
            target="_blank"
            rel="noreferrer"
            class="folio-social-link"
            aria-label="GitHub"
          >
            "GitHub"
          </a>
          <a
            href=contact.linkedin
            target="_blank"
            rel="noreferrer"
            class="folio-social-link"
            aria-label="LinkedIn"
          >
            "LinkedIn"
          </a>
        </div>
      </section>
    }
}

/// Page footer.
#[component]
pub fn SiteFooter(footer: Footer) -> impl IntoView {
    view! {
      <footer class="folio-footer">
        <p>{footer.text} <a href=footer.href>{footer.credit}</a></p>
      </footer>
    }
}
