use log::{debug, warn, Level};
use serde::Deserialize;
use web_sys::window;

use crate::content::{AboutContent, FooterContent, HeroContent};

/// Id of the optional `<script type="application/json">` block in index.html.
pub const OVERRIDES_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Content overrides for the sections that expose one. Missing keys keep their defaults.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SiteOverrides {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub footer: FooterContent,
}

pub fn parse_overrides(raw: &str) -> Result<SiteOverrides, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(SiteOverrides::default());
    }
    serde_json::from_str(raw)
}

pub fn load_overrides() -> SiteOverrides {
    let raw = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(OVERRIDES_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw else {
        return SiteOverrides::default();
    };

    match parse_overrides(&raw) {
        Ok(overrides) => {
            debug!("Loaded site config overrides");
            overrides
        }
        Err(err) => {
            warn!("Ignoring malformed site config: {}", err);
            SiteOverrides::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_all_defaults() {
        assert_eq!(parse_overrides("  \n").unwrap(), SiteOverrides::default());
        assert_eq!(parse_overrides("{}").unwrap(), SiteOverrides::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let overrides = parse_overrides(
            r#"{
                "hero": { "name": "Ada", "roles": ["Engineer"] },
                "footer": {
                    "brandTitle": "ada.dev",
                    "socialLinks": [
                        { "name": "GitHub", "url": "https://github.com/ada", "icon": "fab fa-github" }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(overrides.hero.name, "Ada");
        assert_eq!(overrides.hero.roles, vec!["Engineer".to_string()]);
        assert_eq!(overrides.hero.greeting, HeroContent::default().greeting);
        assert_eq!(overrides.about, AboutContent::default());
        assert_eq!(overrides.footer.brand_title, "ada.dev");
        assert_eq!(overrides.footer.social_links[0].display_name, None);
        assert_eq!(overrides.footer.contact, FooterContent::default().contact);
    }

    #[test]
    fn timeline_override_replaces_entries() {
        let overrides = parse_overrides(
            r#"{ "about": { "timeline": [ { "year": "2026", "title": "Graduated", "description": "Done." } ] } }"#,
        )
        .unwrap();

        assert_eq!(overrides.about.title, "About Me");
        assert_eq!(overrides.about.timeline.len(), 1);
        assert_eq!(overrides.about.timeline[0].year, "2026");
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(parse_overrides("{ hero: ").is_err());
    }
}
