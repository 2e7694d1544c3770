use serde::Deserialize;

/// Section ids. Both the in-page links and the reveal lookups resolve against these.
pub mod anchor {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const CERTIFICATIONS: &str = "certifications";
    pub const FOOTER: &str = "footer";

    pub fn href(id: &str) -> String {
        format!("#{}", id)
    }
}

/// `rel` for every link opened in a new tab.
pub const EXTERNAL_LINK_REL: &str = "noopener noreferrer";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub link: String,
    pub icon: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SocialLink {
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct QuickLink {
    pub label: String,
    pub target: String,
}

impl QuickLink {
    pub fn href(&self) -> String {
        anchor::href(&self.target)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub greeting: String,
    pub name: String,
    pub roles: Vec<String>,
    pub profile_image: String,
    pub profile_image_alt: String,
    pub cta_anchor: String,
    pub cv_file: String,
}

impl HeroContent {
    /// Root-relative download path for the CV, percent-encoded.
    pub fn cv_href(&self) -> String {
        format!("/{}", urlencoding::encode(&self.cv_file))
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            greeting: "Code → Design → logic".to_string(),
            name: "Nethna Oshad".to_string(),
            roles: vec![
                "Frontend Engineer".to_string(),
                "Backend Engineer".to_string(),
                "Fullstack Engineer".to_string(),
                "UI/UX Engineer".to_string(),
            ],
            profile_image: "/Ne3.png".to_string(),
            profile_image_alt: "Profile picture of Nethna".to_string(),
            cta_anchor: anchor::FOOTER.to_string(),
            cv_file: "Nethna Oshad.pdf".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AboutContent {
    pub title: String,
    pub timeline: Vec<TimelineEntry>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "About Me".to_string(),
            timeline: vec![
                TimelineEntry {
                    year: "2023".to_string(),
                    title: "Started B.Sc at SLIIT".to_string(),
                    description: "Began pursuing a B.Sc (Hons) in Information Technology at the Sri Lanka Institute of Information Technology (SLIIT), Faculty of Computing. Completed the first year with a strong foundation in programming, OOP, databases, data structures, and web development, while gaining practical experience through projects and exploring UI/UX and software engineering principles.".to_string(),
                },
                TimelineEntry {
                    year: "2024".to_string(),
                    title: "Started Second Year at SLIIT".to_string(),
                    description: "Strengthened skills in full-stack web development, advanced database management, software engineering practices, and performance optimization through hands-on projects and collaborative learning.".to_string(),
                },
                TimelineEntry {
                    year: "2025".to_string(),
                    title: "Third Year at SLIIT".to_string(),
                    description: "Currently in the third year of the B.Sc (Hons) in Information Technology at SLIIT, Faculty of Computing, focusing on advanced software engineering concepts and preparing for a career in technology.".to_string(),
                },
            ],
        }
    }
}

/// The certification list has no override surface.
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            title: "Next.js: Creating and Hosting a Full-Stack Site".to_string(),
            issuer: "LinkedIn Learning".to_string(),
            description: "Mastered building a full-stack web application using Next.js, covering React interfaces, back-end functionality, network requests, and hosting.".to_string(),
            link: "https://lnkd.in/engex8ew".to_string(),
            icon: "fa-code".to_string(),
        },
        Certification {
            title: "Figma for UX Design".to_string(),
            issuer: "LinkedIn Learning".to_string(),
            description: "Learned to use Figma for UX design, including project creation, prototyping, collaboration, and file exporting for intuitive user experiences.".to_string(),
            link: "https://lnkd.in/eyE_UZhm".to_string(),
            icon: "fa-paint-brush".to_string(),
        },
    ]
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub brand_title: String,
    pub brand_description: String,
    pub social_links: Vec<SocialLink>,
    pub quick_links: Vec<QuickLink>,
    pub contact: ContactInfo,
    pub privacy_policy_link: String,
    pub terms_of_service_link: String,
}

impl FooterContent {
    /// Social links in display order, keeping only the first link for each name.
    pub fn unique_social_links(&self) -> Vec<&SocialLink> {
        let mut unique: Vec<&SocialLink> = Vec::with_capacity(self.social_links.len());
        for link in &self.social_links {
            if !unique.iter().any(|kept| kept.name == link.name) {
                unique.push(link);
            }
        }
        unique
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            brand_title: "Nethna.dev".to_string(),
            brand_description: "Full-Stack Developer crafting seamless web applications.".to_string(),
            social_links: vec![
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com/Nethna-Oshad".to_string(),
                    icon: "fab fa-github".to_string(),
                    display_name: Some("GitHub".to_string()),
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/nethna-oshad-874516216/".to_string(),
                    icon: "fab fa-linkedin-in".to_string(),
                    display_name: Some("LinkedIn".to_string()),
                },
            ],
            quick_links: vec![
                QuickLink { label: "Home".to_string(), target: anchor::HOME.to_string() },
                QuickLink { label: "About".to_string(), target: anchor::ABOUT.to_string() },
                QuickLink { label: "Certifications".to_string(), target: anchor::CERTIFICATIONS.to_string() },
                QuickLink { label: "Contact".to_string(), target: anchor::FOOTER.to_string() },
            ],
            contact: ContactInfo {
                email: "nethna2001oshad@gmail.com".to_string(),
                location: "Sri Lanka".to_string(),
            },
            privacy_policy_link: "#".to_string(),
            terms_of_service_link: "#".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(name: &str, url: &str) -> SocialLink {
        SocialLink {
            name: name.to_string(),
            url: url.to_string(),
            icon: "fab fa-github".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn cv_href_is_percent_encoded() {
        assert_eq!(HeroContent::default().cv_href(), "/Nethna%20Oshad.pdf");
    }

    #[test]
    fn quick_links_point_at_section_anchors() {
        let footer = FooterContent::default();
        let hrefs: Vec<String> = footer.quick_links.iter().map(QuickLink::href).collect();
        assert_eq!(hrefs, vec!["#home", "#about", "#certifications", "#footer"]);
    }

    #[test]
    fn duplicate_social_names_keep_first_link() {
        let footer = FooterContent {
            social_links: vec![
                social("GitHub", "https://github.com/a"),
                social("LinkedIn", "https://linkedin.com/in/a"),
                social("GitHub", "https://github.com/b"),
            ],
            ..FooterContent::default()
        };

        let links = footer.unique_social_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://github.com/a");
        assert_eq!(links[1].name, "LinkedIn");
    }

    #[test]
    fn social_label_falls_back_to_name() {
        let link = social("GitHub", "https://github.com/a");
        assert_eq!(link.label(), "GitHub");

        let named = SocialLink { display_name: Some("Code".to_string()), ..link };
        assert_eq!(named.label(), "Code");
    }

    #[test]
    fn default_content_matches_site() {
        assert_eq!(AboutContent::default().timeline.len(), 3);
        assert_eq!(certifications().len(), 2);
        assert_eq!(HeroContent::default().roles.len(), 4);
        assert_eq!(FooterContent::default().contact.mailto(), "mailto:nethna2001oshad@gmail.com");
    }
}
