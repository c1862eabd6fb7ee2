//! Static site content: every piece of copy, media path and link on the page.
//!
//! Content is authored in TOML. A built-in document ships with the crate so
//! the site renders without any configuration.

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use url::Url;

/// The content document bundled into the binary.
const BUILTIN_CONTENT: &str = include_str!("../../content/site.toml");

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Full display name
    pub name: String,
    /// Short monogram shown in the navigation bar
    pub initials: String,
    /// Role words shown under the hero animation
    #[serde(default)]
    pub taglines: Vec<String>,
}

/// An image reference with alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Site-root relative path
    pub src: String,
    /// Alternative text
    pub alt: String,
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Animated title clip
    pub animation: ImageRef,
    /// One-line pitch below the taglines
    pub intro: String,
    /// YouTube video identifier of the embedded showreel
    pub video_id: String,
    /// Label of the scroll-down button
    pub call_to_action: String,
}

/// "About Me" content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// Body paragraphs, in order
    pub paragraphs: Vec<String>,
    /// Short trait badges
    #[serde(default)]
    pub traits: Vec<String>,
    /// Portrait illustration
    pub portrait: ImageRef,
}

/// One "What I Do" card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Emoji icon
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
}

/// Skill label lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Skills {
    /// Software packages
    #[serde(default)]
    pub software: Vec<String>,
    /// Discipline skills
    #[serde(default)]
    pub core: Vec<String>,
}

/// The leading visual of a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectMedia {
    /// A still or animated image
    Image {
        /// Site-root relative path
        src: String,
        /// Alternative text
        alt: String,
    },
    /// A large emoji placeholder
    Emoji {
        /// The glyph to show
        glyph: String,
    },
}

/// Additional material attached below a project's media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectExtra {
    /// A secondary image
    Image {
        /// Site-root relative path
        src: String,
        /// Alternative text
        alt: String,
    },
    /// A linked document (opened in a new context)
    Document {
        /// Site-root relative path or absolute URL
        href: String,
        /// Link text
        label: String,
    },
}

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card title
    pub title: String,
    /// One-line summary
    pub description: String,
    /// Owner's role on the project
    pub role: String,
    /// Leading visual
    pub media: ProjectMedia,
    /// Extra images and documents
    #[serde(default)]
    pub extras: Vec<ProjectExtra>,
}

/// A gallery tile: a site-root relative image path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GalleryImage(String);

impl GalleryImage {
    /// Wraps an image path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The image path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }

    /// True for SVG artwork, which is embedded as an object rather than an image.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        Path::new(&self.0)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}

/// An award entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Year awarded
    pub year: String,
    /// Award title
    pub title: String,
    /// Awarding body or event
    pub organization: String,
    /// Where it took place
    pub location: String,
    /// Short note
    pub description: String,
}

/// Contact block details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Recipient of the contact form
    pub email: String,
    /// Phone number as displayed
    pub phone: String,
    /// City / country
    pub location: String,
    /// Site-root relative path of the downloadable résumé
    pub resume: String,
}

/// Supported social networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    /// LinkedIn profile
    LinkedIn,
    /// YouTube channel
    YouTube,
    /// Vimeo profile
    Vimeo,
}

impl SocialNetwork {
    /// Human-readable network name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::YouTube => "YouTube",
            Self::Vimeo => "Vimeo",
        }
    }
}

/// An outbound profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which network
    pub network: SocialNetwork,
    /// Absolute profile URL
    pub url: String,
}

/// All static content of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Gallery tiles in display order
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    /// Portfolio owner
    pub owner: Owner,
    /// Hero banner
    pub hero: Hero,
    /// About section
    pub about: About,
    /// Service cards
    #[serde(default)]
    pub services: Vec<Service>,
    /// Skill lists
    #[serde(default)]
    pub skills: Skills,
    /// Project cards
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Awards
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Contact block
    pub contact: ContactDetails,
    /// Footer profile links
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid video id regex"))
}

impl SiteContent {
    /// Returns the content bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CONTENT).context("Failed to parse built-in site content")
    }

    /// Parses content from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let content: Self = toml::from_str(source).context("Invalid site content TOML")?;
        Ok(content)
    }

    /// Loads and validates content from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .context(format!("Failed to read content file: {}", path.display()))?;
        let content = Self::from_toml(&source)
            .context(format!("Failed to parse content file: {}", path.display()))?;
        content.validate()?;
        Ok(content)
    }

    /// Loads content from `path` when given, otherwise the built-in document.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Serializes the content back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site content")
    }

    /// Validates structural content rules.
    ///
    /// Checks:
    /// - owner name is present
    /// - contact email looks like an address
    /// - the hero video id is a YouTube identifier
    /// - social links are absolute http(s) URLs
    pub fn validate(&self) -> Result<()> {
        if self.owner.name.trim().is_empty() {
            anyhow::bail!("Owner name cannot be empty");
        }

        let email = self.contact.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => anyhow::bail!("Contact email '{}' is not a valid address", self.contact.email),
        }

        if !video_id_pattern().is_match(&self.hero.video_id) {
            anyhow::bail!(
                "Hero video id '{}' is not a YouTube video identifier",
                self.hero.video_id
            );
        }

        for social in &self.socials {
            let parsed = Url::parse(&social.url).context(format!(
                "Invalid {} URL: {}",
                social.network.label(),
                social.url
            ))?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                anyhow::bail!(
                    "{} URL must use http or https: {}",
                    social.network.label(),
                    social.url
                );
            }
        }

        Ok(())
    }

    /// Every asset path the page references, in page order.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut paths = vec![
            self.hero.animation.src.as_str(),
            self.about.portrait.src.as_str(),
        ];
        for project in &self.projects {
            if let ProjectMedia::Image { src, .. } = &project.media {
                paths.push(src);
            }
            for extra in &project.extras {
                match extra {
                    ProjectExtra::Image { src, .. } => paths.push(src),
                    ProjectExtra::Document { href, .. } => paths.push(href),
                }
            }
        }
        paths.extend(self.gallery.iter().map(GalleryImage::path));
        paths.push(&self.contact.resume);
        paths
    }

    /// Non-fatal findings: asset paths that will not resolve from the site root.
    ///
    /// Broken assets only degrade to a missing-image placeholder, so these are
    /// reported as warnings rather than errors.
    pub fn asset_warnings(&self) -> Vec<String> {
        self.asset_paths()
            .into_iter()
            .filter(|path| {
                !(path.starts_with('/')
                    || path.starts_with("https://")
                    || path.starts_with("http://"))
            })
            .map(|path| format!("Asset path '{path}' is not relative to the site root"))
            .collect()
    }
}
