//! Page sections tracked for visibility and navigation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One scrollable, navigable content region of the page.
///
/// The declaration order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Banner with the showreel
    Hero,
    /// Introduction and portrait
    About,
    /// "What I Do" cards
    Services,
    /// Software and core skills
    Skills,
    /// Featured projects
    Projects,
    /// Awards timeline
    Achievements,
    /// Contact details and mail form
    Contact,
}

impl Section {
    /// Every section in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Services,
        Self::Skills,
        Self::Projects,
        Self::Achievements,
        Self::Contact,
    ];

    /// DOM anchor id of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Services => "services",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }

    /// Looks a section up by its anchor id. Unknown ids yield `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Position of the section in [`Section::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s.trim()).ok_or_else(|| anyhow::anyhow!("Unknown section '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
            assert_eq!(section.to_string().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_index_matches_navigation_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_hero_is_labelled_home() {
        assert_eq!(Section::Hero.nav_label(), "Home");
        assert_eq!(Section::Achievements.nav_label(), "Achievements");
    }

    #[test]
    fn test_gallery_is_not_a_section() {
        assert_eq!(Section::from_id("visual-art-gallery"), None);
        assert!("gallery".parse::<Section>().is_err());
    }
}
