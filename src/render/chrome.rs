//! Page chrome: decorative backdrop, navigation bar and footer.

use std::fmt::Write as _;

use super::escape;
use crate::models::{Section, SiteContent};

/// Number of floating particles in the backdrop.
pub const PARTICLE_COUNT: usize = 6;

/// Placement and timing of one floating particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the viewport
    pub left_percent: u32,
    /// Vertical position, percent of the viewport
    pub top_percent: u32,
    /// Bob cycle length, seconds
    pub duration_secs: f32,
    /// Start delay, seconds
    pub delay_secs: f32,
}

impl Particle {
    /// Layout of particle `index`: staggered diagonally with growing periods.
    #[must_use]
    pub fn nth(index: usize) -> Self {
        let i = index as u32;
        Self {
            left_percent: 20 + i * 15,
            top_percent: 30 + i * 10,
            duration_secs: 3.0 + index as f32,
            delay_secs: index as f32 * 0.8,
        }
    }
}

pub(crate) fn render_backdrop(html: &mut String) {
    html.push_str("<div class=\"backdrop\" aria-hidden=\"true\">\n");
    html.push_str("<div id=\"ambient-scene\" class=\"ambient-scene\"></div>\n");
    html.push_str("<div class=\"backdrop-tint\"></div>\n");
    html.push_str("<div id=\"pointer-highlight\" class=\"pointer-highlight\"></div>\n");
    html.push_str("<div class=\"particles\">\n");
    for particle in (0..PARTICLE_COUNT).map(Particle::nth) {
        let _ = writeln!(
            html,
            "<span class=\"particle\" style=\"left: {}%; top: {}%; animation-duration: {}s; animation-delay: {:.1}s\"></span>",
            particle.left_percent, particle.top_percent, particle.duration_secs, particle.delay_secs
        );
    }
    html.push_str("</div>\n");
    html.push_str("<div class=\"grid-pattern\"></div>\n");
    html.push_str("</div>\n");
}

pub(crate) fn render_nav(html: &mut String, content: &SiteContent) {
    html.push_str("<nav class=\"site-nav\">\n");
    let _ = writeln!(
        html,
        "<a class=\"monogram\" href=\"#hero\" data-section=\"hero\">{}</a>",
        escape(&content.owner.initials)
    );
    html.push_str("<ul class=\"nav-links\">\n");
    for section in Section::ALL {
        let active = if section == Section::Hero {
            " is-active"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<li><a class=\"nav-link{active}\" href=\"#{id}\" data-section=\"{id}\">{label}</a></li>",
            id = section.id(),
            label = section.nav_label(),
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

pub(crate) fn render_footer(html: &mut String, content: &SiteContent, year: i32) {
    html.push_str("<footer class=\"site-footer\">\n");
    let _ = writeln!(
        html,
        "<p>&copy; {year} {}. All rights reserved.</p>",
        escape(&content.owner.name)
    );
    html.push_str("<ul class=\"socials\">\n");
    for social in &content.socials {
        let _ = writeln!(
            html,
            "<li><a class=\"social social-{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
            social.network.label().to_lowercase(),
            escape(&social.url),
            social.network.label()
        );
    }
    html.push_str("</ul>\n</footer>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_layout() {
        let first = Particle::nth(0);
        assert_eq!((first.left_percent, first.top_percent), (20, 30));
        assert!(first.delay_secs.abs() < f32::EPSILON);

        let last = Particle::nth(PARTICLE_COUNT - 1);
        assert_eq!((last.left_percent, last.top_percent), (95, 80));
        assert!((last.duration_secs - 8.0).abs() < f32::EPSILON);
        assert!((last.delay_secs - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_backdrop_hosts() {
        let mut html = String::new();
        render_backdrop(&mut html);
        assert!(html.contains("id=\"ambient-scene\""));
        assert!(html.contains("id=\"pointer-highlight\""));
        assert_eq!(html.matches("class=\"particle\"").count(), PARTICLE_COUNT);
        assert!(html.contains("left: 35%; top: 40%; animation-duration: 4s; animation-delay: 0.8s"));
    }

    #[test]
    fn test_nav_lists_sections_in_order() {
        let content = SiteContent::builtin().unwrap();
        let mut html = String::new();
        render_nav(&mut html, &content);

        assert!(html.contains(">MJ</a>"));
        assert!(html.contains("class=\"nav-link is-active\" href=\"#hero\" data-section=\"hero\">Home</a>"));
        let positions: Vec<usize> = Section::ALL
            .iter()
            .map(|s| html.find(&format!("href=\"#{}\"", s.id())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(">Achievements</a>"));
    }

    #[test]
    fn test_footer_links_open_safely() {
        let content = SiteContent::builtin().unwrap();
        let mut html = String::new();
        render_footer(&mut html, &content, 2031);

        assert!(html.contains("&copy; 2031 Manya Jain. All rights reserved."));
        assert_eq!(
            html.matches("target=\"_blank\" rel=\"noopener noreferrer\"")
                .count(),
            content.socials.len()
        );
        assert!(html.contains("href=\"https://vimeo.com/manyajain\""));
    }
}
