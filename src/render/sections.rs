//! Content sections of the page, in document order.

use std::fmt::Write as _;

use super::escape;
use crate::branding::CONTACT_FALLBACK_PATH;
use crate::contact::ContactField;
use crate::models::{GalleryImage, ProjectExtra, ProjectMedia, Section, SiteContent};

/// Anchor id of the gallery, which is rendered but never tracked.
pub const GALLERY_ID: &str = "visual-art-gallery";

/// Base URL of embedded YouTube players.
const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

fn open_section(html: &mut String, section: Section, heading: &str) {
    let _ = writeln!(
        html,
        "<section id=\"{id}\" class=\"section section-{id}\" data-tracked>",
        id = section.id()
    );
    let _ = writeln!(html, "<h2>{}</h2>", escape(heading));
}

fn close_section(html: &mut String) {
    html.push_str("</section>\n");
}

fn render_list(html: &mut String, class: &str, items: &[String]) {
    let _ = writeln!(html, "<ul class=\"{class}\">");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape(item));
    }
    html.push_str("</ul>\n");
}

pub(crate) fn render_hero(html: &mut String, content: &SiteContent) {
    let hero = &content.hero;
    let _ = writeln!(
        html,
        "<section id=\"{id}\" class=\"section section-{id}\" data-tracked>",
        id = Section::Hero.id()
    );
    html.push_str("<div class=\"hero-card\">\n");
    let _ = writeln!(
        html,
        "<img class=\"hero-animation\" src=\"{}\" alt=\"{}\">",
        escape(&hero.animation.src),
        escape(&hero.animation.alt)
    );
    let _ = writeln!(
        html,
        "<p class=\"taglines\">{}</p>",
        escape(&content.owner.taglines.join(" | "))
    );
    let _ = writeln!(html, "<p class=\"intro\">{}</p>", escape(&hero.intro));
    html.push_str("<div class=\"video-frame\">\n");
    let _ = writeln!(
        html,
        "<iframe src=\"{YOUTUBE_EMBED}{}\" title=\"Showreel\" loading=\"lazy\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
         allowfullscreen></iframe>",
        escape(&hero.video_id)
    );
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<a class=\"cta\" href=\"#{id}\" data-section=\"{id}\">{} <span aria-hidden=\"true\">&#8964;</span></a>",
        escape(&hero.call_to_action),
        id = Section::About.id()
    );
    html.push_str("</div>\n");
    close_section(html);
}

pub(crate) fn render_about(html: &mut String, content: &SiteContent) {
    let about = &content.about;
    open_section(html, Section::About, "About Me");
    html.push_str("<div class=\"about-grid\">\n<div class=\"about-text\">\n");
    for paragraph in &about.paragraphs {
        let _ = writeln!(html, "<p>{}</p>", escape(paragraph));
    }
    render_list(html, "traits", &about.traits);
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<div class=\"portrait\"><img src=\"{}\" alt=\"{}\"></div>",
        escape(&about.portrait.src),
        escape(&about.portrait.alt)
    );
    html.push_str("</div>\n");
    close_section(html);
}

pub(crate) fn render_services(html: &mut String, content: &SiteContent) {
    open_section(html, Section::Services, "What I Do");
    html.push_str("<div class=\"cards\">\n");
    for service in &content.services {
        let _ = writeln!(
            html,
            "<article class=\"card service\"><span class=\"icon\" aria-hidden=\"true\">{}</span><h3>{}</h3><p>{}</p></article>",
            escape(&service.icon),
            escape(&service.title),
            escape(&service.description)
        );
    }
    html.push_str("</div>\n");
    close_section(html);
}

pub(crate) fn render_skills(html: &mut String, content: &SiteContent) {
    open_section(html, Section::Skills, "Skills & Software");
    html.push_str("<div class=\"skill-columns\">\n<div>\n<h3>Software Expertise</h3>\n");
    render_list(html, "skill-list", &content.skills.software);
    html.push_str("</div>\n<div>\n<h3>Core Skills</h3>\n");
    render_list(html, "skill-list", &content.skills.core);
    html.push_str("</div>\n</div>\n");
    close_section(html);
}

pub(crate) fn render_projects(html: &mut String, content: &SiteContent) {
    open_section(html, Section::Projects, "Featured Projects");
    html.push_str("<div class=\"cards\">\n");
    for project in &content.projects {
        html.push_str("<article class=\"card project\">\n");
        match &project.media {
            ProjectMedia::Image { src, alt } => {
                let _ = writeln!(
                    html,
                    "<img class=\"project-media\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    escape(src),
                    escape(alt)
                );
            }
            ProjectMedia::Emoji { glyph } => {
                let _ = writeln!(
                    html,
                    "<div class=\"project-media emoji\" aria-hidden=\"true\">{}</div>",
                    escape(glyph)
                );
            }
        }
        for extra in &project.extras {
            match extra {
                ProjectExtra::Image { src, alt } => {
                    let _ = writeln!(
                        html,
                        "<img class=\"project-extra\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                        escape(src),
                        escape(alt)
                    );
                }
                ProjectExtra::Document { href, label } => {
                    let _ = writeln!(
                        html,
                        "<a class=\"project-extra\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                        escape(href),
                        escape(label)
                    );
                }
            }
        }
        let _ = writeln!(
            html,
            "<h3>{}</h3>\n<p>{}</p>\n<span class=\"role\">{}</span>",
            escape(&project.title),
            escape(&project.description),
            escape(&project.role)
        );
        html.push_str("</article>\n");
    }
    html.push_str("</div>\n");
    close_section(html);
}

fn render_gallery_tile(html: &mut String, position: usize, image: &GalleryImage) {
    let src = escape(image.path());
    let alt = format!("Art {position}");
    if image.is_vector() {
        let _ = writeln!(
            html,
            "<figure class=\"gallery-tile\"><object data=\"{src}\" type=\"image/svg+xml\" aria-label=\"{alt}\"><img src=\"{src}\" alt=\"{alt}\"></object></figure>"
        );
    } else {
        let _ = writeln!(
            html,
            "<figure class=\"gallery-tile\"><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\"></figure>"
        );
    }
}

pub(crate) fn render_gallery(html: &mut String, content: &SiteContent) {
    let _ = writeln!(
        html,
        "<section id=\"{GALLERY_ID}\" class=\"section section-gallery\">"
    );
    html.push_str("<h2>Visual Art Gallery</h2>\n<div class=\"gallery-grid\">\n");
    for (index, image) in content.gallery.iter().enumerate() {
        render_gallery_tile(html, index + 1, image);
    }
    html.push_str("</div>\n");
    close_section(html);
}

pub(crate) fn render_achievements(html: &mut String, content: &SiteContent) {
    open_section(html, Section::Achievements, "Achievements");
    html.push_str("<ol class=\"timeline\">\n");
    for achievement in &content.achievements {
        let _ = writeln!(
            html,
            "<li class=\"card achievement\"><span class=\"year\">{}</span><h3>{}</h3><p class=\"organization\">{}</p><p class=\"location\">{}</p><p>{}</p></li>",
            escape(&achievement.year),
            escape(&achievement.title),
            escape(&achievement.organization),
            escape(&achievement.location),
            escape(&achievement.description)
        );
    }
    html.push_str("</ol>\n");
    close_section(html);
}

pub(crate) fn render_contact(html: &mut String, content: &SiteContent) {
    let contact = &content.contact;
    open_section(html, Section::Contact, "Let's Create Together");
    html.push_str("<div class=\"contact-grid\">\n<div class=\"contact-details\">\n");
    html.push_str("<h3>Contact Information</h3>\n<ul>\n");
    let _ = writeln!(
        html,
        "<li class=\"email\"><a href=\"mailto:{email}\">{email}</a></li>",
        email = escape(&contact.email)
    );
    let dialable: String = contact
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let _ = writeln!(
        html,
        "<li class=\"phone\"><a href=\"tel:{}\">{}</a></li>",
        escape(&dialable),
        escape(&contact.phone)
    );
    let _ = writeln!(html, "<li class=\"location\">{}</li>", escape(&contact.location));
    html.push_str("</ul>\n");
    let _ = writeln!(
        html,
        "<a class=\"resume\" href=\"{}\" download>Download Resume</a>",
        escape(&contact.resume)
    );
    html.push_str("</div>\n");

    let _ = writeln!(
        html,
        "<form id=\"contact-form\" class=\"contact-form\" action=\"{CONTACT_FALLBACK_PATH}\" method=\"get\">"
    );
    html.push_str("<h3>Send Message</h3>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" name=\"{}\" placeholder=\"Your Name\">",
        ContactField::Name.control_name()
    );
    let _ = writeln!(
        html,
        "<input type=\"email\" name=\"{}\" placeholder=\"Your Email\">",
        ContactField::Email.control_name()
    );
    let _ = writeln!(
        html,
        "<textarea name=\"{}\" rows=\"5\" placeholder=\"Your Message\"></textarea>",
        ContactField::Message.control_name()
    );
    html.push_str("<button type=\"submit\">Send Message</button>\n</form>\n");
    html.push_str("</div>\n");
    close_section(html);
}
