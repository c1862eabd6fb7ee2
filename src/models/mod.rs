//! Data models for the portfolio page.
//!
//! This module contains the static content model, the section enumeration and
//! color values. Models are independent of rendering and runtime state.

pub mod content;
pub mod rgb;
pub mod section;

// Re-export all model types
pub use content::{
    About, Achievement, ContactDetails, GalleryImage, Hero, ImageRef, Owner, Project,
    ProjectExtra, ProjectMedia, Service, SiteContent, Skills, SocialLink, SocialNetwork,
};
pub use rgb::{RgbColor, NEON_PALETTE};
pub use section::Section;
