//! Static assets shipped with the crate.

/// Site stylesheet.
pub const STYLESHEET: &str = include_str!("../assets/site.css");

/// Monogram favicon.
pub const FAVICON: &str = include_str!("../assets/favicon.svg");

/// Every bundled asset as `(file name, contents)`, written under `assets/`.
pub const BUNDLED: &[(&str, &str)] = &[("site.css", STYLESHEET), ("favicon.svg", FAVICON)];
