//! Folio Library
//!
//! Single-page portfolio for a 3D animator. The library holds the page state
//! model (section reveal, active section, pointer highlight), the scroll
//! navigator, the ambient backdrop scene with its frame loop, the contact
//! form's mail link, the static content model and the HTML renderer.
//!
//! Native builds add the command line ([`cli`]) and, with the default `web`
//! feature, a preview server ([`web`]). On `wasm32` the same core is bound to
//! the DOM by the browser runtime.

// Module declarations
pub mod assets;
pub mod branding;
pub mod config;
pub mod contact;
pub mod models;
pub mod navigator;
pub mod render;
pub mod scene;
pub mod site;
pub mod viewport;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(feature = "web")]
pub mod web;

#[cfg(target_arch = "wasm32")]
mod wasm;
