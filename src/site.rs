//! Static site build: renders the page and lays out a deployable directory.
//!
//! ```text
//! <output>/
//!   index.html
//!   assets/site.css, assets/favicon.svg
//!   pkg/...          (browser runtime, when a wasm directory is given)
//!   ...              (media files, copied to the site root)
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::assets;
use crate::models::SiteContent;
use crate::render::{render_page, PageOptions};

/// Inputs of a static build.
#[derive(Debug, Clone)]
pub struct BuildPlan<'a> {
    /// Content to render
    pub content: &'a SiteContent,
    /// Page-level options
    pub options: PageOptions,
    /// Directory to write the site into
    pub output_dir: PathBuf,
    /// Media directory copied to the site root
    pub media_dir: Option<PathBuf>,
    /// wasm-pack output copied to `pkg/`
    pub wasm_dir: Option<PathBuf>,
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Directory the site was written to
    pub output_dir: PathBuf,
    /// Bytes of the rendered page
    pub page_bytes: usize,
    /// Bundled assets written
    pub assets_written: usize,
    /// Media files copied
    pub media_copied: usize,
    /// Runtime files copied
    pub runtime_copied: usize,
    /// Media paths referenced by the content but absent from the media directory
    pub missing_media: Vec<String>,
}

impl BuildPlan<'_> {
    /// Runs the build.
    pub fn execute(&self) -> Result<BuildReport> {
        let output_dir = &self.output_dir;
        fs::create_dir_all(output_dir).context(format!(
            "Failed to create output directory: {}",
            output_dir.display()
        ))?;

        let mut options = self.options.clone();
        if self.wasm_dir.is_none() {
            options.runtime_module = None;
        }

        let page = render_page(self.content, &options);
        let index_path = output_dir.join("index.html");
        fs::write(&index_path, &page)
            .context(format!("Failed to write {}", index_path.display()))?;
        debug!(path = %index_path.display(), bytes = page.len(), "page written");

        let assets_dir = output_dir.join("assets");
        fs::create_dir_all(&assets_dir).context(format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        ))?;
        for (name, body) in assets::BUNDLED {
            let path = assets_dir.join(name);
            fs::write(&path, body).context(format!("Failed to write {}", path.display()))?;
        }

        let mut report = BuildReport {
            output_dir: output_dir.clone(),
            page_bytes: page.len(),
            assets_written: assets::BUNDLED.len(),
            ..BuildReport::default()
        };

        if let Some(media_dir) = &self.media_dir {
            report.media_copied = copy_tree(media_dir, output_dir)?;
            report.missing_media = missing_media(self.content, media_dir);
            for path in &report.missing_media {
                warn!(%path, "referenced media file not found");
            }
        }

        if let Some(wasm_dir) = &self.wasm_dir {
            report.runtime_copied = copy_tree(wasm_dir, &output_dir.join("pkg"))?;
        }

        info!(
            output = %output_dir.display(),
            media = report.media_copied,
            runtime = report.runtime_copied,
            "site built"
        );
        Ok(report)
    }
}

/// Content media paths that do not resolve inside `media_dir`.
///
/// Absolute URLs are skipped.
#[must_use]
pub fn missing_media(content: &SiteContent, media_dir: &Path) -> Vec<String> {
    content
        .asset_paths()
        .into_iter()
        .filter(|path| path.starts_with('/'))
        .filter(|path| !media_dir.join(path.trim_start_matches('/')).is_file())
        .map(str::to_string)
        .collect()
}

/// Recursively copies `source` into `target`. Returns the number of files copied.
///
/// `target` may live inside `source` (e.g. `public/` built into `public/dist`);
/// it is skipped during the walk. Copying a directory onto itself is an error.
pub fn copy_tree(source: &Path, target: &Path) -> Result<usize> {
    if !source.is_dir() {
        anyhow::bail!("Not a directory: {}", source.display());
    }

    fs::create_dir_all(target)
        .context(format!("Failed to create directory: {}", target.display()))?;

    let source_root = fs::canonicalize(source)
        .context(format!("Failed to resolve {}", source.display()))?;
    let target_root = fs::canonicalize(target)
        .context(format!("Failed to resolve {}", target.display()))?;
    if source_root == target_root {
        anyhow::bail!(
            "Cannot copy {} into itself; choose a different output directory",
            source.display()
        );
    }

    copy_entries(&source_root, target, &target_root)
}

fn copy_entries(source: &Path, target: &Path, skip: &Path) -> Result<usize> {
    fs::create_dir_all(target)
        .context(format!("Failed to create directory: {}", target.display()))?;

    let mut copied = 0;
    let entries =
        fs::read_dir(source).context(format!("Failed to read directory: {}", source.display()))?;
    for entry in entries {
        let entry = entry.context(format!("Failed to read entry in {}", source.display()))?;
        let path = entry.path();
        let destination = target.join(entry.file_name());

        if path.is_dir() {
            if fs::canonicalize(&path).is_ok_and(|resolved| resolved == skip) {
                debug!(path = %path.display(), "skipping output directory");
                continue;
            }
            copied += copy_entries(&path, &destination, skip)?;
        } else {
            fs::copy(&path, &destination).context(format!(
                "Failed to copy {} to {}",
                path.display(),
                destination.display()
            ))?;
            copied += 1;
        }
    }

    Ok(copied)
}
