//! Target enumeration: lecture indices crossed with filename templates.
//!
//! Everything here is pure derivation; no network or filesystem access.

use std::path::PathBuf;

use url::Url;

use super::error::MirrorError;
use crate::config::MirrorConfig;

/// One remote file and the local path it mirrors to.
///
/// Derived per enumeration step and dropped once its outcome is recorded;
/// nothing is persisted across runs besides the file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Lecture index this file belongs to.
    pub lecture: u32,
    /// Concrete file name, e.g. `Slides07.pdf`.
    pub file_name: String,
    /// Remote URL of the file.
    pub url: Url,
    /// Local destination path, `<output_root>/<NN>/<file_name>`.
    pub path: PathBuf,
}

/// Two-digit zero-padded subdirectory name for a lecture index.
pub(super) fn subdir_name(lecture: u32) -> String {
    format!("{lecture:02}")
}

/// Returns the base URL with a trailing slash on its path, so joining a
/// relative segment appends rather than replaces the last path component.
fn directory_base(base_url: &Url) -> Url {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// Derives the targets for a single lecture, templates in configured order.
///
/// # Errors
///
/// Returns [`MirrorError::Url`] if a segment cannot be joined onto the
/// base URL.
pub fn lecture_targets(config: &MirrorConfig, lecture: u32) -> Result<Vec<Target>, MirrorError> {
    let subdir = subdir_name(lecture);
    let subdir_url = directory_base(&config.base_url)
        .join(&format!("{subdir}/"))
        .map_err(|e| MirrorError::url(&subdir, e))?;

    let mut targets = Vec::with_capacity(config.templates.len());
    for template in &config.templates {
        let file_name = template.render(lecture);
        let url = subdir_url
            .join(&file_name)
            .map_err(|e| MirrorError::url(&file_name, e))?;
        let path = config.output_root.join(&subdir).join(&file_name);
        targets.push(Target {
            lecture,
            file_name,
            url,
            path,
        });
    }
    Ok(targets)
}

/// Builds the full target list in enumeration order: ascending lecture
/// index, templates in their configured order within each lecture.
///
/// # Errors
///
/// Returns [`MirrorError::Url`] if a segment cannot be joined onto the
/// base URL.
pub fn build_targets(config: &MirrorConfig) -> Result<Vec<Target>, MirrorError> {
    let mut targets = Vec::new();
    for lecture in config.lectures.clone() {
        targets.extend(lecture_targets(config, lecture)?);
    }
    Ok(targets)
}
