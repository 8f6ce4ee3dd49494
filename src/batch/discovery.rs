//! Input discovery and output path mapping.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::StampError;

/// Extensions picked up by the batch run, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Recursively list the supported images under `root`, sorted.
///
/// Unreadable entries are logged and skipped.
pub fn discover_images(root: impl AsRef<Path>) -> Vec<PathBuf> {
    discover_images_excluding(root, None::<&Path>)
}

/// Like [`discover_images`], but never descends into `excluded` (typically
/// the output root when it lives inside the input tree).
pub fn discover_images_excluding(
    root: impl AsRef<Path>,
    excluded: Option<impl AsRef<Path>>,
) -> Vec<PathBuf> {
    let root = root.as_ref();
    let excluded_dir: Option<&Path> = excluded.as_ref().map(AsRef::as_ref);
    let mut images: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || excluded_dir.map_or(true, |dir| !entry.path().starts_with(dir))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_supported_image(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    images.sort();

    tracing::debug!(root = %root.display(), count = images.len(), "Discovered images");
    images
}

/// Mirror `path` (located under `input_root`) into `output_root`.
pub fn output_path_for(
    input_root: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, StampError> {
    let (input_root, path) = (input_root.as_ref(), path.as_ref());
    let relative = path.strip_prefix(input_root).map_err(|_| {
        StampError::invalid_param(
            "path",
            format!(
                "{} is not under input directory {}",
                path.display(),
                input_root.display()
            ),
        )
    })?;
    Ok(output_root.as_ref().join(relative))
}
