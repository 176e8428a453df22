use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use storydeck::{AssetReference, Slide};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

// --- Collect slide backgrounds from a directory, in file name order ---
// Files carrying the mobile suffix are variants of another slide, not slides.
pub fn load_sorted_image_paths(dir_path: &Path, mobile_suffix: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            continue;
        }
        let is_variant = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| !mobile_suffix.is_empty() && stem.ends_with(mobile_suffix));
        if is_variant {
            debug!("Skipping mobile variant {}", path.display());
            continue;
        }
        paths.push(path);
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

pub fn slides_from_paths(paths: &[PathBuf]) -> Vec<Slide> {
    paths
        .iter()
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?;
            let extension = path.extension()?.to_str()?;
            Some(Slide::new().with_background(AssetReference::new(stem, extension)))
        })
        .collect()
}

/// Asset root for a deck directory, with the trailing separator resolution
/// expects.
pub fn asset_root(dir_path: &Path) -> String {
    let mut root = dir_path.to_string_lossy().into_owned();
    if !root.ends_with('/') {
        root.push('/');
    }
    root
}
