use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crown_core::Catalog;

/// Files under `public_dir` that the catalog refers to but that do not exist.
///
/// Covers catalog entries, category fallbacks and the default image; each
/// path is reported once, sorted.
pub fn missing_images(catalog: &Catalog, public_dir: &Path) -> Vec<PathBuf> {
    let referenced: BTreeSet<&str> = catalog
        .entries()
        .iter()
        .map(|e| e.image.as_str())
        .chain(catalog.categories().iter().map(|g| g.image.as_str()))
        .chain(std::iter::once(catalog.default_image()))
        .collect();

    referenced
        .into_iter()
        .map(|image| public_dir.join(image.trim_start_matches('/')))
        .filter(|path| !path.is_file())
        .collect()
}
