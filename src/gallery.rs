// SPDX-License-Identifier: MPL-2.0
//! Item sources for the carousel: TOML manifests and image directories.
//!
//! A manifest lists items explicitly:
//!
//! ```toml
//! [[items]]
//! source = "photos/harbour.jpg"
//! alt = "Boats in the harbour at dusk"
//! caption = "Saint-Malo, 2023"
//! ```
//!
//! Relative sources are resolved against the manifest's directory. Plain
//! paths given on the command line are either image files or directories
//! scanned non-recursively; alt text then defaults to the file stem.

use crate::domain::carousel::CarouselItem;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Image extensions picked up by directory scans (lowercase).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

/// One `[[items]]` entry of a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    pub source: String,
    #[serde(alias = "alt_text")]
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    items: Vec<ManifestEntry>,
}

impl ManifestEntry {
    /// Converts into a carousel item, resolving relative paths against `base`.
    fn into_item(self, base: Option<&Path>) -> CarouselItem {
        let source = match base {
            Some(base) if is_relative_path(&self.source) => {
                base.join(&self.source).to_string_lossy().into_owned()
            }
            _ => self.source,
        };
        CarouselItem::new(source, self.alt).with_optional_caption(self.caption)
    }
}

/// URLs and absolute paths are kept as written.
fn is_relative_path(source: &str) -> bool {
    !source.contains("://") && Path::new(source).is_relative()
}

/// Parses manifest text. Relative sources are joined onto `base` when given.
pub fn parse_manifest(content: &str, base: Option<&Path>) -> Result<Vec<CarouselItem>> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|err| Error::Manifest(err.to_string()))?;

    manifest
        .items
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            if entry.source.trim().is_empty() {
                return Err(Error::Manifest(format!(
                    "item {} has an empty source",
                    position + 1
                )));
            }
            Ok(entry.into_item(base))
        })
        .collect()
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<CarouselItem>> {
    let content = fs::read_to_string(path)?;
    let items = parse_manifest(&content, path.parent())?;
    tracing::debug!(path = %path.display(), count = items.len(), "manifest loaded");
    Ok(items)
}

/// Checks whether `path` has one of the [`SUPPORTED_EXTENSIONS`].
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Lists supported images directly inside `directory`, sorted by file name
/// ignoring case.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by_cached_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(images)
}

/// Builds an item for an image file, using the file stem as alt text.
#[must_use]
pub fn item_for_image(path: &Path) -> CarouselItem {
    let alt = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    CarouselItem::new(path.to_string_lossy().into_owned(), alt)
}

/// Expands command-line paths into items, in argument order.
///
/// Directories contribute their scanned images. Paths that are neither a
/// readable directory nor a supported image are returned separately so the
/// caller can report them.
pub fn items_from_paths<P: AsRef<Path>>(paths: &[P]) -> (Vec<CarouselItem>, Vec<PathBuf>) {
    let mut items = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            match scan_directory(path) {
                Ok(images) => items.extend(images.iter().map(|image| item_for_image(image))),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "cannot scan directory");
                    skipped.push(path.to_path_buf());
                }
            }
        } else if path.is_file() && is_supported_image(path) {
            items.push(item_for_image(path));
        } else {
            skipped.push(path.to_path_buf());
        }
    }

    (items, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    #[test]
    fn supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("b.webp")));
        assert!(is_supported_image(Path::new("c.Tif")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
    }

    #[test]
    fn scan_keeps_only_images_sorted_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        touch(temp_dir.path(), "b.png");
        touch(temp_dir.path(), "C.gif");
        touch(temp_dir.path(), "a.jpg");
        touch(temp_dir.path(), "readme.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let images = scan_directory(temp_dir.path()).expect("failed to scan directory");
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "C.gif"]);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = scan_directory(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn image_item_uses_file_stem_as_alt() {
        let item = item_for_image(Path::new("/photos/harbour at dusk.jpg"));
        assert_eq!(item.alt_text(), "harbour at dusk");
        assert_eq!(item.source(), "/photos/harbour at dusk.jpg");
        assert_eq!(item.caption(), None);
    }

    #[test]
    fn paths_expand_directories_and_report_unusable_entries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let gallery = temp_dir.path().join("gallery");
        fs::create_dir(&gallery).expect("failed to create dir");
        touch(&gallery, "2.png");
        touch(&gallery, "1.png");
        let single = touch(temp_dir.path(), "cover.jpg");
        let text = touch(temp_dir.path(), "notes.txt");

        let (items, skipped) = items_from_paths(&[single, gallery, text.clone()]);

        let alts: Vec<_> = items.iter().map(CarouselItem::alt_text).collect();
        assert_eq!(alts, vec!["cover", "1", "2"]);
        assert_eq!(skipped, vec![text]);
    }

    #[test]
    fn manifest_parses_items_in_order() {
        let items = parse_manifest(
            r#"
            [[items]]
            source = "a.jpg"
            alt = "A"

            [[items]]
            source = "https://example.com/b.jpg"
            alt_text = "B"
            caption = "Second"

            [[items]]
            source = "/abs/c.jpg"
            alt = "C"
            caption = "   "
            "#,
            Some(Path::new("/gallery")),
        )
        .expect("manifest should parse");

        assert_eq!(items.len(), 3);
        assert_eq!(
            Path::new(items[0].source()),
            Path::new("/gallery").join("a.jpg")
        );
        assert_eq!(items[1].source(), "https://example.com/b.jpg");
        assert_eq!(items[1].alt_text(), "B");
        assert_eq!(items[1].caption(), Some("Second"));
        assert_eq!(items[2].source(), "/abs/c.jpg");
        assert_eq!(items[2].caption(), None);
    }

    #[test]
    fn manifest_without_items_is_empty() {
        let items = parse_manifest("", None).expect("empty manifest should parse");
        assert!(items.is_empty());
    }

    #[test]
    fn manifest_rejects_missing_alt() {
        let result = parse_manifest("[[items]]\nsource = \"a.jpg\"\n", None);
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn manifest_rejects_blank_source() {
        let result = parse_manifest("[[items]]\nsource = \"  \"\nalt = \"A\"\n", None);
        let Err(Error::Manifest(message)) = result else {
            panic!("expected manifest error");
        };
        assert!(message.contains("item 1"));
    }

    #[test]
    fn load_manifest_resolves_against_its_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("gallery.toml");
        fs::write(&path, "[[items]]\nsource = \"a.png\"\nalt = \"A\"\n")
            .expect("failed to write manifest");

        let items = load_manifest(&path).expect("manifest should load");
        assert_eq!(Path::new(items[0].source()), temp_dir.path().join("a.png"));
    }
}
