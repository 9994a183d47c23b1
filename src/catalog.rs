//! Asset Catalogs - Directory Listings Behind Explicit Suffix Tables

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffixes accepted as base images. Matching is case-sensitive.
pub const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Suffixes accepted as fonts.
pub const FONT_SUFFIXES: &[&str] = &[".ttf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Font,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "Images"),
            AssetKind::Font => write!(f, "Fonts"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} directory '{}' not found", .path.display())]
    NotFound { kind: AssetKind, path: PathBuf },

    #[error("Failed to read {kind} directory '{}': {source}", .path.display())]
    Io {
        kind: AssetKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// List base images under `dir`, in directory-listing order.
pub fn list_images(dir: &Path) -> Result<Vec<String>, CatalogError> {
    list_entries(dir, AssetKind::Image, IMAGE_SUFFIXES)
}

/// List font files under `dir`, in directory-listing order.
pub fn list_fonts(dir: &Path) -> Result<Vec<String>, CatalogError> {
    list_entries(dir, AssetKind::Font, FONT_SUFFIXES)
}

/// Shared lister core. Entry order is whatever the OS reports; no sort is
/// applied. Entries are matched by name alone, so a directory named like an
/// image is listed here and rejected later when it is opened.
fn list_entries(
    dir: &Path,
    kind: AssetKind,
    suffixes: &[&str],
) -> Result<Vec<String>, CatalogError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(CatalogError::NotFound {
                kind,
                path: dir.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(CatalogError::Io {
                kind,
                path: dir.to_path_buf(),
                source: err,
            });
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| CatalogError::Io {
            kind,
            path: dir.to_path_buf(),
            source: err,
        })?;
        if let Some(name) = entry.file_name().to_str() {
            if suffixes.iter().any(|suffix| name.ends_with(suffix)) {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
