//! Font Loading - Size-Bound Handles For The Three Text Roles

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rusttype::{Font, Scale};
use thiserror::Error;

/// Text roles rendered onto a graphic, each at a fixed point size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
    Author,
}

impl TextRole {
    /// Prompt order used by the interactive workflow.
    pub const ALL: [TextRole; 3] = [TextRole::Title, TextRole::Subtitle, TextRole::Author];

    pub fn point_size(self) -> f32 {
        match self {
            TextRole::Title => 50.0,
            TextRole::Subtitle => 30.0,
            TextRole::Author => 20.0,
        }
    }
}

impl fmt::Display for TextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextRole::Title => write!(f, "title"),
            TextRole::Subtitle => write!(f, "subtitle"),
            TextRole::Author => write!(f, "author"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Font {name} not found in {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("Failed to read font {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Font {name} is not a usable TrueType font")]
    Parse { name: String },
}

/// A parsed font bound to one point size. Handles are never shared between
/// roles; each selection loads its own copy.
#[derive(Clone)]
pub struct FontHandle {
    pub name: String,
    pub size: f32,
    pub font: Font<'static>,
}

impl FontHandle {
    /// Uniform rasterization scale for this handle's size.
    pub fn scale(&self) -> Scale {
        Scale::uniform(self.size)
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("name", &self.name)
            .field("size", &self.size)
            .finish()
    }
}

/// Load `name` from `fonts_dir` at `size`.
///
/// Existence is checked before the read so a missing file reports NotFound
/// rather than a raw IO error.
pub fn load_font(fonts_dir: &Path, name: &str, size: f32) -> Result<FontHandle, FontError> {
    let path = fonts_dir.join(name);
    if !path.exists() {
        return Err(FontError::NotFound {
            name: name.to_string(),
            dir: fonts_dir.to_path_buf(),
        });
    }

    let bytes = std::fs::read(&path).map_err(|source| FontError::Read {
        name: name.to_string(),
        source,
    })?;
    let font = Font::try_from_vec(bytes).ok_or_else(|| FontError::Parse {
        name: name.to_string(),
    })?;

    Ok(FontHandle {
        name: name.to_string(),
        size,
        font,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_point_sizes_are_fixed() {
        assert_eq!(TextRole::Title.point_size(), 50.0);
        assert_eq!(TextRole::Subtitle.point_size(), 30.0);
        assert_eq!(TextRole::Author.point_size(), 20.0);
    }

    #[test]
    fn roles_prompt_in_title_subtitle_author_order() {
        let labels: Vec<String> = TextRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["title", "subtitle", "author"]);
    }

    #[test]
    fn missing_font_is_not_found_with_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_font(dir.path(), "Ghost.ttf", 50.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Font Ghost.ttf not found in {}", dir.path().display())
        );
    }

    #[test]
    fn junk_bytes_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Junk.ttf"), b"definitely not a font").unwrap();

        let err = load_font(dir.path(), "Junk.ttf", 20.0).unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }), "got {err}");
    }
}
