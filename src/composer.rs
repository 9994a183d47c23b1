//! Graphic Composition - Single Write Path
//!
//! CRITICAL: base images are opened read-only and never mutated on disk.
//! Every run decodes a fresh copy, draws onto it in memory, and writes a new
//! artifact under the output location.

use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, GenericImage, GenericImageView, Rgba};
use rusttype::point;
use thiserror::Error;

use crate::fonts::FontHandle;

/// Fixed horizontal offset of every text anchor, in pixels.
pub const LEFT_OFFSET: i32 = 50;

const TITLE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SUBTITLE_FILL: Rgba<u8> = Rgba([211, 211, 211, 255]);
const AUTHOR_FILL: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// The closed set of ways one composition can fail. Callers decide whether
/// to surface or swallow; nothing in here terminates the process.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Could not open base image '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode base image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not write graphic '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Everything one composition consumes: the chosen base image, the three
/// text values, and a size-bound font handle per role.
#[derive(Debug, Clone)]
pub struct GraphicRequest {
    pub base_image: String,
    pub output_name: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub title_font: FontHandle,
    pub subtitle_font: FontHandle,
    pub author_font: FontHandle,
}

/// Top-left pixel anchors for the three text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub title: (i32, i32),
    pub subtitle: (i32, i32),
    pub author: (i32, i32),
}

/// Compute the line anchors for an image of the given height.
///
/// Integer floor division, and no clamping: on a short image the author
/// anchor goes negative and its pixels are clipped at draw time.
pub fn anchors(height: u32) -> Anchors {
    let h = height as i32;
    Anchors {
        title: (LEFT_OFFSET, h / 5),
        subtitle: (LEFT_OFFSET, h / 3),
        author: (LEFT_OFFSET, h - 100),
    }
}

/// Composes graphics from base images and writes them under the output
/// location.
pub struct Composer {
    images_dir: PathBuf,
    output_dir: PathBuf,
}

impl Composer {
    pub fn new(images_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Run one composition end to end and return the saved path.
    ///
    /// The output directory is created on demand. The container format is
    /// inferred from the output name's extension, and the decoded image
    /// keeps the base image's color mode, so an RGB base stays RGB all the
    /// way to the encoder.
    pub fn compose(&self, request: &GraphicRequest) -> Result<PathBuf, ComposeError> {
        let image_path = self.images_dir.join(&request.base_image);
        let bytes = fs::read(&image_path).map_err(|source| ComposeError::Open {
            path: image_path.clone(),
            source,
        })?;
        let mut img = image::load_from_memory(&bytes).map_err(|source| ComposeError::Decode {
            path: image_path.clone(),
            source,
        })?;

        let at = anchors(img.height());
        draw_line(&mut img, &request.title_font, at.title, TITLE_FILL, &request.title);
        draw_line(
            &mut img,
            &request.subtitle_font,
            at.subtitle,
            SUBTITLE_FILL,
            &request.subtitle,
        );
        let byline = format!("By {}", request.author);
        draw_line(&mut img, &request.author_font, at.author, AUTHOR_FILL, &byline);

        let output_path = self.output_dir.join(&request.output_name);
        fs::create_dir_all(&self.output_dir).map_err(|source| ComposeError::Write {
            path: output_path.clone(),
            source: image::ImageError::IoError(source),
        })?;
        img.save(&output_path).map_err(|source| ComposeError::Write {
            path: output_path.clone(),
            source,
        })?;

        Ok(output_path)
    }
}

/// Draw one line of text with its top-left corner at `anchor`.
///
/// The baseline sits one ascent below the anchor, so the anchor behaves
/// like the top-left corner of the rendered line. Pixels falling outside
/// the image are dropped.
fn draw_line(
    img: &mut DynamicImage,
    handle: &FontHandle,
    anchor: (i32, i32),
    fill: Rgba<u8>,
    text: &str,
) {
    let scale = handle.scale();
    let ascent = handle.font.v_metrics(scale).ascent;
    let start = point(anchor.0 as f32, anchor.1 as f32 + ascent);
    let (width, height) = img.dimensions();

    for glyph in handle.font.layout(text, scale, start) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if coverage <= 0.0 || x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                return;
            }
            let blended = blend(img.get_pixel(x as u32, y as u32), fill, coverage);
            img.put_pixel(x as u32, y as u32, blended);
        });
    }
}

/// Source-over blend of `fill` onto `dst` at the glyph's coverage.
fn blend(dst: Rgba<u8>, fill: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let a = coverage.clamp(0.0, 1.0);
    let inv = 1.0 - a;
    let channel = |f: u8, d: u8| (f32::from(f) * a + f32::from(d) * inv).round() as u8;
    Rgba([
        channel(fill[0], dst[0]),
        channel(fill[1], dst[1]),
        channel(fill[2], dst[2]),
        (255.0 * a + f32::from(dst[3]) * inv).round() as u8,
    ])
}
