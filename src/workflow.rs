//! Interactive Workflow - Strictly Forward, One Pass
//!
//! List images, collect the text, list fonts, resolve one font per role,
//! compose. Selection errors end the run; there are no retry loops and no
//! way back to an earlier step.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::catalog;
use crate::composer::{Composer, GraphicRequest};
use crate::fonts::{self, FontHandle, TextRole};

/// Default images location, relative to the working directory.
pub const DEFAULT_IMAGES_DIR: &str = "images";
/// Default fonts location.
pub const DEFAULT_FONTS_DIR: &str = "fonts";
/// Default output location, created on demand.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// The three filesystem locations one run works against.
#[derive(Debug, Clone)]
pub struct Locations {
    pub images_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Locations {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            fonts_dir: PathBuf::from(DEFAULT_FONTS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The images location could not be listed.
    MissingImages,
    /// The image selection was rejected.
    InvalidImageChoice,
    /// The fonts location could not be listed.
    MissingFonts,
    /// A font selection was rejected or failed to load.
    InvalidFontSelection,
    /// Composition was attempted; `saved` says whether an artifact exists.
    Finished { saved: bool },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Selection '{0}' is not a number")]
    NotANumber(String),

    #[error("Choice {choice} is outside 1..={count}")]
    OutOfRange { choice: i64, count: usize },
}

/// Parse a 1-based menu selection against `count` entries, returning the
/// zero-based index. Surrounding whitespace is tolerated; anything short of
/// a plain integer is not.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if choice < 1 || choice as u64 > count as u64 {
        return Err(SelectionError::OutOfRange { choice, count });
    }
    Ok((choice - 1) as usize)
}

/// Drive one interactive run end to end.
///
/// Prompts go to `out`, answers come from `input`. An `Err` here means the
/// conversation itself broke (closed stdin, IO failure); every domain
/// failure is reported on `out` and folded into the returned outcome.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    locations: &Locations,
) -> io::Result<WorkflowOutcome> {
    writeln!(out, "Welcome to the Blog Graphics Generator!")?;

    let images = match catalog::list_images(&locations.images_dir) {
        Ok(images) => images,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(WorkflowOutcome::MissingImages);
        }
    };
    writeln!(out, "Available images:")?;
    for (i, name) in images.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }

    let choice = prompt(input, out, "Select an image by number: ")?;
    let base_image = match parse_selection(&choice, images.len()) {
        Ok(index) => images[index].clone(),
        Err(err @ SelectionError::NotANumber(_)) => {
            writeln!(out, "{err}. Exiting.")?;
            return Ok(WorkflowOutcome::InvalidImageChoice);
        }
        Err(SelectionError::OutOfRange { .. }) => {
            writeln!(out, "Invalid choice. Exiting.")?;
            return Ok(WorkflowOutcome::InvalidImageChoice);
        }
    };
    debug!(%base_image, "base image selected");

    let title = prompt(input, out, "Enter the title text: ")?;
    let subtitle = prompt(input, out, "Enter the subtitle text: ")?;
    let author = prompt(input, out, "Enter the author name: ")?;

    let fonts = match catalog::list_fonts(&locations.fonts_dir) {
        Ok(fonts) => fonts,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(WorkflowOutcome::MissingFonts);
        }
    };
    writeln!(out, "Available fonts:")?;
    for (i, name) in fonts.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, name)?;
    }

    let Some(title_font) = select_font(input, out, &fonts, locations, TextRole::Title)? else {
        return invalid_font_selection(out);
    };
    let Some(subtitle_font) = select_font(input, out, &fonts, locations, TextRole::Subtitle)?
    else {
        return invalid_font_selection(out);
    };
    let Some(author_font) = select_font(input, out, &fonts, locations, TextRole::Author)? else {
        return invalid_font_selection(out);
    };

    let output_name = prompt(
        input,
        out,
        "Enter the output file name (with extension, e.g., graphic.png): ",
    )?;

    let request = GraphicRequest {
        base_image,
        output_name,
        title,
        subtitle,
        author,
        title_font,
        subtitle_font,
        author_font,
    };

    let composer = Composer::new(&locations.images_dir, &locations.output_dir);
    match composer.compose(&request) {
        Ok(path) => {
            info!(path = %path.display(), "graphic saved");
            writeln!(out, "Graphic saved at {}", path.display())?;
            Ok(WorkflowOutcome::Finished { saved: true })
        }
        Err(err) => {
            error!(%err, "composition failed");
            writeln!(out, "Error creating graphic: {err}")?;
            Ok(WorkflowOutcome::Finished { saved: false })
        }
    }
}

/// Resolve one role's font. Both a bad selection and an unloadable font
/// collapse to `None`; the caller prints the single exit message.
fn select_font<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    fonts: &[String],
    locations: &Locations,
    role: TextRole,
) -> io::Result<Option<FontHandle>> {
    let label = format!("Select a font for the {role} by number: ");
    let choice = prompt(input, out, &label)?;
    let index = match parse_selection(&choice, fonts.len()) {
        Ok(index) => index,
        Err(err) => {
            debug!(%role, %err, "font selection rejected");
            return Ok(None);
        }
    };
    match fonts::load_font(&locations.fonts_dir, &fonts[index], role.point_size()) {
        Ok(handle) => Ok(Some(handle)),
        Err(err) => {
            debug!(%role, %err, "font failed to load");
            Ok(None)
        }
    }
}

fn invalid_font_selection<W: Write>(out: &mut W) -> io::Result<WorkflowOutcome> {
    writeln!(out, "Invalid font selection. Exiting.")?;
    Ok(WorkflowOutcome::InvalidFontSelection)
}

/// Print `label` without a newline and read one answer line. Only the line
/// terminator is stripped; interior and leading whitespace survive.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the workflow finished",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
