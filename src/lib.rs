//! CoverForge Core - Blog Graphic Composer
//!
//! # The Four Rules (Non-Negotiable)
//! 1. Base Images Are Never Mutated
//! 2. Listings Reflect The Disk, Unsorted
//! 3. Selection Errors End The Run
//! 4. Composition Failures Are Reported, Never Raised

pub mod catalog;
pub mod composer;
pub mod fonts;
pub mod logging;
pub mod workflow;

pub use catalog::{list_fonts, list_images, AssetKind, CatalogError};
pub use composer::{anchors, Anchors, ComposeError, Composer, GraphicRequest};
pub use fonts::{load_font, FontError, FontHandle, TextRole};
pub use workflow::{parse_selection, Locations, SelectionError, WorkflowOutcome};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
