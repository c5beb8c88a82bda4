//! Rendering helpers for handing pages to presentation.
//!
//! Turning content into visuals is the presentation layer's job; these
//! helpers only classify content into display blocks and export page lists
//! as text or JSON.

mod blocks;
mod json;
mod options;
mod text;

pub use blocks::{page_blocks, DisplayBlock};
pub use json::{to_json, JsonFormat};
pub use options::{PageSelection, TextOptions};
pub use text::to_text;
