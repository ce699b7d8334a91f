//! # HTML Rendering
//!
//! Pure functions from the typed model to HTML strings. Rendering never
//! fails; document links are turned into URLs by a caller-supplied
//! [`LinkResolver`](crate::resolver::LinkResolver).
//!
//! ## Modules
//!
//! - **`spans`**: inline markup for a text and its span annotations
//! - **`blocks`**: structured-text blocks, with list grouping
//! - **`image`**: `<img>` for an image view
//! - **`fragment`**: any fragment, plus `<section>` wrappers for documents
//!   and group entries
//! - **`escape`**: the single escaping routine every module goes through

pub mod blocks;
pub mod escape;
pub mod fragment;
pub mod image;
pub mod spans;

pub use blocks::{block_html, embed_html, render_blocks};
pub use escape::escape;
pub use fragment::{fragment_html, link_html, sections_html};
pub use image::view_html;
pub use spans::render_spans;
