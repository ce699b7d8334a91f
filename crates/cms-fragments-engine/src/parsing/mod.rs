//! # Fragment Parsing
//!
//! Turns an untyped [`ContentNode`](crate::node::ContentNode) tree into typed
//! [`Fragment`](crate::models::Fragment)s.
//!
//! ## Dispatch
//!
//! Each document field is an object `{"type": ..., "value": ...}`. The `type`
//! string selects the variant. Fields without one are sniffed by shape (link
//! values carry a `document`, `web`, `file` or `image` key), and unknown types
//! are kept as `Raw` so new content types never break parsing.
//!
//! ## Modules
//!
//! - **`fields`**: `parse_fields`, the one entry point for a set of fields,
//!   shared by documents and group entries via `Container`
//! - **`fragment`**: `parse_fragment` dispatch, plus groups
//! - **`scalars`**: Text, Number, Date, Timestamp, Color, Select, GeoPoint
//! - **`link`**, **`image`**, **`embed`**: the structured fragment kinds
//! - **`structured_text`**: blocks and span annotations
//! - **`document`**: `Document::parse` for whole API documents
//!
//! ## Failure policy
//!
//! - A field that fails to parse is dropped (logged at `warn`); the document
//!   still parses
//! - Span offsets outside the text are clipped, never rejected
//! - Unknown block and span types are skipped

pub mod document;
pub mod embed;
pub mod error;
pub mod fields;
pub mod fragment;
pub mod image;
pub mod link;
pub mod scalars;
pub mod structured_text;

pub use error::ParseError;
pub use fields::{Container, parse_fields};
pub use fragment::parse_fragment;
pub use link::{parse_link, parse_link_node};
pub use structured_text::{parse_block, parse_spans, parse_structured_text};
