pub mod document;
pub mod embed;
pub mod fragment;
pub mod group;
pub mod image;
pub mod link;
pub mod structured_text;

pub use document::{Document, Fragments, WithFragments};
pub use embed::Embed;
pub use fragment::{Fragment, GeoPoint};
pub use group::{Group, GroupDoc};
pub use image::{Image, View};
pub use link::{DocumentLink, FileLink, ImageLink, Link, WebLink};
pub use structured_text::{Block, Span, SpanKind, StructuredText, TextBlock};
