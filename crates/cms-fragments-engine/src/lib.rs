pub mod models;
pub mod node;
pub mod parsing;
pub mod render;
pub mod resolver;

// Re-export key types for easier usage
pub use models::{
    Block, Document, DocumentLink, Embed, FileLink, Fragment, Fragments, GeoPoint, Group,
    GroupDoc, Image, ImageLink, Link, Span, SpanKind, StructuredText, TextBlock, View, WebLink,
    WithFragments,
};
pub use node::ContentNode;
pub use parsing::ParseError;
pub use resolver::{LinkResolver, TemplateLinkResolver};
