use super::{
    ParseError,
    fields::{dimension, optional_str, required_str},
};
use crate::{
    models::{DocumentLink, FileLink, ImageLink, Link, WebLink},
    node::ContentNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkKind {
    Document,
    Web,
    File,
    Image,
}

impl LinkKind {
    fn from_type(declared: &str) -> Option<Self> {
        match declared {
            "Link.document" => Some(LinkKind::Document),
            "Link.web" => Some(LinkKind::Web),
            "Link.file" => Some(LinkKind::File),
            "Link.image" => Some(LinkKind::Image),
            _ => None,
        }
    }

    /// Picks a sub-kind from the keys present in a link value.
    fn sniff(value: &ContentNode) -> Option<Self> {
        [
            ("document", LinkKind::Document),
            ("web", LinkKind::Web),
            ("file", LinkKind::File),
            ("image", LinkKind::Image),
        ]
        .into_iter()
        .find(|(key, _)| value.get(key).is_some())
        .map(|(_, kind)| kind)
    }
}

/// Whether a value has the shape of a link, for fields with no declared type.
pub(crate) fn looks_like_link(value: &ContentNode) -> bool {
    LinkKind::sniff(value).is_some()
}

/// Parses the value of a link fragment.
///
/// `declared` is the fragment type (`Link.document`, `Link.web`, ...). The
/// generic `Link` type, or an unfamiliar `Link.*` one, falls back to the keys
/// of `value`; a value with none of them is malformed.
pub fn parse_link(declared: &str, value: &ContentNode) -> Result<Link, ParseError> {
    let kind = LinkKind::from_type(declared)
        .or_else(|| LinkKind::sniff(value))
        .ok_or_else(|| ParseError::malformed(declared, "no recognisable link kind"))?;

    match kind {
        LinkKind::Document => parse_document_link(value).map(Link::Document),
        LinkKind::Web => parse_web_link(value).map(Link::Web),
        LinkKind::File => parse_file_link(value).map(Link::File),
        LinkKind::Image => parse_image_link(value).map(Link::Image),
    }
}

/// Parses a complete link node (`{"type": ..., "value": ...}`), as found in
/// hyperlink spans and image `linkTo` properties.
pub fn parse_link_node(node: &ContentNode) -> Result<Link, ParseError> {
    let declared = node
        .get("type")
        .and_then(ContentNode::as_str)
        .unwrap_or("Link");
    let value = node.get("value").unwrap_or(node);
    parse_link(declared, value)
}

fn parse_document_link(value: &ContentNode) -> Result<DocumentLink, ParseError> {
    const KIND: &str = "Link.document";
    let doc = value
        .get("document")
        .filter(|d| d.as_object().is_some())
        .ok_or_else(|| ParseError::malformed(KIND, "missing `document`"))?;

    Ok(DocumentLink {
        id: required_str(doc, "id", KIND)?,
        uid: optional_str(doc, "uid"),
        doc_type: required_str(doc, "type", KIND)?,
        tags: doc.get("tags").map(ContentNode::string_items).unwrap_or_default(),
        slug: optional_str(doc, "slug").unwrap_or_default(),
        lang: optional_str(doc, "lang"),
        is_broken: value
            .get("isBroken")
            .and_then(ContentNode::as_bool)
            .unwrap_or(false),
    })
}

fn parse_web_link(value: &ContentNode) -> Result<WebLink, ParseError> {
    const KIND: &str = "Link.web";
    let web = value.get("web").unwrap_or(value);
    Ok(WebLink {
        url: required_str(web, "url", KIND)?,
        content_type: optional_str(web, "content_type"),
    })
}

fn parse_file_link(value: &ContentNode) -> Result<FileLink, ParseError> {
    const KIND: &str = "Link.file";
    let file = value
        .get("file")
        .ok_or_else(|| ParseError::malformed(KIND, "missing `file`"))?;
    Ok(FileLink {
        url: required_str(file, "url", KIND)?,
        kind: optional_str(file, "kind").unwrap_or_default(),
        size: file
            .get("size")
            .and_then(ContentNode::as_u64_lenient)
            .unwrap_or(0),
        filename: optional_str(file, "name").unwrap_or_default(),
    })
}

fn parse_image_link(value: &ContentNode) -> Result<ImageLink, ParseError> {
    const KIND: &str = "Link.image";
    let image = value
        .get("image")
        .ok_or_else(|| ParseError::malformed(KIND, "missing `image`"))?;
    Ok(ImageLink {
        url: required_str(image, "url", KIND)?,
        width: dimension(image.get("width")),
        height: dimension(image.get("height")),
    })
}
