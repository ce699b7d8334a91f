use super::{
    ParseError,
    fields::{Container, optional_str, parse_fields},
    scalars::timestamp_from_str,
};
use crate::{
    models::{Document, Fragments},
    node::ContentNode,
};

impl Document {
    /// Parses a document node as returned in an API results page.
    ///
    /// `id` and `type` are required. Fields live under `data.<type>`; each one
    /// that fails to parse is dropped and logged without failing the document.
    pub fn parse(node: &ContentNode) -> Result<Self, ParseError> {
        let required = |key: &str| {
            node.get(key)
                .and_then(ContentNode::as_str)
                .map(str::to_string)
                .ok_or_else(|| ParseError::MalformedDocument(format!("missing `{key}`")))
        };
        let id = required("id")?;
        let doc_type = required("type")?;

        let fragments = node
            .path(&["data", doc_type.as_str()])
            .map(|data| {
                parse_fields(
                    data,
                    Container::Document {
                        doc_type: &doc_type,
                    },
                )
            })
            .unwrap_or_else(Fragments::new);

        Ok(Document {
            uid: optional_str(node, "uid"),
            href: optional_str(node, "href"),
            tags: node
                .get("tags")
                .map(ContentNode::string_items)
                .unwrap_or_default()
                .into_iter()
                .collect(),
            slugs: node
                .get("slugs")
                .map(ContentNode::string_items)
                .unwrap_or_default(),
            lang: optional_str(node, "lang"),
            first_publication_date: publication_date(node, "first_publication_date"),
            last_publication_date: publication_date(node, "last_publication_date"),
            fragments,
            id,
            doc_type,
        })
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let node = ContentNode::from_json_str(json)?;
        Self::parse(&node)
    }
}

fn publication_date(node: &ContentNode, key: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let raw = node.get(key)?.as_str()?;
    timestamp_from_str(raw)
        .inspect_err(|e| log::debug!("Ignoring {key}: {e}"))
        .ok()
}
