use crate::{models::Fragments, node::ContentNode};

use super::{ParseError, fragment::parse_fragment};

/// What a set of fields belongs to. Decides how field keys are qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container<'a> {
    /// Top-level document fields, keyed `"<type>.<field>"`.
    Document { doc_type: &'a str },
    /// Fields of one group entry, keyed by bare field name.
    GroupDoc,
}

impl Container<'_> {
    pub fn key(&self, field: &str) -> String {
        match self {
            Container::Document { doc_type } => format!("{doc_type}.{field}"),
            Container::GroupDoc => field.to_string(),
        }
    }
}

/// Parses every field of an object node into fragments.
///
/// A field that fails to parse is logged and left out; the remaining fields
/// still parse. A non-object node yields no fields.
pub fn parse_fields(node: &ContentNode, container: Container<'_>) -> Fragments {
    let Some(entries) = node.as_object() else {
        log::debug!("expected an object of fields for {container:?}, got something else");
        return Fragments::new();
    };

    entries
        .iter()
        .filter_map(|(field, value)| {
            let key = container.key(field);
            match parse_fragment(value, None) {
                Ok(fragment) => Some((key, fragment)),
                Err(e) => {
                    log::warn!("Dropping field {key}: {e}");
                    None
                }
            }
        })
        .collect()
}

// Small readers shared by the fragment parsers.

pub(crate) fn required_str(node: &ContentNode, key: &str, kind: &str) -> Result<String, ParseError> {
    node.get(key)
        .and_then(ContentNode::as_str)
        .map(str::to_string)
        .ok_or_else(|| ParseError::malformed(kind, format!("missing string `{key}`")))
}

pub(crate) fn optional_str(node: &ContentNode, key: &str) -> Option<String> {
    node.get(key)
        .and_then(ContentNode::as_str)
        .map(str::to_string)
}

/// A positive pixel dimension from a number or numeric string.
pub(crate) fn dimension(node: Option<&ContentNode>) -> Option<u32> {
    node.and_then(ContentNode::as_u64_lenient)
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fragment, GroupDoc, WithFragments};

    #[test]
    fn document_keys_are_qualified() {
        assert_eq!(
            Container::Document { doc_type: "article" }.key("title"),
            "article.title"
        );
        assert_eq!(Container::GroupDoc.key("title"), "title");
    }

    #[test]
    fn bad_fields_are_dropped_without_losing_the_rest() {
        let node = ContentNode::from_json_str(
            r#"{
                "title": {"type": "Text", "value": "Hello"},
                "color": {"type": "Color", "value": "not a color"},
                "link": {"type": "Link.document", "value": {}},
                "count": {"type": "Number", "value": 3}
            }"#,
        )
        .unwrap();

        let fragments = parse_fields(&node, Container::GroupDoc);
        assert_eq!(fragments.keys().collect::<Vec<_>>(), vec!["title", "count"]);

        let doc = GroupDoc::new(fragments);
        assert_eq!(doc.get("title"), Some(&Fragment::Text("Hello".into())));
        assert!(doc.get("color").is_none());
    }

    #[test]
    fn non_object_yields_no_fields() {
        let node = ContentNode::from_json_str("[1, 2]").unwrap();
        assert!(parse_fields(&node, Container::GroupDoc).is_empty());
    }

    #[test]
    fn dimensions_must_be_positive() {
        let node = ContentNode::from_json_str(r#"{"a": 0, "b": "640", "c": "100%"}"#).unwrap();
        assert_eq!(dimension(node.get("a")), None);
        assert_eq!(dimension(node.get("b")), Some(640));
        assert_eq!(dimension(node.get("c")), None);
        assert_eq!(dimension(None), None);
    }
}
