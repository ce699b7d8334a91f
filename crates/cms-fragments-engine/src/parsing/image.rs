use super::{
    ParseError,
    fields::{dimension, optional_str, required_str},
};
use crate::{
    models::{Image, View},
    node::ContentNode,
};

/// Parses one image view: `{url, alt, copyright, dimensions: {width, height}}`.
pub fn parse_view(node: &ContentNode) -> Result<View, ParseError> {
    let dimensions = node.get("dimensions");
    Ok(View {
        url: required_str(node, "url", "Image")?,
        width: dimension(dimensions.and_then(|d| d.get("width"))),
        height: dimension(dimensions.and_then(|d| d.get("height"))),
        alt: optional_str(node, "alt"),
        copyright: optional_str(node, "copyright"),
    })
}

/// Parses an image fragment value: a required `main` view plus named `views`.
///
/// A named view that fails to parse is skipped; a bad main view fails the
/// whole fragment.
pub fn parse_image(value: &ContentNode) -> Result<Image, ParseError> {
    let main = value
        .get("main")
        .ok_or_else(|| ParseError::malformed("Image", "missing `main` view"))
        .and_then(parse_view)?;

    let views = value
        .get("views")
        .and_then(ContentNode::as_object)
        .unwrap_or_default()
        .iter()
        .filter_map(|(name, node)| match parse_view(node) {
            Ok(view) => Some((name.clone(), view)),
            Err(e) => {
                log::debug!("Skipping image view {name}: {e}");
                None
            }
        })
        .collect();

    Ok(Image { main, views })
}
