use super::{
    ParseError,
    fields::{dimension, optional_str},
};
use crate::{models::Embed, node::ContentNode};

/// Parses an oEmbed object into an [`Embed`].
///
/// Width and height only count when numeric: providers such as SoundCloud
/// send `"100%"`, which parses as absent rather than as zero.
pub fn parse_oembed(oembed: &ContentNode) -> Result<Embed, ParseError> {
    if oembed.as_object().is_none() {
        return Err(ParseError::malformed("Embed", "oembed must be an object"));
    }

    Ok(Embed {
        provider: optional_str(oembed, "provider_name"),
        kind: optional_str(oembed, "type").unwrap_or_default(),
        url: optional_str(oembed, "embed_url").unwrap_or_default(),
        width: dimension(oembed.get("width")),
        height: dimension(oembed.get("height")),
        html: optional_str(oembed, "html"),
        oembed: oembed.clone(),
    })
}

/// Parses an embed fragment value or embed block, both of which wrap the
/// payload in an `oembed` key.
pub fn parse_embed(node: &ContentNode) -> Result<Embed, ParseError> {
    node.get("oembed")
        .ok_or_else(|| ParseError::malformed("Embed", "missing `oembed`"))
        .and_then(parse_oembed)
}
