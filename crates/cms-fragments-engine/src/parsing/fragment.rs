use super::{
    ParseError,
    embed::parse_embed,
    fields::{Container, parse_fields},
    image::parse_image,
    link::{looks_like_link, parse_link},
    scalars::{
        parse_color, parse_date, parse_geo_point, parse_number, parse_string, parse_timestamp,
    },
    structured_text::parse_structured_text,
};
use crate::{
    models::{Fragment, Group, GroupDoc},
    node::ContentNode,
};

/// Parses one document field into a [`Fragment`].
///
/// The node's own `type` selects the variant; `type_hint` is used when the
/// node has none. Without either, a value shaped like a link parses as a
/// link and anything else is kept whole as [`Fragment::Raw`]. A field of
/// unknown type keeps only its `value` as `Raw`.
pub fn parse_fragment(node: &ContentNode, type_hint: Option<&str>) -> Result<Fragment, ParseError> {
    let declared = node
        .get("type")
        .and_then(ContentNode::as_str)
        .or(type_hint);
    let value = node.get("value").unwrap_or(node);

    let Some(declared) = declared else {
        if looks_like_link(value) {
            return parse_link("Link", value).map(Fragment::Link);
        }
        log::debug!("Field without a type kept as raw content");
        return Ok(Fragment::Raw(node.clone()));
    };

    match declared {
        "StructuredText" => parse_structured_text(value).map(Fragment::StructuredText),
        "Text" => parse_string(value, declared).map(Fragment::Text),
        "Select" => parse_string(value, declared).map(Fragment::Select),
        "Number" => parse_number(value).map(Fragment::Number),
        "Date" => parse_date(value).map(Fragment::Date),
        "Timestamp" => parse_timestamp(value).map(Fragment::Timestamp),
        "Color" => parse_color(value).map(Fragment::Color),
        "GeoPoint" => parse_geo_point(value).map(Fragment::GeoPoint),
        "Embed" => parse_embed(value).map(Fragment::Embed),
        "Image" => parse_image(value).map(Fragment::Image),
        "Group" => parse_group(value).map(Fragment::Group),
        link if link == "Link" || link.starts_with("Link.") => {
            parse_link(link, value).map(Fragment::Link)
        }
        other => {
            log::debug!("Unknown fragment type {other} kept as raw content");
            Ok(Fragment::Raw(value.clone()))
        }
    }
}

/// Parses a group value: an array of objects, each holding its own fields.
fn parse_group(value: &ContentNode) -> Result<Group, ParseError> {
    let items = value
        .as_array()
        .ok_or_else(|| ParseError::malformed("Group", "expected an array of group entries"))?;

    Ok(Group::new(
        items
            .iter()
            .map(|item| GroupDoc::new(parse_fields(item, Container::GroupDoc)))
            .collect(),
    ))
}
