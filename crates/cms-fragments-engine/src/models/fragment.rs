use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::{
    embed::Embed, group::Group, image::Image, link::Link, structured_text::StructuredText,
};
use crate::node::ContentNode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One typed piece of document content.
///
/// The set of variants is closed; content types this model does not know
/// about are kept as [`Fragment::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Number(Decimal),
    /// Always `#` followed by six hex digits.
    Color(String),
    Select(String),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    GeoPoint(GeoPoint),
    Embed(Embed),
    Link(Link),
    Image(Image),
    Group(Group),
    StructuredText(StructuredText),
    /// The field's `value` (or the whole node when the field has no type),
    /// for content types decoded by the caller.
    Raw(ContentNode),
}

impl Fragment {
    /// Name of the variant, as used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Text(_) => "Text",
            Fragment::Number(_) => "Number",
            Fragment::Color(_) => "Color",
            Fragment::Select(_) => "Select",
            Fragment::Date(_) => "Date",
            Fragment::Timestamp(_) => "Timestamp",
            Fragment::GeoPoint(_) => "GeoPoint",
            Fragment::Embed(_) => "Embed",
            Fragment::Link(_) => "Link",
            Fragment::Image(_) => "Image",
            Fragment::Group(_) => "Group",
            Fragment::StructuredText(_) => "StructuredText",
            Fragment::Raw(_) => "Raw",
        }
    }

    /// A plain-text rendition, for fragments that have one.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Fragment::Text(s) | Fragment::Select(s) | Fragment::Color(s) => Some(s.clone()),
            Fragment::Number(n) => Some(n.to_string()),
            Fragment::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Fragment::Timestamp(ts) => Some(ts.to_rfc3339()),
            Fragment::StructuredText(st) => Some(st.as_text()),
            Fragment::GeoPoint(_)
            | Fragment::Embed(_)
            | Fragment::Link(_)
            | Fragment::Image(_)
            | Fragment::Group(_)
            | Fragment::Raw(_) => None,
        }
    }
}
