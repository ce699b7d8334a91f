use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::{
    embed::Embed,
    fragment::{Fragment, GeoPoint},
    group::Group,
    image::{Image, View},
    link::{DocumentLink, Link},
    structured_text::StructuredText,
};
use crate::{node::ContentNode, render, resolver::LinkResolver};

/// Field-key → fragment mapping that keeps insertion order.
///
/// Keys are unique: inserting an existing key replaces its fragment in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragments {
    entries: Vec<(String, Fragment)>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, fragment: Fragment) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((key, fragment)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Fragment> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fragment)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Fragment)> for Fragments {
    fn from_iter<I: IntoIterator<Item = (String, Fragment)>>(iter: I) -> Self {
        let mut fragments = Fragments::new();
        for (key, fragment) in iter {
            fragments.insert(key, fragment);
        }
        fragments
    }
}

/// Typed access to a container of fragments.
///
/// Every getter returns `None` when the field is missing or holds a
/// different variant.
pub trait WithFragments {
    fn fragments(&self) -> &Fragments;

    fn get(&self, field: &str) -> Option<&Fragment> {
        self.fragments().get(field)
    }

    /// Plain text of a text-like field (Text, Select, Number, Color, Date,
    /// Timestamp, or StructuredText joined by newlines).
    fn get_text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(Fragment::as_text)
    }

    fn get_number(&self, field: &str) -> Option<Decimal> {
        match self.get(field)? {
            Fragment::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn get_date(&self, field: &str) -> Option<NaiveDate> {
        match self.get(field)? {
            Fragment::Date(d) => Some(*d),
            _ => None,
        }
    }

    fn get_timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.get(field)? {
            Fragment::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    fn get_color(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            Fragment::Color(c) => Some(c),
            _ => None,
        }
    }

    fn get_select(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            Fragment::Select(s) => Some(s),
            _ => None,
        }
    }

    fn get_geo_point(&self, field: &str) -> Option<GeoPoint> {
        match self.get(field)? {
            Fragment::GeoPoint(p) => Some(*p),
            _ => None,
        }
    }

    fn get_link(&self, field: &str) -> Option<&Link> {
        match self.get(field)? {
            Fragment::Link(l) => Some(l),
            _ => None,
        }
    }

    fn get_image(&self, field: &str) -> Option<&Image> {
        match self.get(field)? {
            Fragment::Image(i) => Some(i),
            _ => None,
        }
    }

    /// A named view of an image field; `"main"` selects the main view.
    fn get_image_view(&self, field: &str, view: &str) -> Option<&View> {
        self.get_image(field)?.view(view)
    }

    fn get_structured_text(&self, field: &str) -> Option<&StructuredText> {
        match self.get(field)? {
            Fragment::StructuredText(st) => Some(st),
            _ => None,
        }
    }

    fn get_group(&self, field: &str) -> Option<&Group> {
        match self.get(field)? {
            Fragment::Group(g) => Some(g),
            _ => None,
        }
    }

    fn get_embed(&self, field: &str) -> Option<&Embed> {
        match self.get(field)? {
            Fragment::Embed(e) => Some(e),
            _ => None,
        }
    }

    fn get_raw(&self, field: &str) -> Option<&ContentNode> {
        match self.get(field)? {
            Fragment::Raw(node) => Some(node),
            _ => None,
        }
    }

    /// HTML for a single field.
    fn get_html(&self, field: &str, resolver: &dyn LinkResolver) -> Option<String> {
        self.get(field).map(|f| render::fragment_html(f, resolver))
    }

    /// Every field wrapped in `<section data-field="…">`, in field order.
    fn as_html(&self, resolver: &dyn LinkResolver) -> String {
        render::sections_html(self.fragments(), resolver)
    }
}

/// A document returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub uid: Option<String>,
    pub doc_type: String,
    pub href: Option<String>,
    pub tags: BTreeSet<String>,
    pub slugs: Vec<String>,
    pub lang: Option<String>,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub last_publication_date: Option<DateTime<Utc>>,
    /// Keyed by `"<type>.<field>"`.
    pub fragments: Fragments,
}

impl Document {
    /// The current slug, or `"-"` when the document has none.
    pub fn slug(&self) -> &str {
        self.slugs.first().map(String::as_str).unwrap_or("-")
    }

    /// A link pointing at this document, suitable for a [`LinkResolver`].
    pub fn as_link(&self) -> DocumentLink {
        DocumentLink {
            id: self.id.clone(),
            uid: self.uid.clone(),
            doc_type: self.doc_type.clone(),
            tags: self.tags.iter().cloned().collect(),
            slug: self.slug().to_string(),
            lang: self.lang.clone(),
            is_broken: false,
        }
    }

    /// Fully qualified key for one of this document's fields.
    pub fn field_key(&self, field: &str) -> String {
        format!("{}.{}", self.doc_type, field)
    }
}

impl WithFragments for Document {
    fn fragments(&self) -> &Fragments {
        &self.fragments
    }
}
