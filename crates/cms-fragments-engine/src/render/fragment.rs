use super::{
    blocks::{block_html, embed_html, render_blocks},
    escape::{escape, push_attr},
    image::view_html,
};
use crate::{
    models::{Block, Embed, Fragment, Fragments, Link, StructuredText, View},
    resolver::LinkResolver,
};

/// Renders one fragment. Raw fragments have no HTML form and render empty.
pub fn fragment_html(fragment: &Fragment, resolver: &dyn LinkResolver) -> String {
    match fragment {
        Fragment::Text(s) | Fragment::Select(s) => classed_span("text", s),
        Fragment::Number(n) => classed_span("number", &n.to_string()),
        Fragment::Color(c) => classed_span("color", c),
        Fragment::Date(d) => format!("<time>{}</time>", d.format("%Y-%m-%d")),
        Fragment::Timestamp(ts) => format!("<time>{}</time>", ts.to_rfc3339()),
        Fragment::GeoPoint(p) => format!(
            r#"<div class="geopoint"><span class="latitude">{}</span><span class="longitude">{}</span></div>"#,
            p.latitude, p.longitude
        ),
        Fragment::Embed(embed) => embed_html(embed),
        Fragment::Link(link) => link_html(link, resolver),
        Fragment::Image(image) => view_html(&image.main),
        Fragment::Group(group) => group
            .iter()
            .map(|doc| sections_html(&doc.fragments, resolver))
            .collect(),
        Fragment::StructuredText(st) => render_blocks(&st.blocks, resolver),
        Fragment::Raw(_) => String::new(),
    }
}

/// `<a href="…">label</a>`, where the label is the slug, the file name or
/// the URL depending on the kind of link.
pub fn link_html(link: &Link, resolver: &dyn LinkResolver) -> String {
    let mut html = String::from("<a");
    push_attr(&mut html, "href", &link.url(resolver));
    html.push('>');
    html.push_str(&escape(link.label()));
    html.push_str("</a>");
    html
}

/// Every fragment wrapped in `<section data-field="key">`, in field order.
pub fn sections_html(fragments: &Fragments, resolver: &dyn LinkResolver) -> String {
    let mut html = String::new();
    for (key, fragment) in fragments.iter() {
        html.push_str("<section");
        push_attr(&mut html, "data-field", key);
        html.push('>');
        html.push_str(&fragment_html(fragment, resolver));
        html.push_str("</section>");
    }
    html
}

fn classed_span(class: &str, text: &str) -> String {
    format!(r#"<span class="{class}">{}</span>"#, escape(text))
}

impl Fragment {
    pub fn as_html(&self, resolver: &dyn LinkResolver) -> String {
        fragment_html(self, resolver)
    }
}

impl StructuredText {
    pub fn as_html(&self, resolver: &dyn LinkResolver) -> String {
        render_blocks(&self.blocks, resolver)
    }
}

impl Block {
    pub fn as_html(&self, resolver: &dyn LinkResolver) -> String {
        block_html(self, resolver)
    }
}

impl Link {
    pub fn as_html(&self, resolver: &dyn LinkResolver) -> String {
        link_html(self, resolver)
    }
}

impl View {
    pub fn as_html(&self) -> String {
        view_html(self)
    }
}

impl Embed {
    pub fn as_html(&self) -> String {
        embed_html(self)
    }
}
