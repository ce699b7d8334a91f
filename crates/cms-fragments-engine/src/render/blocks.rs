use super::{
    escape::{push_attr, push_class},
    image::view_html,
    spans::render_spans,
};
use crate::{
    models::{Block, Embed, TextBlock},
    resolver::LinkResolver,
};

/// Renders structured-text blocks in order.
///
/// Runs of list items with the same `ordered` flag share one `<ul>` or
/// `<ol>`; any other block, or a change of flag, closes the list.
pub fn render_blocks(blocks: &[Block], resolver: &dyn LinkResolver) -> String {
    let mut html = String::new();
    let mut list: Option<bool> = None;

    for block in blocks {
        let item_kind = match block {
            Block::ListItem { ordered, .. } => Some(*ordered),
            _ => None,
        };
        if list != item_kind {
            if let Some(ordered) = list {
                html.push_str(list_tag(ordered).1);
            }
            if let Some(ordered) = item_kind {
                html.push_str(list_tag(ordered).0);
            }
            list = item_kind;
        }
        html.push_str(&block_html(block, resolver));
    }

    if let Some(ordered) = list {
        html.push_str(list_tag(ordered).1);
    }
    html
}

fn list_tag(ordered: bool) -> (&'static str, &'static str) {
    if ordered {
        ("<ol>", "</ol>")
    } else {
        ("<ul>", "</ul>")
    }
}

/// Renders a single block. List items render as a bare `<li>`; the list
/// wrapper belongs to [`render_blocks`].
pub fn block_html(block: &Block, resolver: &dyn LinkResolver) -> String {
    match block {
        Block::Heading { level, content } => {
            text_element(&format!("h{}", (*level).clamp(1, 6)), content, resolver)
        }
        Block::Paragraph(content) => text_element("p", content, resolver),
        Block::Preformatted(content) => text_element("pre", content, resolver),
        Block::ListItem { content, .. } => text_element("li", content, resolver),
        Block::Image { view, link, label } => {
            let img = view_html(view);
            let inner = match link {
                Some(link) => {
                    let mut a = String::from("<a");
                    push_attr(&mut a, "href", &link.url(resolver));
                    a.push('>');
                    a.push_str(&img);
                    a.push_str("</a>");
                    a
                }
                None => img,
            };
            match label {
                Some(_) => {
                    let mut html = String::from("<p");
                    push_class(&mut html, label.as_deref());
                    html.push('>');
                    html.push_str(&inner);
                    html.push_str("</p>");
                    html
                }
                None => inner,
            }
        }
        Block::Embed(embed) => embed_html(embed),
    }
}

fn text_element(tag: &str, content: &TextBlock, resolver: &dyn LinkResolver) -> String {
    let mut html = format!("<{tag}");
    push_class(&mut html, content.label.as_deref());
    html.push('>');
    html.push_str(&render_spans(&content.text, &content.spans, resolver));
    html.push_str(&format!("</{tag}>"));
    html
}

/// `<div data-oembed=… data-oembed-type=… data-oembed-provider=…>` around the
/// provider's markup, which is emitted as-is.
pub fn embed_html(embed: &Embed) -> String {
    let mut html = String::from("<div");
    push_attr(&mut html, "data-oembed", &embed.url);
    push_attr(&mut html, "data-oembed-type", &embed.kind);
    if let Some(provider) = &embed.provider {
        push_attr(&mut html, "data-oembed-provider", provider);
    }
    html.push('>');
    html.push_str(embed.html.as_deref().unwrap_or_default());
    html.push_str("</div>");
    html
}
