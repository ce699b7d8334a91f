use super::{
    ParseError,
    embed::parse_embed,
    fields::optional_str,
    image::parse_view,
    link::parse_link_node,
};
use crate::{
    models::{Block, Span, SpanKind, StructuredText, TextBlock},
    node::ContentNode,
};

/// Parses a structured-text value: an array of block objects.
///
/// Unknown block types and blocks that fail to parse are skipped, so one bad
/// block never hides the rest of the text.
pub fn parse_structured_text(value: &ContentNode) -> Result<StructuredText, ParseError> {
    let items = value
        .as_array()
        .ok_or_else(|| ParseError::malformed("StructuredText", "expected an array of blocks"))?;

    let blocks = items
        .iter()
        .filter_map(|item| match parse_block(item) {
            Ok(block) => block,
            Err(e) => {
                log::debug!("Skipping block: {e}");
                None
            }
        })
        .collect();

    Ok(StructuredText::new(blocks))
}

/// Parses one block. Returns `Ok(None)` for block types this model does not
/// know.
pub fn parse_block(node: &ContentNode) -> Result<Option<Block>, ParseError> {
    let Some(block_type) = node.get("type").and_then(ContentNode::as_str) else {
        return Err(ParseError::malformed("StructuredText", "block without `type`"));
    };

    let block = match block_type {
        "paragraph" => Block::Paragraph(parse_text_block(node)),
        "preformatted" => Block::Preformatted(parse_text_block(node)),
        "list-item" => Block::ListItem {
            content: parse_text_block(node),
            ordered: false,
        },
        "o-list-item" => Block::ListItem {
            content: parse_text_block(node),
            ordered: true,
        },
        "image" => Block::Image {
            view: parse_view(node)?,
            link: parse_image_link(node),
            label: optional_str(node, "label"),
        },
        "embed" => Block::Embed(parse_embed(node)?),
        other => match heading_level(other) {
            Some(level) => Block::Heading {
                level,
                content: parse_text_block(node),
            },
            None => {
                log::debug!("Skipping unknown block type {other}");
                return Ok(None);
            }
        },
    };

    Ok(Some(block))
}

/// `heading1`..`heading6` → 1..6.
fn heading_level(block_type: &str) -> Option<u8> {
    block_type
        .strip_prefix("heading")?
        .parse::<u8>()
        .ok()
        .filter(|level| (1..=6).contains(level))
}

fn parse_image_link(node: &ContentNode) -> Option<crate::models::Link> {
    let link = node.get("linkTo").filter(|l| !l.is_null())?;
    parse_link_node(link)
        .inspect_err(|e| log::debug!("Ignoring image block link: {e}"))
        .ok()
}

fn parse_text_block(node: &ContentNode) -> TextBlock {
    let text = optional_str(node, "text").unwrap_or_default();
    let spans = node
        .get("spans")
        .and_then(ContentNode::as_array)
        .map(|spans| parse_spans(spans, &text))
        .unwrap_or_default();

    TextBlock {
        text,
        spans,
        label: optional_str(node, "label"),
    }
}

/// Parses span annotations for `text`, clipping offsets to the text length.
///
/// Clipped spans are logged rather than rejected, spans left empty by
/// clipping are dropped, and the result is ordered by start offset.
pub fn parse_spans(spans: &[ContentNode], text: &str) -> Vec<Span> {
    let len = text.encode_utf16().count();

    let mut parsed: Vec<Span> = spans
        .iter()
        .filter_map(|node| {
            let kind = parse_span_kind(node)?;
            let start = node.get("start").and_then(ContentNode::as_i64).unwrap_or(0);
            let end = node.get("end").and_then(ContentNode::as_i64).unwrap_or(0);
            let (clipped_start, clipped_end) = (clip(start, len), clip(end, len));

            if i64::try_from(clipped_start) != Ok(start) || i64::try_from(clipped_end) != Ok(end) {
                log::debug!(
                    "Clipped span [{start}, {end}) to [{clipped_start}, {clipped_end}) for text of length {len}"
                );
            }

            let span = Span::new(clipped_start, clipped_end, kind);
            if span.is_empty() {
                log::debug!("Dropping empty span at {clipped_start}");
                return None;
            }
            Some(span)
        })
        .collect();

    parsed.sort_by_key(|span| span.start);
    parsed
}

fn clip(offset: i64, len: usize) -> usize {
    usize::try_from(offset.max(0)).map_or(len, |offset| offset.min(len))
}

fn parse_span_kind(node: &ContentNode) -> Option<SpanKind> {
    match node.get("type").and_then(ContentNode::as_str)? {
        "strong" => Some(SpanKind::Strong),
        "em" => Some(SpanKind::Em),
        "hyperlink" => {
            let data = node.get("data")?;
            parse_link_node(data)
                .inspect_err(|e| log::debug!("Skipping hyperlink span: {e}"))
                .ok()
                .map(SpanKind::Hyperlink)
        }
        "label" => node
            .path(&["data", "label"])
            .and_then(ContentNode::as_str)
            .map(|label| SpanKind::Label(label.to_string())),
        other => {
            log::debug!("Skipping unknown span type {other}");
            None
        }
    }
}
