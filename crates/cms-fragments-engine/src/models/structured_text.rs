use super::{embed::Embed, image::View, link::Link};

/// What a [`Span`] marks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink(Link),
    /// A custom style label, rendered as a `class`.
    Label(String),
}

impl SpanKind {
    /// Opening precedence for spans sharing both boundaries: lower opens
    /// further out.
    pub(crate) fn nesting_rank(&self) -> u8 {
        match self {
            SpanKind::Hyperlink(_) => 0,
            SpanKind::Strong => 1,
            SpanKind::Em => 2,
            SpanKind::Label(_) => 3,
        }
    }
}

/// An annotation over `[start, end)` of a block's text.
///
/// Offsets count UTF-16 code units, matching the API's indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Text plus the spans annotating it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub spans: Vec<Span>,
    pub label: Option<String>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_spans(mut self, spans: Vec<Span>) -> Self {
        self.spans = spans;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, content: TextBlock },
    Paragraph(TextBlock),
    Preformatted(TextBlock),
    ListItem { content: TextBlock, ordered: bool },
    Image {
        view: View,
        link: Option<Link>,
        label: Option<String>,
    },
    Embed(Embed),
}

impl Block {
    /// The inline content of text-bearing blocks.
    pub fn text_block(&self) -> Option<&TextBlock> {
        match self {
            Block::Heading { content, .. }
            | Block::Paragraph(content)
            | Block::Preformatted(content)
            | Block::ListItem { content, .. } => Some(content),
            Block::Image { .. } | Block::Embed(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text_block().map(|b| b.text.as_str())
    }
}

/// Rich text as an ordered, flat sequence of blocks.
///
/// List items stay individual blocks; grouping them into lists happens when
/// rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredText {
    pub blocks: Vec<Block>,
}

impl StructuredText {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// The first heading, whatever its level.
    pub fn title(&self) -> Option<&TextBlock> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { content, .. } => Some(content),
            _ => None,
        })
    }

    pub fn first_paragraph(&self) -> Option<&TextBlock> {
        self.blocks.iter().find_map(|b| match b {
            Block::Paragraph(content) => Some(content),
            _ => None,
        })
    }

    pub fn first_preformatted(&self) -> Option<&TextBlock> {
        self.blocks.iter().find_map(|b| match b {
            Block::Preformatted(content) => Some(content),
            _ => None,
        })
    }

    pub fn first_image(&self) -> Option<&View> {
        self.blocks.iter().find_map(|b| match b {
            Block::Image { view, .. } => Some(view),
            _ => None,
        })
    }

    /// Plain text of all text-bearing blocks, one per line.
    pub fn as_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(Block::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StructuredText {
        StructuredText::new(vec![
            Block::Paragraph(TextBlock::new("intro")),
            Block::Heading {
                level: 2,
                content: TextBlock::new("Sub"),
            },
            Block::Heading {
                level: 1,
                content: TextBlock::new("Main"),
            },
            Block::Preformatted(TextBlock::new("code")),
            Block::Image {
                view: View {
                    url: "a.png".into(),
                    width: None,
                    height: None,
                    alt: None,
                    copyright: None,
                },
                link: None,
                label: None,
            },
        ])
    }

    #[test]
    fn title_is_the_first_heading_in_document_order() {
        assert_eq!(sample().title().unwrap().text, "Sub");
        assert!(StructuredText::new(vec![Block::Paragraph(TextBlock::new("x"))])
            .title()
            .is_none());
    }

    #[test]
    fn first_helpers_find_blocks_by_kind() {
        let st = sample();
        assert_eq!(st.first_paragraph().unwrap().text, "intro");
        assert_eq!(st.first_preformatted().unwrap().text, "code");
        assert_eq!(st.first_image().unwrap().url, "a.png");
    }

    #[test]
    fn as_text_skips_non_text_blocks() {
        assert_eq!(sample().as_text(), "intro\nSub\nMain\ncode");
    }

    #[test]
    fn empty_and_reversed_spans_are_empty() {
        assert!(Span::new(3, 3, SpanKind::Em).is_empty());
        assert!(Span::new(4, 2, SpanKind::Em).is_empty());
        assert!(!Span::new(0, 1, SpanKind::Em).is_empty());
    }
}
