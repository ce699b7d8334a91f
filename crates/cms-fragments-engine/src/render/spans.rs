use std::{cmp::Reverse, collections::BTreeSet};

use super::escape::{escape, push_attr};
use crate::{
    models::{Span, SpanKind},
    resolver::LinkResolver,
};

/// Byte offset of every UTF-16 code unit boundary in a string.
///
/// The second unit of a surrogate pair maps to the end of its character, so
/// an offset landing inside a character never splits it.
struct Utf16Index {
    bytes: Vec<usize>,
}

impl Utf16Index {
    fn new(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        for (at, ch) in text.char_indices() {
            bytes.push(at);
            for _ in 1..ch.len_utf16() {
                bytes.push(at + ch.len_utf8());
            }
        }
        bytes.push(text.len());
        Self { bytes }
    }

    /// Length of the text in UTF-16 code units.
    fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    fn slice<'t>(&self, text: &'t str, start: usize, end: usize) -> &'t str {
        &text[self.bytes[start]..self.bytes[end]]
    }
}

/// A span clipped to the text, with its markup prepared.
struct Marked<'s> {
    start: usize,
    end: usize,
    kind: &'s SpanKind,
    open: String,
    close: &'static str,
}

impl Marked<'_> {
    /// Order in which spans are (re)opened: outermost first.
    fn nesting_key(&self) -> (Reverse<usize>, u8) {
        (Reverse(self.end), self.kind.nesting_rank())
    }
}

fn tags(kind: &SpanKind, resolver: &dyn LinkResolver) -> (String, &'static str) {
    match kind {
        SpanKind::Strong => ("<strong>".to_string(), "</strong>"),
        SpanKind::Em => ("<em>".to_string(), "</em>"),
        SpanKind::Hyperlink(link) => {
            let mut open = String::from("<a");
            push_attr(&mut open, "href", &link.url(resolver));
            open.push('>');
            (open, "</a>")
        }
        SpanKind::Label(label) => {
            let mut open = String::from("<span");
            push_attr(&mut open, "class", label);
            open.push('>');
            (open, "</span>")
        }
    }
}

/// Renders text annotated by spans as nested inline HTML.
///
/// Works as a sweep over span boundaries:
///
/// 1. Every span start and end, plus `0` and the text length, is a cut point.
/// 2. At each cut, spans starting there open, longest first; spans sharing
///    both ends open Hyperlink, Strong, Em, Label from the outside in.
/// 3. The text up to the next cut is emitted, escaped.
/// 4. Spans ending at that cut close. Any span opened inside one of them
///    and still running is closed with it and reopened straight after, so
///    the output is always properly nested.
///
/// Offsets beyond the text are clipped and empty spans emit nothing. The
/// resolver is called once per document hyperlink, in order of position,
/// even when the link has to be reopened.
pub fn render_spans(text: &str, spans: &[Span], resolver: &dyn LinkResolver) -> String {
    let index = Utf16Index::new(text);
    let len = index.len();

    let mut marked: Vec<Marked<'_>> = spans
        .iter()
        .filter_map(|span| {
            let end = span.end.min(len);
            let start = span.start.min(end);
            (start < end).then_some((start, end, &span.kind))
        })
        .map(|(start, end, kind)| Marked {
            start,
            end,
            kind,
            open: String::new(),
            close: "",
        })
        .collect();
    // Stable: identical spans keep their source order.
    marked.sort_by_key(|m| (m.start, m.nesting_key()));
    for m in &mut marked {
        (m.open, m.close) = tags(m.kind, resolver);
    }

    let cuts: Vec<usize> = [0, len]
        .into_iter()
        .chain(marked.iter().flat_map(|m| [m.start, m.end]))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut html = String::with_capacity(text.len());
    let mut open: Vec<usize> = Vec::new();
    let mut next = 0;

    for cut in cuts.windows(2) {
        let (from, to) = (cut[0], cut[1]);

        while next < marked.len() && marked[next].start == from {
            html.push_str(&marked[next].open);
            open.push(next);
            next += 1;
        }

        html.push_str(&escape(index.slice(text, from, to)));

        let Some(lowest) = open.iter().position(|&i| marked[i].end == to) else {
            continue;
        };
        let closed: Vec<usize> = open.drain(lowest..).collect();
        for &i in closed.iter().rev() {
            html.push_str(marked[i].close);
        }

        let mut reopen: Vec<usize> = closed.into_iter().filter(|&i| marked[i].end > to).collect();
        reopen.sort_by_key(|&i| (marked[i].nesting_key(), i));
        for i in reopen {
            html.push_str(&marked[i].open);
            open.push(i);
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentLink, Link, WebLink};
    use insta::assert_snapshot;
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn no_links(_: &DocumentLink) -> String {
        String::from("#")
    }

    fn doc_link(id: &str) -> Link {
        Link::Document(DocumentLink {
            id: id.into(),
            uid: None,
            doc_type: "doc".into(),
            tags: vec![],
            slug: id.to_lowercase(),
            lang: None,
            is_broken: false,
        })
    }

    fn localhost(link: &DocumentLink) -> String {
        format!("http://localhost/{}/{}", link.doc_type, link.id)
    }

    /// Removes tags and decodes the entities `escape` produces.
    fn strip_tags(html: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&amp;", "&")
    }

    /// Whether every opened tag is closed in reverse order.
    fn is_balanced(html: &str) -> bool {
        let mut stack: Vec<String> = Vec::new();
        let mut rest = html;
        while let Some(at) = rest.find('<') {
            let Some(len) = rest[at..].find('>') else {
                return false;
            };
            let tag = &rest[at + 1..at + len];
            if let Some(name) = tag.strip_prefix('/') {
                if stack.pop().as_deref() != Some(name) {
                    return false;
                }
            } else {
                let name = tag.split_whitespace().next().unwrap_or_default();
                stack.push(name.to_string());
            }
            rest = &rest[at + len + 1..];
        }
        stack.is_empty()
    }

    #[test]
    fn hyperlink_past_the_end_is_clipped() {
        let spans = [Span::new(0, 17, SpanKind::Hyperlink(doc_link("UrDmKgEAALwMyrXA")))];
        assert_snapshot!(
            render_spans("using-meta-micro", &spans, &localhost),
            @r#"<a href="http://localhost/doc/UrDmKgEAALwMyrXA">using-meta-micro</a>"#
        );
    }

    #[test]
    fn plain_text_is_escaped_once() {
        assert_eq!(
            render_spans(r#"a<b & "c""#, &[Span::new(0, 9, SpanKind::Strong)], &no_links),
            "<strong>a&lt;b &amp; &quot;c&quot;</strong>"
        );
        assert_eq!(render_spans("&amp;", &[], &no_links), "&amp;amp;");
    }

    #[test]
    fn contained_spans_nest() {
        let spans = [
            Span::new(0, 11, SpanKind::Strong),
            Span::new(6, 11, SpanKind::Em),
        ];
        assert_snapshot!(
            render_spans("Hello world", &spans, &no_links),
            @"<strong>Hello <em>world</em></strong>"
        );
    }

    #[test]
    fn overlapping_spans_are_split_to_stay_nested() {
        let spans = [Span::new(0, 4, SpanKind::Strong), Span::new(2, 6, SpanKind::Em)];
        assert_snapshot!(
            render_spans("abcdef", &spans, &no_links),
            @"<strong>ab<em>cd</em></strong><em>ef</em>"
        );
    }

    #[test]
    fn longer_span_opens_outside_at_shared_start() {
        let spans = [Span::new(0, 2, SpanKind::Strong), Span::new(0, 5, SpanKind::Em)];
        assert_snapshot!(
            render_spans("abcde", &spans, &no_links),
            @"<em><strong>ab</strong>cde</em>"
        );
    }

    #[test]
    fn identical_spans_open_link_then_strong_then_em() {
        let link = Link::Web(WebLink {
            url: "https://example.org".into(),
            content_type: None,
        });
        let spans = [
            Span::new(0, 3, SpanKind::Em),
            Span::new(0, 3, SpanKind::Label("tip".into())),
            Span::new(0, 3, SpanKind::Strong),
            Span::new(0, 3, SpanKind::Hyperlink(link)),
        ];
        assert_snapshot!(
            render_spans("abc", &spans, &no_links),
            @r#"<a href="https://example.org"><strong><em><span class="tip">abc</span></em></strong></a>"#
        );
    }

    #[test]
    fn empty_spans_emit_nothing() {
        let spans = [Span::new(2, 2, SpanKind::Strong), Span::new(9, 12, SpanKind::Em)];
        assert_eq!(render_spans("abcd", &spans, &no_links), "abcd");
        assert_eq!(render_spans("", &spans, &no_links), "");
    }

    #[test]
    fn offsets_are_utf16_code_units() {
        // "😀" occupies two code units, so "b" is at [3, 4).
        let spans = [Span::new(3, 4, SpanKind::Em)];
        assert_eq!(render_spans("😀ab", &spans, &no_links), "😀a<em>b</em>");
    }

    #[test]
    fn resolver_runs_once_per_link_in_order() {
        let calls = RefCell::new(Vec::new());
        let recording = |link: &DocumentLink| {
            calls.borrow_mut().push(link.id.clone());
            format!("/{}", link.id)
        };
        let spans = [
            Span::new(6, 9, SpanKind::Hyperlink(doc_link("C"))),
            Span::new(0, 4, SpanKind::Hyperlink(doc_link("A"))),
            Span::new(2, 7, SpanKind::Strong),
            Span::new(3, 5, SpanKind::Hyperlink(doc_link("B"))),
        ];

        let html = render_spans("abcdefghij", &spans, &recording);

        assert_eq!(*calls.borrow(), vec!["A", "B", "C"]);
        assert!(is_balanced(&html));
        // The first link is reopened after the strong span splits it, without a second lookup.
        assert_eq!(html.matches(r#"<a href="/A">"#).count(), 1);
    }

    fn arb_spans(max: usize) -> impl Strategy<Value = Vec<Span>> {
        prop::collection::vec(
            (0..max + 3, 0..max + 3, 0u8..4).prop_map(|(a, b, k)| {
                let kind = match k {
                    0 => SpanKind::Strong,
                    1 => SpanKind::Em,
                    2 => SpanKind::Label("l".into()),
                    _ => SpanKind::Hyperlink(doc_link("X")),
                };
                Span::new(a.min(b), a.max(b), kind)
            }),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn prop_stripping_tags_gives_back_the_text(
            text in "[a-z <>&\"é😀]{0,16}",
            spans in arb_spans(20),
        ) {
            let html = render_spans(&text, &spans, &no_links);
            prop_assert_eq!(strip_tags(&html), text);
        }

        #[test]
        fn prop_output_is_balanced(text in "[a-z ]{1,16}", spans in arb_spans(16)) {
            prop_assert!(is_balanced(&render_spans(&text, &spans, &no_links)));
        }

        #[test]
        fn prop_clipping_matches_explicit_clip(text in "[a-z]{1,12}", extra in 1usize..10) {
            let len = text.len();
            let past_end = [Span::new(0, len + extra, SpanKind::Strong)];
            let clipped = [Span::new(0, len, SpanKind::Strong)];
            prop_assert_eq!(
                render_spans(&text, &past_end, &no_links),
                render_spans(&text, &clipped, &no_links)
            );
        }
    }
}
