use cms_fragments_engine::{
    ContentNode, DocumentLink, Span, SpanKind,
    parsing::parse_structured_text,
    render::{render_blocks, render_spans},
};
use criterion::{Criterion, criterion_group, criterion_main};

fn resolver(link: &DocumentLink) -> String {
    format!("/{}/{}", link.doc_type, link.id)
}

fn generate_structured_text(paragraphs: usize) -> String {
    let block = r#"{"type": "paragraph", "text": "Some paragraph content with a link and some emphasis in it.",
        "spans": [{"start": 0, "end": 22, "type": "strong"},
                  {"start": 10, "end": 40, "type": "em"},
                  {"start": 30, "end": 34, "type": "hyperlink",
                   "data": {"type": "Link.document", "value": {"document":
                       {"id": "X", "type": "doc", "tags": [], "slug": "x"}, "isBroken": false}}}]},
        {"type": "list-item", "text": "A bullet", "spans": []}"#;
    format!("[{}]", vec![block; paragraphs].join(","))
}

fn bench_parse_structured_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let node = ContentNode::from_json_str(&generate_structured_text(500)).unwrap();
    group.bench_function("structured_text_500", |b| {
        b.iter(|| parse_structured_text(std::hint::black_box(&node)).unwrap());
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let node = ContentNode::from_json_str(&generate_structured_text(500)).unwrap();
    let text = parse_structured_text(&node).unwrap();
    group.bench_function("blocks_500", |b| {
        b.iter(|| render_blocks(std::hint::black_box(&text.blocks), &resolver));
    });

    let long = "lorem ipsum ".repeat(1000);
    let spans: Vec<Span> = (0..1000)
        .map(|i| {
            let kind = if i % 2 == 0 { SpanKind::Strong } else { SpanKind::Em };
            Span::new(i * 12, i * 12 + 17, kind)
        })
        .collect();
    group.bench_function("overlapping_spans_1000", |b| {
        b.iter(|| render_spans(std::hint::black_box(&long), &spans, &resolver));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_structured_text, bench_render);
criterion_main!(benches);
