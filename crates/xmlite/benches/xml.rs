use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use xmlite::parse;

const SIMPLE_XML: &str = "<root><child>text</child></root>";
const ATTR_XML: &str = "<root id=\"1\" name='test'><item value=\"42\" /></root>";
const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- catalog -->
<catalog>
  <book id="bk101">
    <author>Gambardella, Matthew</author>
    <title>XML Developer&apos;s Guide</title>
    <price>44.95</price>
    <description><![CDATA[An in-depth look at <xml> & friends.]]></description>
  </book>
  <book id="bk102" available=yes/>
</catalog>
"#;

fn bench_simple(c: &mut Criterion) {
    c.bench_function("xmlite_simple", |b| b.iter(|| parse(black_box(SIMPLE_XML))));
}

fn bench_attr(c: &mut Criterion) {
    c.bench_function("xmlite_attr", |b| b.iter(|| parse(black_box(ATTR_XML))));
}

fn bench_document(c: &mut Criterion) {
    c.bench_function("xmlite_document", |b| {
        b.iter(|| parse(black_box(DOCUMENT_XML)))
    });
}

fn bench_wide(c: &mut Criterion) {
    let items: String = (0..1000)
        .map(|i| format!("<item n=\"{i}\">value &amp; {i}</item>"))
        .collect();
    let xml = format!("<list>{items}</list>");
    c.bench_function("xmlite_wide_1000", |b| b.iter(|| parse(black_box(&xml))));
}

criterion_group!(benches, bench_simple, bench_attr, bench_document, bench_wide);
criterion_main!(benches);
