//! Benchmarks for shorthand expansion and condensation.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use cssnorm::{Normalizer, Style, Stylesheet, Value};

const SAMPLE_CSS: &str = r#"
    body { font: normal 0.6em/135% arial, sans-serif; margin: 0 auto; padding: 1em 2em }
    h1, h2 { font: bold italic small-caps larger/normal serif; border-bottom: 1px solid #aaa }
    blockquote { margin: 1em 2em 1em 3em; border: thin groove; padding: 0 1em }
    ul.toc { list-style: upper-roman url(img.png) outside; margin: 0 0 0 1.5em }
    .note { border-width: 1px 2px; border-style: dotted; border-color: red green blue }
    @media print { body { margin: 1in } }
"#;

/// The sample stylesheet with every shorthand expanded.
fn expanded_sheet(normalizer: &Normalizer) -> Stylesheet {
    let mut sheet = Stylesheet::parse(SAMPLE_CSS);
    for rule in sheet.style_rules_mut() {
        normalizer.expand_style(&mut rule.style);
    }
    sheet
}

// ============================================================================
// Expansion Benchmarks
// ============================================================================

fn bench_expand_font(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let value = Value::parse("bold italic small-caps larger/normal \"My Font\", serif").unwrap();

    c.bench_function("expand_font", |b| {
        b.iter(|| normalizer.expand("font", black_box(&value)));
    });
}

fn bench_expand_border(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let value = Value::parse("1px solid rgb(0, 1, 1)").unwrap();

    c.bench_function("expand_border", |b| {
        b.iter(|| normalizer.expand("border", black_box(&value)));
    });
}

fn bench_expand_sheet(c: &mut Criterion) {
    let normalizer = Normalizer::new();

    c.bench_function("expand_sheet", |b| {
        b.iter(|| expanded_sheet(&normalizer));
    });
}

// ============================================================================
// Condensation Benchmarks
// ============================================================================

fn bench_condense_style(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let mut style = Style::parse("margin: 1em 2em 3em; border: 1px solid red; padding: 0");
    normalizer.expand_style(&mut style);

    c.bench_function("condense_style", |b| {
        b.iter(|| {
            let mut style = style.clone();
            normalizer.condense(&mut style);
            style
        });
    });
}

fn bench_condense_sheet(c: &mut Criterion) {
    let normalizer = Normalizer::new();
    let sheet = expanded_sheet(&normalizer);

    c.bench_function("condense_sheet", |b| {
        b.iter(|| {
            let mut sheet = sheet.clone();
            normalizer.condense_sheet(&mut sheet);
            sheet
        });
    });
}

criterion_group!(
    benches,
    // Expansion
    bench_expand_font,
    bench_expand_border,
    bench_expand_sheet,
    // Condensation
    bench_condense_style,
    bench_condense_sheet,
);
criterion_main!(benches);
