use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdrill_core::bank::parse_bank_str;

fn make_bank_json(questions: usize) -> String {
    let entries: Vec<String> = (0..questions)
        .map(|n| {
            format!(
                r#"{{
    "description": "Question number {n}?",
    "answers": [
        {{"value": "right answer {n}", "correct": true}},
        {{"value": "wrong answer {n}a", "correct": false}},
        {{"value": "wrong answer {n}b", "correct": false}},
        {{"value": "wrong answer {n}c", "correct": false}}
    ]
}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_bank");
    let path = PathBuf::from("bench.json");

    for size in [10usize, 100, 1000] {
        let json = make_bank_json(size);
        group.bench_function(format!("{size} questions"), |b| {
            b.iter(|| parse_bank_str(black_box(&json), black_box(&path)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bank_parsing);
criterion_main!(benches);
