use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chrono::{TimeZone, Utc};
use quizdrill_core::model::{Answer, AttemptResult, ExamAttempt, PassCondition, Question};
use quizdrill_core::statistics::{aggregate_history, low_accuracy_questions};

fn make_question(n: usize) -> Question {
    Question::new(
        format!("Question number {n}?"),
        vec![
            Answer::new(format!("right answer {n}"), true),
            Answer::new(format!("wrong answer {n}a"), false),
            Answer::new(format!("wrong answer {n}b"), false),
            Answer::new(format!("wrong answer {n}c"), false),
        ],
    )
}

fn make_attempt(questions: usize, correct_every: usize) -> ExamAttempt {
    let results: Vec<AttemptResult> = (0..questions)
        .map(|n| {
            let mut result = AttemptResult::unanswered(make_question(n));
            if n % correct_every == 0 {
                result.user_answer = result.question.correct_answer_ids();
            }
            result
        })
        .collect();
    let score = results.iter().filter(|r| r.is_correct()).count() as u32;
    let total = results.len() as u32;

    ExamAttempt {
        timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
        results,
        score,
        total,
        percentage: 100.0 * f64::from(score) / f64::from(total),
        passed: false,
        pass_condition: PassCondition::Percentage(70.0),
        elapsed_time: "10:00".into(),
        time_limit: 30,
    }
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_history");

    let small: Vec<ExamAttempt> = (0..5).map(|_| make_attempt(20, 2)).collect();
    group.bench_function("5 attempts x 20 questions", |b| {
        b.iter(|| aggregate_history(black_box(&small)))
    });

    let large: Vec<ExamAttempt> = (0..50).map(|_| make_attempt(100, 3)).collect();
    group.bench_function("50 attempts x 100 questions", |b| {
        b.iter(|| aggregate_history(black_box(&large)))
    });

    group.bench_function("low accuracy selection", |b| {
        b.iter(|| low_accuracy_questions(black_box(&large), black_box(60.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
