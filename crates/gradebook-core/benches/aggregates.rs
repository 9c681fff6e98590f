use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::mock::RecordingStore;
use gradebook_core::statistics::GradeSummary;
use gradebook_core::{GradeEditor, GradeRecord, Test};

fn make_tests(n: usize) -> Vec<Test> {
    (0..n)
        .map(|i| Test::new(format!("t{i}"), format!("Test {i}"), (10 + i % 40) as f64))
        .collect()
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for n in [10usize, 100, 1000] {
        let tests = make_tests(n);
        let record = GradeRecord::seeded(&tests, None);
        group.bench_function(format!("tests={n}"), |b| {
            b.iter(|| GradeSummary::compute(black_box(&record), black_box(&tests)))
        });
    }

    group.finish();
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    let tests = make_tests(1000);

    group.bench_function("seed 1000", |b| {
        b.iter(|| GradeRecord::seeded(black_box(&tests), None))
    });

    group.bench_function("fill half of 1000", |b| {
        let base = GradeRecord::seeded(&tests[..500], None);
        b.iter(|| {
            let mut record = base.clone();
            record.reconcile(black_box(&tests), None)
        })
    });

    group.finish();
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    group.bench_function("set+step x100", |b| {
        b.iter(|| {
            let mut editor = GradeEditor::open(RecordingStore::new(make_tests(100)), "s1", None);
            for i in 0..100 {
                let id = format!("t{i}");
                editor.set_grade(&id, black_box("7"));
                editor.decrement_grade(&id);
                editor.increment_grade(&id);
            }
            editor.percentage()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_summary, bench_reconcile, bench_edits);
criterion_main!(benches);
