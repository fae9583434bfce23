// Benchmark for month grid construction and event bucketing

use std::rc::Rc;

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use study_planner::services::calendar::{build_month_grid, CalendarView};
use study_planner::services::clock::{Clock, FixedClock};
use study_planner::services::event::EventStore;
use study_planner::services::id::SequentialIdGenerator;
use study_planner::services::storage::MemoryStorage;
use study_planner::utils::date::canonical_date;

fn bench_build_month_grid(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    c.bench_function("build_month_grid", |b| {
        b.iter(|| build_month_grid(black_box(reference)))
    });
}

fn bench_render_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_grid");
    let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

    for count in [10usize, 100, 1000] {
        let clock: Rc<dyn Clock> = Rc::new(FixedClock::at_date(today));
        let store = EventStore::load(
            Rc::new(MemoryStorage::new()),
            clock.clone(),
            Rc::new(SequentialIdGenerator::default()),
        );
        let mut view = CalendarView::new(store, clock);
        for i in 0..count {
            let date = today - Days::new(30) + Days::new((i % 60) as u64);
            view.add_event(&format!("event {i}"), &canonical_date(date), None, None);
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &view, |b, view| {
            b.iter(|| view.snapshot())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_month_grid, bench_render_grid);
criterion_main!(benches);
