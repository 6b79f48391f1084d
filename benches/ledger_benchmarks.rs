//! Performance benchmarks for the Attendance Ledger Engine.
//!
//! Covers the pure ledger fold over growing record histories (a week, a year
//! and the full five-year retention window) and the `/ledger` endpoint.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_ledger::api::{AppState, create_router};
use attendance_ledger::calculation::{build_ledger, compute_hour_bank};
use attendance_ledger::entry::{expand_operation, leave_record, recovery_marker, work_record};
use attendance_ledger::models::{Category, TimeRecord, UserSettings};

use axum::{body::Body, http::Request};
use chrono::{Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, Weekday};
use tower::ServiceExt;

fn settings() -> UserSettings {
    UserSettings::with_defaults(2026)
}

/// Builds a realistic history of `days` calendar days ending on 2026-12-31.
///
/// Weekdays get a morning and an afternoon work span, every third Monday is
/// a recovery day, every tenth Wednesday is ordinary leave and the first
/// week of each quarter is on operation.
fn create_history(days: i64) -> Vec<TimeRecord> {
    let tz = FixedOffset::east_opt(3600).unwrap();
    let settings = settings();
    let last = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
    let first = last - Duration::days(days - 1);

    let morning = (
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
    );
    let afternoon = (
        NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 45, 0).unwrap(),
    );

    let mut records = Vec::new();
    for (index, date) in first.iter_days().take(days as usize).enumerate() {
        let week = index / 7;
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => {}
            _ if date.day() <= 7 && date.month() % 3 == 1 => {
                records.extend(expand_operation(&tz, date, date, "Site").unwrap());
            }
            Weekday::Mon if week % 3 == 0 => {
                records.push(recovery_marker(&tz, date).unwrap());
            }
            Weekday::Wed if week % 10 == 0 => {
                let category = Category::LeaveOrdinary(date.year());
                records.push(leave_record(&tz, date, category, &settings.schedule).unwrap());
            }
            _ => {
                for (start, end) in [morning, afternoon] {
                    records.push(work_record(&tz, date, start, end, Category::Work).unwrap());
                }
            }
        }
    }
    records
}

/// Benchmark: Ledger over histories of increasing length.
fn bench_build_ledger(c: &mut Criterion) {
    let settings = settings();
    let mut group = c.benchmark_group("build_ledger");

    for (label, days) in [("week", 7), ("year", 365), ("retention_window", 5 * 365)] {
        let records = create_history(days);
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::new("history", label), &records, |b, records| {
            b.iter(|| black_box(build_ledger(black_box(records), &settings)))
        });
    }

    group.finish();
}

/// Benchmark: Hour bank fold alone over one year.
fn bench_hour_bank(c: &mut Criterion) {
    let settings = settings();
    let records = create_history(365);

    c.bench_function("hour_bank_year", |b| {
        b.iter(|| {
            black_box(compute_hour_bank(
                black_box(&records),
                &settings.schedule,
                settings.leave_balances.recovery_opening(),
            ))
        })
    });
}

/// Benchmark: `/ledger` request for one year of records, including JSON.
fn bench_ledger_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(settings()));

    let records: Vec<serde_json::Value> = create_history(365)
        .into_iter()
        .map(|record| {
            serde_json::json!({
                "id": record.id,
                "start_time": record.start_time.to_rfc3339(),
                "end_time": record.end_time.map(|end| end.to_rfc3339()),
                "category": record.category.to_string(),
            })
        })
        .collect();
    let body = serde_json::json!({ "records": records }).to_string();

    let mut group = c.benchmark_group("endpoint");
    group.sample_size(20);

    group.bench_function("ledger_year", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/ledger")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_ledger,
    bench_hour_bank,
    bench_ledger_endpoint,
);
criterion_main!(benches);
