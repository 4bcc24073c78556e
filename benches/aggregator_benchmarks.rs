//! Benchmarks for dispute aggregation and response decoding

#![allow(missing_docs, clippy::unwrap_used, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tribunal_core::DisputeRecord;
use tribunal_dashboard::aggregator::{aggregate, count_statuses, recent_unresolved};
use tribunal_dashboard::http::parse_dispute_list;

/// Realistic mix: mostly resolved, a tail of open disputes and a few odd statuses
fn sample_disputes(count: usize) -> Vec<DisputeRecord> {
    (0..count)
        .map(|i| {
            let status = match i % 10 {
                0..=5 => "RESOLVED",
                6 | 7 => "PENDING",
                8 => "UNDER_REVIEW",
                _ => "ESCALATED",
            };
            let mut dispute = DisputeRecord::new(format!("dispute-{i:06}"), status);
            dispute.job_id = format!("job-{}", i / 3);
            dispute.reason = "Work not delivered".to_string();
            dispute.amount = f64::from(u32::try_from(i % 500).unwrap_or(0)) * 1.25;
            dispute
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [0_usize, 10, 100, 1_000, 10_000] {
        let disputes = sample_disputes(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("full", size), &disputes, |b, disputes| {
            b.iter(|| aggregate(black_box(disputes)));
        });
    }

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_components");
    let disputes = sample_disputes(10_000);

    group.bench_function("count_statuses", |b| {
        b.iter(|| count_statuses(black_box(&disputes)));
    });

    // Resolved-heavy prefix forces the filter to scan past most records
    let mut resolved_first = sample_disputes(10_000);
    resolved_first.sort_by_key(|d| !d.status.is_resolved());
    group.bench_function("recent_unresolved_late_hits", |b| {
        b.iter(|| recent_unresolved(black_box(&resolved_first), 5));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10_usize, 1_000] {
        let body = serde_json::to_vec(&serde_json::json!({
            "success": true,
            "count": size,
            "disputes": sample_disputes(size),
        }))
        .unwrap();

        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("dispute_list", size), &body, |b, body| {
            b.iter(|| parse_dispute_list(black_box(body)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_components, bench_decode);

criterion_main!(benches);
