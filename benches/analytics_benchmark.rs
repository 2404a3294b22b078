//! Performance benchmarks for dashboard analytics
//!
//! Tests stat computation and top-post ranking over growing post sets.
//! Run with: cargo bench

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use connectsphere::analytics::{rank_top_posts, DashboardStats};
use connectsphere::models::{Post, Profile};

/// Generate a post set with spread-out counters and body lengths
fn generate_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post {
            id: format!("post-{}", i),
            user_id: "author-1".to_string(),
            text: Some("lorem ipsum dolor sit amet ".repeat(i % 7 + 1)),
            created_at: Utc::now(),
            like_count: (i * 31 % 997) as u64,
            comment_count: (i * 17 % 251) as u64,
            share_count: (i * 7 % 89) as u64,
            save_count: (i * 3 % 53) as u64,
        })
        .collect()
}

fn bench_profile() -> Profile {
    Profile {
        id: "author-1".to_string(),
        username: "casey".to_string(),
        display_name: None,
        follower_count: 125_000,
        following_count: 900,
    }
}

/// Benchmark stat totals over growing post sets
fn bench_stats_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats_compute");
    let profile = bench_profile();

    for size in [10, 100, 1_000, 10_000].iter() {
        let posts = generate_posts(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_posts", size)),
            &posts,
            |b, posts| {
                b.iter(|| {
                    let stats = DashboardStats::compute(black_box(&profile), black_box(posts));
                    black_box(stats)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark top-post ranking, which clones previews and sorts
fn bench_rank_top_posts(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_top_posts");

    for size in [10, 100, 1_000, 10_000].iter() {
        let posts = generate_posts(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_posts", size)),
            &posts,
            |b, posts| {
                b.iter(|| {
                    let ranked = rank_top_posts(black_box(posts), 5);
                    black_box(ranked)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_stats_compute, bench_rank_top_posts);

criterion_main!(benches);
