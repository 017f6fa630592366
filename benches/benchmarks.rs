use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stringmetrics::{
    DistanceMetric, ExtractOptions, Preset, ScoreMetric, SuggestOptions, distance, extract,
    normalize, partial_ratio, score, substring_similarity, suggest, token_set_ratio,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate `n` candidate strings: "item_0", "item_1", ...
fn generate_items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item_{i}")).collect()
}

/// Generate `n` candidates where every other entry carries diacritics.
fn generate_diacritics_items(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                format!("Caf\u{00e9} Cr\u{00e8}me {i}")
            } else {
                format!("cafe creme {i}")
            }
        })
        .collect()
}

const SHORT: (&str, &str) = ("kitten", "sitting");
const LONG: (&str, &str) = (
    "the quick brown fox jumps over the lazy dog near the riverbank",
    "a quick brown dog jumped over the lazy fox by the river bank",
);

// ---------------------------------------------------------------------------
// 1. Pairwise distances
// ---------------------------------------------------------------------------

fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");

    for metric in [
        DistanceMetric::Levenshtein,
        DistanceMetric::Osa,
        DistanceMetric::DamerauLevenshtein,
        DistanceMetric::Indel,
    ] {
        group.bench_function(BenchmarkId::new(metric.as_str(), "short"), |b| {
            b.iter(|| distance(black_box(SHORT.0), black_box(SHORT.1), metric));
        });
        group.bench_function(BenchmarkId::new(metric.as_str(), "long"), |b| {
            b.iter(|| distance(black_box(LONG.0), black_box(LONG.1), metric));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 2. Similarity scores
// ---------------------------------------------------------------------------

fn bench_scores(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for metric in [ScoreMetric::Jaro, ScoreMetric::JaroWinkler, ScoreMetric::Ratio] {
        group.bench_function(metric.as_str(), |b| {
            b.iter(|| score(black_box(LONG.0), black_box(LONG.1), metric));
        });
    }

    // Window scan: no verbatim containment, so every window is scored.
    group.bench_function("partial_ratio", |b| {
        b.iter(|| partial_ratio(black_box("quick brwn fox"), black_box(LONG.0)));
    });

    group.bench_function("token_set_ratio", |b| {
        b.iter(|| token_set_ratio(black_box(LONG.0), black_box(LONG.1)));
    });

    group.bench_function("substring_similarity", |b| {
        b.iter(|| substring_similarity(black_box(LONG.0), black_box(LONG.1)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// 3. Normalization presets
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let input = "  Cr\u{00e8}me Br\u{00fb}l\u{00e9}e, \u{0130}stanbul & Stra\u{00df}e!  ";

    for preset in [Preset::Minimal, Preset::Default, Preset::Aggressive] {
        group.bench_function(preset.as_str(), |b| {
            b.iter(|| normalize(black_box(input), preset, None));
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 4. Extraction throughput (100, 10_000)
// ---------------------------------------------------------------------------

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [100, 10_000] {
        let items = generate_items(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| {
                extract(
                    black_box("item_5"),
                    black_box(items),
                    &ExtractOptions::new().score_cutoff(80.0),
                )
            });
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// 5. Suggestions with and without normalization
// ---------------------------------------------------------------------------

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");
    let items = generate_diacritics_items(1_000);

    group.bench_function("default_preset", |b| {
        b.iter(|| suggest(black_box("cafe creme 5"), black_box(&items), &SuggestOptions::default()));
    });

    group.bench_function("no_normalization", |b| {
        let opts = SuggestOptions {
            preset: Preset::None,
            ..Default::default()
        };
        b.iter(|| suggest(black_box("cafe creme 5"), black_box(&items), &opts));
    });

    group.bench_function("aggressive_prefix", |b| {
        let opts = SuggestOptions {
            preset: Preset::Aggressive,
            prefer_prefix: true,
            ..Default::default()
        };
        b.iter(|| suggest(black_box("cafe creme 5"), black_box(&items), &opts));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion harness
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_distances,
    bench_scores,
    bench_normalize,
    bench_extract,
    bench_suggest,
);
criterion_main!(benches);
