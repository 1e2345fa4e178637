// benches/round_votes.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use alt_brownlow::config::consts::MATCH_ROWS;
use alt_brownlow::specs::ratings;
use alt_brownlow::votes;

/// One synthetic round: 9 matches of 46 rows each, the shape of a full
/// home-and-away round export.
fn synthetic_round() -> String {
    let mut text = String::from("Player,Team,Rating\n");
    for m in 0..9 {
        for ix in 0..MATCH_ROWS {
            text.push_str(&format!("Player {m}-{ix},Club {m},{}\n", 1000 - ix));
        }
    }
    text
}

fn bench_round_votes(c: &mut Criterion) {
    let doc = synthetic_round();
    let ranked = ratings::parse_table(&doc).unwrap();

    c.bench_function("parse_round_table", |b| {
        b.iter(|| {
            let rows = ratings::parse_table(black_box(&doc)).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("tally_round", |b| {
        b.iter(|| {
            let votes = votes::tally_round(black_box(&ranked));
            black_box(votes.len())
        })
    });
}

criterion_group!(benches, bench_round_votes);
criterion_main!(benches);
