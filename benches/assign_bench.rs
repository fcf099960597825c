//! Criterion benchmarks for raid-assign.
//!
//! Uses synthetic rosters drawn from a seeded RNG so every run sees the
//! same players.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raid_assign::domain::{Archetype, Player, Role, Status};
use raid_assign::{build_seed, optimize, score, validate, RaidConfig, ScoreWeights, SearchConfig};

// ===========================================================================
// Synthetic rosters
// ===========================================================================

fn roster(size: usize, seed: u64) -> Vec<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let role = match i % 8 {
                0 => Role::Tank,
                1 | 2 => Role::Healer,
                _ => Role::Dps,
            };
            let archetype = match role {
                Role::Tank => [Archetype::Warrior, Archetype::Paladin, Archetype::Druid]
                    [rng.random_range(0..3)],
                Role::Healer => [
                    Archetype::Priest,
                    Archetype::Druid,
                    Archetype::Shaman,
                    Archetype::Paladin,
                ][rng.random_range(0..4)],
                Role::Dps => Archetype::ALL[rng.random_range(0..Archetype::COUNT)],
            };
            let status = match rng.random_range(0..10) {
                0 => Status::Late,
                1 => Status::Tentative,
                _ => Status::Confirmed,
            };
            Player::new(i as u64, format!("player{i}"))
                .with_role(role)
                .with_archetype(archetype)
                .with_status(status)
                .with_quality(rng.random_range(400.0..700.0))
                .with_signup_order(i as u32)
        })
        .collect()
}

fn raid(groups: usize) -> RaidConfig {
    RaidConfig::default()
        .with_group_count(groups)
        .with_max_raid_size(groups * 5)
        .with_min_tanks(groups / 4)
        .with_min_healers(groups / 2)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed");

    for &groups in &[5usize, 8] {
        let players = roster(groups * 6, 42);
        let config = raid(groups);
        group.bench_with_input(
            BenchmarkId::from_parameter(groups),
            &(players, config),
            |b, (p, c)| {
                b.iter(|| {
                    let state = build_seed(black_box(p), black_box(c));
                    black_box(state)
                })
            },
        );
    }
    group.finish();
}

fn bench_validate_and_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &groups in &[5usize, 8] {
        let config = raid(groups);
        let Ok(state) = build_seed(&roster(groups * 5, 7), &config) else {
            continue;
        };
        let weights = ScoreWeights::default();
        group.bench_with_input(BenchmarkId::new("validate", groups), &state, |b, s| {
            b.iter(|| black_box(validate(black_box(s), &config)))
        });
        group.bench_with_input(BenchmarkId::new("score", groups), &state, |b, s| {
            b.iter(|| black_box(score(black_box(s), &weights)))
        });
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    for &groups in &[5usize, 8] {
        let raid = raid(groups);
        let Ok(seed) = build_seed(&roster(groups * 6, 42), &raid) else {
            continue;
        };
        let config = SearchConfig::default()
            .with_constraints(raid)
            .with_max_iterations(20)
            .without_time_budget();
        let weights = ScoreWeights::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(groups),
            &(seed, config),
            |b, (s, c)| {
                b.iter(|| {
                    let result = optimize(black_box(s), &weights, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_seed, bench_validate_and_score, bench_optimize);
criterion_main!(benches);
