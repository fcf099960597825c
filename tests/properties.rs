//! Property tests over randomly generated rosters.

use proptest::prelude::*;

use raid_assign::domain::{Archetype, Player, PlayerId, Role, Status};
use raid_assign::search::candidate_swaps;
use raid_assign::state::AssignmentState;
use raid_assign::{
    build_seed, optimize, pair_synergy, score, validate, validate_swap, RaidConfig, ScoreWeights,
    SearchConfig,
};

const STATUSES: [Status; 5] = [
    Status::Confirmed,
    Status::Confirmed,
    Status::Tentative,
    Status::Late,
    Status::Benched,
];

fn arb_player(id: u64) -> impl Strategy<Value = Player> {
    (
        0..Role::ALL.len(),
        0..Archetype::COUNT,
        0..STATUSES.len(),
        0.0f64..1000.0,
        any::<bool>(),
    )
        .prop_map(move |(role, arch, status, quality, complete)| {
            let p = Player::new(id, format!("p{id}"))
                .with_role(Role::ALL[role])
                .with_status(STATUSES[status])
                .with_quality(quality)
                .with_signup_order(id as u32);
            if complete || id % 7 != 0 {
                p.with_archetype(Archetype::ALL[arch])
            } else {
                p
            }
        })
}

/// Two guaranteed tanks and healers, then 4..24 arbitrary players.
fn arb_roster() -> impl Strategy<Value = Vec<Player>> {
    (4usize..24).prop_flat_map(|n| {
        (0..n as u64)
            .map(|i| arb_player(100 + i))
            .collect::<Vec<_>>()
            .prop_map(|mut players| {
                players.push(Player::new(1, "t1").with_role(Role::Tank).with_archetype(Archetype::Warrior));
                players.push(Player::new(2, "t2").with_role(Role::Tank).with_archetype(Archetype::Paladin));
                players.push(Player::new(3, "h1").with_role(Role::Healer).with_archetype(Archetype::Priest));
                players.push(Player::new(4, "h2").with_role(Role::Healer).with_archetype(Archetype::Druid));
                players
            })
    })
}

fn raid() -> RaidConfig {
    RaidConfig::default()
        .with_group_count(4)
        .with_group_capacity(4)
        .with_max_raid_size(14)
        .with_min_tanks(2)
        .with_min_healers(2)
        .with_max_healers_per_group(2)
}

fn search_config() -> SearchConfig {
    SearchConfig::default()
        .with_constraints(raid())
        .with_max_iterations(8)
        .with_max_no_improve(4)
        .without_time_budget()
}

fn has_duplicates(state: &AssignmentState) -> bool {
    let mut ids: Vec<PlayerId> = state
        .assigned()
        .chain(state.bench().iter())
        .map(|p| p.id())
        .collect();
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    ids.len() != n
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn seed_is_valid_and_duplicate_free(players in arb_roster()) {
        let state = build_seed(&players, &raid()).unwrap();
        prop_assert!(validate(&state, &raid()).valid);
        prop_assert!(!has_duplicates(&state));
        let excluded = players.iter().filter(|p| p.status().is_excluded()).count();
        prop_assert_eq!(state.assigned_count() + state.bench().len(), players.len() - excluded);
    }

    #[test]
    fn optimize_keeps_validity_and_never_loses_score(players in arb_roster()) {
        let seed = build_seed(&players, &raid()).unwrap();
        let weights = ScoreWeights::default();
        let result = optimize(&seed, &weights, &search_config()).unwrap();

        prop_assert!(validate(&result.final_state, &raid()).valid);
        prop_assert!(!has_duplicates(&result.final_state));
        prop_assert!(result.final_score >= score(&seed, &weights));
        prop_assert_eq!(result.final_score, score(&result.final_state, &weights));
    }

    #[test]
    fn optimize_is_deterministic(players in arb_roster()) {
        let seed = build_seed(&players, &raid()).unwrap();
        let weights = ScoreWeights::default();
        let a = optimize(&seed, &weights, &search_config()).unwrap();
        let b = optimize(&seed, &weights, &search_config()).unwrap();
        prop_assert_eq!(&a.final_state, &b.final_state);
        prop_assert_eq!(a.final_score, b.final_score);
        prop_assert_eq!(a.score_history, b.score_history);
    }

    #[test]
    fn valid_swaps_produce_valid_states(players in arb_roster()) {
        let seed = build_seed(&players, &raid()).unwrap();
        for mv in candidate_swaps(&seed, true) {
            let next = seed.swap(mv.a, mv.b).unwrap();
            prop_assert!(!has_duplicates(&next));
            let verdict = validate_swap(&seed, mv.a, mv.b, &raid());
            prop_assert_eq!(verdict.valid, validate(&next, &raid()).valid);
        }
    }

    #[test]
    fn pair_synergy_is_symmetric(a in arb_player(1), b in arb_player(2)) {
        prop_assert_eq!(pair_synergy(&a, &b), pair_synergy(&b, &a));
        prop_assert!(pair_synergy(&a, &b) >= 0.0);
    }
}
