use pokemon_counter_team::engine::{LEADERBOARD_LIMIT, PER_TYPE_LIMIT};
use pokemon_counter_team::model::{BaseStats, Species, TypeMatchups};
use pokemon_counter_team::types::Type;
use pokemon_counter_team::{Algorithm, Leaderboard, Pokedex, TeamBuilder};
use std::collections::HashMap;

fn stats(hp: u32, attack: u32, defense: u32, sp_attack: u32, sp_defense: u32, speed: u32) -> BaseStats {
    BaseStats {
        hp,
        attack,
        defense,
        sp_attack,
        sp_defense,
        speed,
    }
}

fn make_mon(name: &str, ty: Type, stats: BaseStats, capture_rate: u32) -> Species {
    Species::new(name, ty, stats, capture_rate, TypeMatchups::default())
}

fn make_opponent(name: &str, matchups: TypeMatchups) -> Species {
    Species::new(name, Type::Ghost, stats(60, 60, 60, 60, 60, 60), 45, matchups)
}

fn team(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Four opponents resist fire most, two resist grass and water equally,
/// so the effective types are fire (4), grass (2) and water (2).
fn fixture() -> Pokedex {
    let fire_resist = TypeMatchups::default().with(Type::Fire, 0.5);
    let plant_resist = TypeMatchups::default()
        .with(Type::Grass, 0.25)
        .with(Type::Water, 0.25);
    Pokedex::from_species(vec![
        make_opponent("Opp1", fire_resist),
        make_opponent("Opp2", fire_resist),
        make_opponent("Opp3", fire_resist),
        make_opponent("Opp4", fire_resist),
        make_opponent("Opp5", plant_resist),
        make_opponent("Opp6", plant_resist),
        make_mon("Charizard", Type::Fire, stats(78, 84, 78, 109, 85, 100), 45),
        make_mon("Charmeleon", Type::Fire, stats(58, 64, 58, 80, 65, 80), 45),
        make_mon("Charmander", Type::Fire, stats(39, 52, 43, 60, 50, 65), 45),
        make_mon("Arcanine", Type::Fire, stats(90, 110, 80, 100, 80, 95), 75),
        make_mon("Flareon", Type::Fire, stats(65, 130, 60, 95, 110, 65), 45),
        make_mon("Venusaur", Type::Grass, stats(80, 82, 83, 100, 100, 80), 45),
        make_mon("Lapras", Type::Water, stats(130, 85, 80, 85, 95, 60), 45),
        make_mon("Snorlax", Type::Normal, stats(160, 110, 65, 65, 110, 30), 25),
    ])
    .unwrap()
}

const OPPONENTS: [&str; 6] = ["Opp1", "Opp2", "Opp3", "Opp4", "Opp5", "Opp6"];

fn scores(board: &Leaderboard<'_>) -> Vec<(String, i64)> {
    board
        .entries
        .iter()
        .map(|e| (e.species.name.clone(), e.score))
        .collect()
}

fn ranking(dex: &Pokedex, algorithm: Algorithm) -> Vec<(String, i64)> {
    scores(&TeamBuilder::new(dex).run_single(&team(&OPPONENTS), algorithm))
}

fn owned(expected: &[(&str, i64)]) -> Vec<(String, i64)> {
    expected.iter().map(|(n, s)| (n.to_string(), *s)).collect()
}

#[test]
fn effective_types_weighted_by_team() {
    let dex = fixture();
    let board = TeamBuilder::new(&dex).run_single(&team(&OPPONENTS), Algorithm::Normal);
    assert_eq!(
        board.effective_types.iter().collect::<Vec<_>>(),
        vec![(Type::Fire, 4), (Type::Grass, 2), (Type::Water, 2)]
    );
}

#[test]
fn normal_run_ranks_by_score() {
    let dex = fixture();
    // Charizard: (84+78+78+6*100)//3 = 280; 4 * (280 + 45 + 4*194) = 4404
    assert_eq!(
        ranking(&dex, Algorithm::Normal),
        owned(&[
            ("Charizard", 4404),
            ("Flareon", 4320),
            ("Arcanine", 4312),
            ("Charmeleon", 3380),
            ("Venusaur", 1266),
            ("Lapras", 1166),
        ])
    );
}

#[test]
fn tank_run_reorders_bulky_species() {
    let dex = fixture();
    assert_eq!(
        ranking(&dex, Algorithm::Tank),
        owned(&[
            ("Arcanine", 3320),
            ("Charizard", 2892),
            ("Flareon", 2620),
            ("Charmeleon", 2148),
            ("Lapras", 2080),
            ("Venusaur", 1574),
        ])
    );
}

#[test]
fn capture_based_run_favours_easy_catches() {
    let dex = fixture();
    let board = ranking(&dex, Algorithm::CaptureBased);
    assert_eq!(board[0], ("Arcanine".to_string(), 2949));
}

#[test]
fn at_most_four_per_type() {
    let dex = fixture();
    for algorithm in Algorithm::ALL {
        let board = TeamBuilder::new(&dex).run_single(&team(&OPPONENTS), algorithm);
        let mut per_type: HashMap<Type, usize> = HashMap::new();
        for entry in &board.entries {
            *per_type.entry(entry.species.primary_type).or_default() += 1;
        }
        assert!(per_type.values().all(|&n| n <= PER_TYPE_LIMIT));
        assert_eq!(per_type.get(&Type::Fire), Some(&PER_TYPE_LIMIT));
        assert!(board.entries.iter().all(|e| e.species.name != "Charmander"));
        assert!(board.entries.iter().all(|e| e.species.name != "Snorlax"));
    }
}

#[test]
fn aggregate_sums_every_run() {
    let dex = fixture();
    let builder = TeamBuilder::new(&dex);
    let totals: Vec<(String, i64)> = builder
        .run_aggregate(&team(&OPPONENTS))
        .into_iter()
        .map(|e| (e.name, e.score))
        .collect();
    // Charizard: 4404 + 1863 + 4876 + 2892 + 4804
    assert_eq!(
        totals,
        owned(&[
            ("Arcanine", 19849),
            ("Charizard", 18839),
            ("Flareon", 15778),
            ("Charmeleon", 14411),
            ("Venusaur", 5790),
            ("Lapras", 5658),
        ])
    );

    for (name, total) in &totals {
        let summed: i64 = Algorithm::ALL
            .iter()
            .map(|&a| {
                ranking(&dex, a)
                    .into_iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, s)| s)
                    .unwrap_or(0)
            })
            .sum();
        assert_eq!(*total, summed);
    }
}

#[test]
fn unknown_names_behave_like_a_shorter_team() {
    let dex = fixture();
    let builder = TeamBuilder::new(&dex);
    let mixed = team(&["Opp1", "Missingno", "Opp5", "Agumon", "Opp6", "Pikablu"]);
    let short = team(&["Opp1", "Opp5", "Opp6"]);
    for algorithm in Algorithm::ALL {
        let a = builder.run_single(&mixed, algorithm);
        let b = builder.run_single(&short, algorithm);
        assert_eq!(a.effective_types, b.effective_types);
        assert_eq!(scores(&a), scores(&b));
    }
    assert_eq!(builder.run_aggregate(&mixed), builder.run_aggregate(&short));
}

#[test]
fn leaderboard_is_capped_at_fifteen() {
    // every attacking type ties at the minimum, so all 18 types are effective
    let mut species = vec![make_opponent("Neutral", TypeMatchups::default())];
    for ty in Type::ALL {
        for i in 0..6 {
            species.push(make_mon(
                &format!("{ty}-{i}"),
                ty,
                stats(50, 50, 50, 50, 50, 40 + i * 10),
                45,
            ));
        }
    }
    let dex = Pokedex::from_species(species).unwrap();
    let builder = TeamBuilder::new(&dex);
    let board = builder.run_single(&team(&["Neutral"]), Algorithm::Fast);
    assert_eq!(board.effective_types.len(), 18);
    assert_eq!(board.entries.len(), LEADERBOARD_LIMIT);
    assert!(board.entries.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(builder.run_aggregate(&team(&["Neutral"])).len(), LEADERBOARD_LIMIT);
}
