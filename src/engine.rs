use crate::dataset::Pokedex;
use crate::model::Species;
use crate::scoring::Algorithm;
use crate::types::Type;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const TEAM_SIZE: usize = 6;
pub const PER_TYPE_LIMIT: usize = 4;
pub const LEADERBOARD_LIMIT: usize = 15;

/// Attacking types the opposing team sits at its minimum multiplier against,
/// weighted by how many opposing species share that minimum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveTypes {
    ranked: Vec<(Type, u32)>,
}

impl EffectiveTypes {
    pub fn derive(opponents: &[&Species]) -> EffectiveTypes {
        let mut ranked: Vec<(Type, u32)> = Vec::new();
        for species in opponents {
            for ty in species.matchups.types_at_minimum() {
                match ranked.iter_mut().find(|(t, _)| *t == ty) {
                    Some((_, weight)) => *weight += 1,
                    None => ranked.push((ty, 1)),
                }
            }
        }
        // stable: equal weights keep first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        EffectiveTypes { ranked }
    }

    /// Accumulated weight of `ty`, zero when no opposing species contributed to it.
    pub fn type_power(&self, ty: Type) -> u32 {
        self.ranked
            .iter()
            .find(|(t, _)| *t == ty)
            .map(|(_, w)| *w)
            .unwrap_or(0)
    }

    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.ranked.iter().map(|(t, _)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Type, u32)> + '_ {
        self.ranked.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub species: &'a Species,
    pub score: i64,
}

/// Ranked result of one algorithm run.
#[derive(Debug, Clone)]
pub struct Leaderboard<'a> {
    pub algorithm: Algorithm,
    pub effective_types: EffectiveTypes,
    pub entries: Vec<ScoredCandidate<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateEntry {
    pub name: String,
    pub score: i64,
}

/// Scores every candidate in `candidates` and keeps the best [`PER_TYPE_LIMIT`].
pub fn top_candidates<'a>(
    candidates: impl Iterator<Item = &'a Species>,
    type_power: u32,
    algorithm: Algorithm,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .map(|species| ScoredCandidate {
            species,
            score: algorithm.score(&species.stats, species.capture_rate, type_power),
        })
        .collect();
    sort_by_score(&mut scored);
    scored.truncate(PER_TYPE_LIMIT);
    scored
}

fn sort_by_score(entries: &mut [ScoredCandidate<'_>]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

pub struct TeamBuilder<'a> {
    pokedex: &'a Pokedex,
}

impl<'a> TeamBuilder<'a> {
    pub fn new(pokedex: &'a Pokedex) -> Self {
        TeamBuilder { pokedex }
    }

    /// Opposing species found in the dataset, in dataset order. Repeated names
    /// count once and unknown names are skipped.
    pub fn opponents(&self, team: &[String]) -> Vec<&'a Species> {
        let wanted: HashSet<&str> = team.iter().map(String::as_str).collect();
        for name in team {
            if !self.pokedex.contains(name) {
                tracing::warn!(name = %name, "opposing species not in dataset, skipping");
            }
        }
        self.pokedex
            .iter()
            .filter(|s| wanted.contains(s.name.as_str()))
            .collect()
    }

    pub fn run_single(&self, team: &[String], algorithm: Algorithm) -> Leaderboard<'a> {
        let opponents = self.opponents(team);
        self.rank(&opponents, algorithm)
    }

    /// Runs every algorithm against the same team and sums each species' scores.
    /// A species missing from one run's leaderboard contributes nothing for it.
    pub fn run_aggregate(&self, team: &[String]) -> Vec<AggregateEntry> {
        let opponents = self.opponents(team);
        // each run owns its scores, so the runs are independent
        let boards: Vec<Leaderboard<'a>> = Algorithm::ALL
            .par_iter()
            .map(|&algorithm| self.rank(&opponents, algorithm))
            .collect();

        let mut totals: Vec<AggregateEntry> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for board in &boards {
            for entry in &board.entries {
                let name = entry.species.name.as_str();
                match index.get(name) {
                    Some(&idx) => totals[idx].score += entry.score,
                    None => {
                        index.insert(name, totals.len());
                        totals.push(AggregateEntry {
                            name: name.to_string(),
                            score: entry.score,
                        });
                    }
                }
            }
        }
        totals.sort_by(|a, b| b.score.cmp(&a.score));
        totals.truncate(LEADERBOARD_LIMIT);
        totals
    }

    fn rank(&self, opponents: &[&'a Species], algorithm: Algorithm) -> Leaderboard<'a> {
        let effective_types = EffectiveTypes::derive(opponents);
        tracing::debug!(
            algorithm = %algorithm,
            opponents = opponents.len(),
            effective_types = ?effective_types.ranked,
            "derived effective types"
        );

        let mut entries = Vec::new();
        for (ty, type_power) in effective_types.iter() {
            let top = top_candidates(self.pokedex.of_primary_type(ty), type_power, algorithm);
            tracing::debug!(type_tag = %ty, type_power, kept = top.len(), "scored candidates");
            entries.extend(top);
        }
        sort_by_score(&mut entries);
        entries.truncate(LEADERBOARD_LIMIT);

        Leaderboard {
            algorithm,
            effective_types,
            entries,
        }
    }
}
