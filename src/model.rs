use crate::types::{Type, TYPE_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

/// Damage multipliers a species takes from each attacking type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeMatchups([f64; TYPE_COUNT]);

impl Default for TypeMatchups {
    fn default() -> Self {
        TypeMatchups([1.0; TYPE_COUNT])
    }
}

impl TypeMatchups {
    pub fn from_array(values: [f64; TYPE_COUNT]) -> Self {
        TypeMatchups(values)
    }

    pub fn with(mut self, attacking: Type, multiplier: f64) -> Self {
        self.0[attacking.index()] = multiplier;
        self
    }

    pub fn get(&self, attacking: Type) -> f64 {
        self.0[attacking.index()]
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Every attacking type sitting at the minimum multiplier, ties included,
    /// in column order.
    pub fn types_at_minimum(&self) -> Vec<Type> {
        let min = self.min();
        Type::ALL
            .iter()
            .copied()
            .filter(|t| self.get(*t) == min)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Species {
    pub name: String,
    pub japanese_name: String,
    pub pokedex_number: u32,
    pub percentage_male: Option<f64>,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    pub classification: String,
    pub height_m: Option<f64>,
    pub weight_kg: Option<f64>,
    pub capture_rate: u32,
    pub base_egg_steps: u32,
    pub abilities: Vec<String>,
    pub experience_growth: u64,
    pub base_happiness: u32,
    pub matchups: TypeMatchups,
    pub stats: BaseStats,
    pub generation: u8,
    pub is_legendary: bool,
}

impl Species {
    /// Species with only the attributes the scoring engine reads; the rest stay empty.
    pub fn new(
        name: &str,
        primary_type: Type,
        stats: BaseStats,
        capture_rate: u32,
        matchups: TypeMatchups,
    ) -> Self {
        Species {
            name: name.to_string(),
            japanese_name: String::new(),
            pokedex_number: 0,
            percentage_male: None,
            primary_type,
            secondary_type: None,
            classification: String::new(),
            height_m: None,
            weight_kg: None,
            capture_rate,
            base_egg_steps: 0,
            abilities: Vec::new(),
            experience_growth: 0,
            base_happiness: 0,
            matchups,
            stats,
            generation: 0,
            is_legendary: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("capture rate {raw:?} does not start with an integer")]
pub struct CaptureRateError {
    pub raw: String,
}

/// Capture rates are mostly plain integers, but a few species carry several
/// phase-dependent values such as `30 (Meteoric) 255(Core)`; the first wins.
pub fn parse_capture_rate(raw: &str) -> Result<u32, CaptureRateError> {
    let trimmed = raw.trim();
    if let Ok(rate) = trimmed.parse() {
        return Ok(rate);
    }
    trimmed
        .split_whitespace()
        .next()
        .and_then(|first| first.parse().ok())
        .ok_or_else(|| CaptureRateError {
            raw: raw.to_string(),
        })
}

/// Parses the dataset's list literal, e.g. `['Overgrow', 'Chlorophyll']`.
pub fn parse_abilities(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|s| s.trim().trim_matches(|c: char| c == '\'' || c == '"').trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
