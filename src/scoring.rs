use crate::error::ScoreError;
use crate::model::{BaseStats, Species};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Scoring formula used to rank candidates of an effective type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Normal,
    /// Favours species that are easier to catch.
    CaptureBased,
    /// Favours attack.
    Aggressive,
    /// Favours health and defense.
    Tank,
    /// Favours speed.
    Fast,
}

/// Per-algorithm display column shown next to name, type and score.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Column {
    CaptureRate,
    Attack,
    Hp,
    Defense,
    Speed,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::CaptureRate => "capture_rate",
            Column::Attack => "attack",
            Column::Hp => "hp",
            Column::Defense => "defense",
            Column::Speed => "speed",
        }
    }

    pub fn value(self, species: &Species) -> u32 {
        match self {
            Column::CaptureRate => species.capture_rate,
            Column::Attack => species.stats.attack,
            Column::Hp => species.stats.hp,
            Column::Defense => species.stats.defense,
            Column::Speed => species.stats.speed,
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Normal,
        Algorithm::CaptureBased,
        Algorithm::Aggressive,
        Algorithm::Tank,
        Algorithm::Fast,
    ];

    pub fn from_id(id: u8) -> Result<Algorithm, ScoreError> {
        match id {
            1 => Ok(Algorithm::Normal),
            2 => Ok(Algorithm::CaptureBased),
            3 => Ok(Algorithm::Aggressive),
            4 => Ok(Algorithm::Tank),
            5 => Ok(Algorithm::Fast),
            other => Err(ScoreError::UnknownAlgorithm(other.to_string())),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Algorithm::Normal => 1,
            Algorithm::CaptureBased => 2,
            Algorithm::Aggressive => 3,
            Algorithm::Tank => 4,
            Algorithm::Fast => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Normal => "Normal",
            Algorithm::CaptureBased => "Capture-Based",
            Algorithm::Aggressive => "Aggressive",
            Algorithm::Tank => "Tank",
            Algorithm::Fast => "Fast",
        }
    }

    pub fn display_columns(self) -> &'static [Column] {
        match self {
            Algorithm::Normal => &[],
            Algorithm::CaptureBased => &[Column::CaptureRate],
            Algorithm::Aggressive => &[Column::Attack],
            Algorithm::Tank => &[Column::Hp, Column::Defense],
            Algorithm::Fast => &[Column::Speed],
        }
    }

    /// Integer score of one candidate whose primary type carries `type_power`.
    ///
    /// `//` in the formulas below is floor division (toward negative infinity, on
    /// integers and floats alike); real-valued results are truncated toward zero.
    pub fn score(self, stats: &BaseStats, capture_rate: u32, type_power: u32) -> i64 {
        let tp = i64::from(type_power);
        let cap = i64::from(capture_rate);
        let hp = i64::from(stats.hp);
        let atk = i64::from(stats.attack);
        let def = i64::from(stats.defense);
        let spa = i64::from(stats.sp_attack);
        let spd = i64::from(stats.sp_defense);
        let spe = i64::from(stats.speed);
        // max(1, tp + 1 // 2): the halved term floors to zero
        let boost = tp.max(1);

        match self {
            Algorithm::Normal => {
                tp * (floor_div(atk + hp + def + (2 + tp) * spe, 3) + cap + boost * (spa + spd))
            }
            Algorithm::CaptureBased => {
                let base = floor_div(atk + hp + def + (2 + tp) * spe, 3) + boost * (spa + spd);
                let score = (tp as f64 * (5.0 / 510.0 * cap as f64)) * base as f64;
                score as i64
            }
            Algorithm::Aggressive => {
                let physical = floor_div(3 * atk - hp - def, 5) + (2 + tp) * spe;
                tp * (floor_div(physical, 3) + cap + boost * (3 * spa - spd))
            }
            Algorithm::Tank => {
                let (hp, atk, def, spe) = (hp as f64, atk as f64, def as f64, spe as f64);
                let bulk =
                    5.0 * (3.0 * hp + 1.5 * def) - atk + ((hp + def) / 10.0 + tp as f64) * spe / 3.0;
                let score = tp as f64
                    * (floor_div_f64(bulk, 3.0) + cap as f64 + (boost * (spd - spa)) as f64);
                score as i64
            }
            Algorithm::Fast => {
                let pace = (atk + hp + def) as f64 / 5.0 + ((2 + tp) * 5 * spe) as f64;
                let score = tp as f64
                    * (floor_div_f64(pace, 3.0)
                        + cap as f64 / 1.5
                        + (boost * (spa + spd)) as f64 / 5.0);
                score as i64
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Ok(id) = key.parse::<u8>() {
            return Algorithm::from_id(id);
        }
        match key.as_str() {
            "normal" => Ok(Algorithm::Normal),
            "capture" | "capture-based" | "capture_based" => Ok(Algorithm::CaptureBased),
            "aggressive" => Ok(Algorithm::Aggressive),
            "tank" => Ok(Algorithm::Tank),
            "fast" => Ok(Algorithm::Fast),
            _ => Err(ScoreError::UnknownAlgorithm(s.to_string())),
        }
    }
}

fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// Float floor division computed from `fmod`, so results on exact multiples
/// match the integer case bit for bit.
fn floor_div_f64(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
