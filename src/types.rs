use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Elemental type tag. Variant order follows the `against_*` columns of the dataset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

pub const TYPE_COUNT: usize = 18;

static TYPE_TAGS: phf::Map<&'static str, Type> = phf::phf_map! {
    "bug" => Type::Bug,
    "dark" => Type::Dark,
    "dragon" => Type::Dragon,
    "electric" => Type::Electric,
    "fairy" => Type::Fairy,
    "fighting" => Type::Fighting,
    // older dumps of the dataset abbreviate the column as against_fight
    "fight" => Type::Fighting,
    "fire" => Type::Fire,
    "flying" => Type::Flying,
    "ghost" => Type::Ghost,
    "grass" => Type::Grass,
    "ground" => Type::Ground,
    "ice" => Type::Ice,
    "normal" => Type::Normal,
    "poison" => Type::Poison,
    "psychic" => Type::Psychic,
    "rock" => Type::Rock,
    "steel" => Type::Steel,
    "water" => Type::Water,
};

impl Type {
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Bug,
        Type::Dark,
        Type::Dragon,
        Type::Electric,
        Type::Fairy,
        Type::Fighting,
        Type::Fire,
        Type::Flying,
        Type::Ghost,
        Type::Grass,
        Type::Ground,
        Type::Ice,
        Type::Normal,
        Type::Poison,
        Type::Psychic,
        Type::Rock,
        Type::Steel,
        Type::Water,
    ];

    pub fn from_tag(tag: &str) -> Option<Type> {
        let tag = tag.trim().to_ascii_lowercase();
        TYPE_TAGS.get(tag.as_str()).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Bug => "bug",
            Type::Dark => "dark",
            Type::Dragon => "dragon",
            Type::Electric => "electric",
            Type::Fairy => "fairy",
            Type::Fighting => "fighting",
            Type::Fire => "fire",
            Type::Flying => "flying",
            Type::Ghost => "ghost",
            Type::Grass => "grass",
            Type::Ground => "ground",
            Type::Ice => "ice",
            Type::Normal => "normal",
            Type::Poison => "poison",
            Type::Psychic => "psychic",
            Type::Rock => "rock",
            Type::Steel => "steel",
            Type::Water => "water",
        }
    }

    /// Dataset column holding the damage multiplier taken from this attacking type.
    pub fn against_column(self) -> String {
        format!("against_{}", self.as_str())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown type tag {0:?}")]
pub struct UnknownType(pub String);

impl FromStr for Type {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_tag(s).ok_or_else(|| UnknownType(s.to_string()))
    }
}
