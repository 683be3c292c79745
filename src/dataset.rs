use crate::error::DatasetError;
use crate::model::{parse_abilities, parse_capture_rate, BaseStats, Species, TypeMatchups};
use crate::types::{Type, TYPE_COUNT};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Canonical column order of the species table.
pub const COLUMNS: [&str; 40] = [
    "name",
    "japanese_name",
    "pokedex_number",
    "percentage_male",
    "type1",
    "type2",
    "classification",
    "height_m",
    "weight_kg",
    "capture_rate",
    "base_egg_steps",
    "abilities",
    "experience_growth",
    "base_happiness",
    "against_bug",
    "against_dark",
    "against_dragon",
    "against_electric",
    "against_fairy",
    "against_fighting",
    "against_fire",
    "against_flying",
    "against_ghost",
    "against_grass",
    "against_ground",
    "against_ice",
    "against_normal",
    "against_poison",
    "against_psychic",
    "against_rock",
    "against_steel",
    "against_water",
    "hp",
    "attack",
    "defense",
    "sp_attack",
    "sp_defense",
    "speed",
    "generation",
    "is_legendary",
];

// Columns are matched by header, so source files in any column order load the same.
#[derive(Debug, Deserialize)]
struct RawSpecies {
    name: String,
    japanese_name: String,
    pokedex_number: u32,
    percentage_male: Option<f64>,
    type1: String,
    type2: Option<String>,
    classification: String,
    height_m: Option<f64>,
    weight_kg: Option<f64>,
    capture_rate: String,
    base_egg_steps: u32,
    abilities: String,
    experience_growth: u64,
    base_happiness: u32,
    against_bug: f64,
    against_dark: f64,
    against_dragon: f64,
    against_electric: f64,
    against_fairy: f64,
    #[serde(alias = "against_fight")]
    against_fighting: f64,
    against_fire: f64,
    against_flying: f64,
    against_ghost: f64,
    against_grass: f64,
    against_ground: f64,
    against_ice: f64,
    against_normal: f64,
    against_poison: f64,
    against_psychic: f64,
    against_rock: f64,
    against_steel: f64,
    against_water: f64,
    hp: u32,
    attack: u32,
    defense: u32,
    sp_attack: u32,
    sp_defense: u32,
    speed: u32,
    generation: u8,
    is_legendary: u8,
}

impl RawSpecies {
    fn matchups(&self) -> TypeMatchups {
        let values: [f64; TYPE_COUNT] = [
            self.against_bug,
            self.against_dark,
            self.against_dragon,
            self.against_electric,
            self.against_fairy,
            self.against_fighting,
            self.against_fire,
            self.against_flying,
            self.against_ghost,
            self.against_grass,
            self.against_ground,
            self.against_ice,
            self.against_normal,
            self.against_poison,
            self.against_psychic,
            self.against_rock,
            self.against_steel,
            self.against_water,
        ];
        TypeMatchups::from_array(values)
    }

    fn into_species(self, row: usize) -> Result<Species, DatasetError> {
        let parse_type = |tag: &str| {
            tag.parse::<Type>().map_err(|source| DatasetError::Type {
                row,
                name: self.name.clone(),
                source,
            })
        };
        let primary_type = parse_type(&self.type1)?;
        let secondary_type = match self.type2.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => Some(parse_type(tag)?),
            _ => None,
        };
        let capture_rate =
            parse_capture_rate(&self.capture_rate).map_err(|source| DatasetError::CaptureRate {
                row,
                name: self.name.clone(),
                source,
            })?;
        let matchups = self.matchups();
        Ok(Species {
            stats: BaseStats {
                hp: self.hp,
                attack: self.attack,
                defense: self.defense,
                sp_attack: self.sp_attack,
                sp_defense: self.sp_defense,
                speed: self.speed,
            },
            abilities: parse_abilities(&self.abilities),
            is_legendary: self.is_legendary != 0,
            name: self.name,
            japanese_name: self.japanese_name,
            pokedex_number: self.pokedex_number,
            percentage_male: self.percentage_male,
            primary_type,
            secondary_type,
            classification: self.classification,
            height_m: self.height_m,
            weight_kg: self.weight_kg,
            capture_rate,
            base_egg_steps: self.base_egg_steps,
            experience_growth: self.experience_growth,
            base_happiness: self.base_happiness,
            matchups,
            generation: self.generation,
        })
    }
}

/// The species table, keyed by name with a secondary index on primary type.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    species: Vec<Species>,
    by_name: HashMap<String, usize>,
    by_primary_type: HashMap<Type, Vec<usize>>,
}

impl Pokedex {
    pub fn load(path: &Path) -> Result<Pokedex, DatasetError> {
        let file = std::fs::File::open(path)?;
        let pokedex = Pokedex::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            species = pokedex.len(),
            "loaded species dataset"
        );
        Ok(pokedex)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Pokedex, DatasetError> {
        let mut reader = csv::Reader::from_reader(rdr);
        check_columns(reader.headers()?)?;
        let mut species = Vec::new();
        for (idx, record) in reader.deserialize::<RawSpecies>().enumerate() {
            species.push(record?.into_species(idx + 1)?);
        }
        Pokedex::from_species(species)
    }

    pub fn from_species(species: Vec<Species>) -> Result<Pokedex, DatasetError> {
        let mut by_name = HashMap::with_capacity(species.len());
        let mut by_primary_type: HashMap<Type, Vec<usize>> = HashMap::new();
        for (idx, s) in species.iter().enumerate() {
            if by_name.insert(s.name.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateName(s.name.clone()));
            }
            by_primary_type.entry(s.primary_type).or_default().push(idx);
        }
        tracing::debug!(
            species = species.len(),
            primary_types = by_primary_type.len(),
            "indexed species table"
        );
        Ok(Pokedex {
            species,
            by_name,
            by_primary_type,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.by_name.get(name).map(|&idx| &self.species[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Species whose primary type is `ty`, in dataset order.
    pub fn of_primary_type(&self, ty: Type) -> impl Iterator<Item = &Species> + '_ {
        self.by_primary_type
            .get(&ty)
            .into_iter()
            .flatten()
            .map(|&idx| &self.species[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> + '_ {
        self.species.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.species.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    let has = |column: &str| headers.iter().any(|h| h.trim() == column);
    for column in COLUMNS {
        if has(column) || (column == "against_fighting" && has("against_fight")) {
            continue;
        }
        return Err(DatasetError::MissingColumn(column));
    }
    Ok(())
}
