use crate::dataset::Pokedex;
use crate::engine::TEAM_SIZE;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::BufRead;
use std::path::Path;

/// First [`TEAM_SIZE`] non-empty lines of the team file.
pub fn read_team(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file at {}", path.display()))?;
    Ok(parse_team(&raw))
}

pub fn parse_team(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TEAM_SIZE)
        .map(str::to_string)
        .collect()
}

/// Creates an empty team file when missing, then asks the operator to fill it in.
/// With `prompt` set, blocks until a line is read from `input`.
pub fn ensure_team_file<R: BufRead>(path: &Path, prompt: bool, input: R) -> anyhow::Result<()> {
    if !path.exists() {
        std::fs::File::create(path)
            .with_context(|| format!("Failed to create team file at {}", path.display()))?;
        println!("File has been created");
    }
    if prompt {
        println!(
            "Enter the names of SIX Pokemon in {}, on separate lines, then press Enter.",
            path.display()
        );
        wait_for_enter(input)?;
    }
    Ok(())
}

fn wait_for_enter<R: BufRead>(mut input: R) -> anyhow::Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read confirmation from stdin")?;
    Ok(())
}

/// Draws [`TEAM_SIZE`] distinct species; the same seed always yields the same team.
pub fn random_team(pokedex: &Pokedex, seed: u64) -> Vec<String> {
    let mut rng = SmallRng::seed_from_u64(seed);
    pokedex
        .names()
        .choose_multiple(&mut rng, TEAM_SIZE)
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BaseStats, Species, TypeMatchups};
    use crate::types::Type;
    use std::collections::HashSet;

    #[test]
    fn keeps_first_six_non_empty_lines() {
        let text = "Pikachu\n\nCharizard\r\n  Snorlax  \nGengar\nLapras\nDragonite\nMewtwo\n";
        assert_eq!(
            parse_team(text),
            vec!["Pikachu", "Charizard", "Snorlax", "Gengar", "Lapras", "Dragonite"]
        );
    }

    #[test]
    fn short_team_is_accepted() {
        assert_eq!(parse_team("Pikachu\nEevee"), vec!["Pikachu", "Eevee"]);
        assert!(parse_team("").is_empty());
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokemon_team.txt");
        ensure_team_file(&path, true, "\n".as_bytes()).unwrap();
        assert!(path.exists());
        assert!(read_team(&path).unwrap().is_empty());
    }

    #[test]
    fn existing_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("team.txt");
        std::fs::write(&path, "Pikachu\n").unwrap();
        ensure_team_file(&path, false, std::io::empty()).unwrap();
        assert_eq!(read_team(&path).unwrap(), vec!["Pikachu"]);
    }

    #[test]
    fn random_team_is_seeded_and_distinct() {
        let species: Vec<Species> = (0..20)
            .map(|i| {
                Species::new(
                    &format!("Mon{i}"),
                    Type::Normal,
                    BaseStats::default(),
                    45,
                    TypeMatchups::default(),
                )
            })
            .collect();
        let dex = Pokedex::from_species(species).unwrap();
        let team = random_team(&dex, 7);
        assert_eq!(team.len(), TEAM_SIZE);
        assert_eq!(team.iter().collect::<HashSet<_>>().len(), TEAM_SIZE);
        assert_eq!(team, random_team(&dex, 7));
    }
}
