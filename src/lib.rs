pub mod dataset;
pub mod engine;
pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod scoring;
pub mod types;

pub use crate::dataset::Pokedex;
pub use crate::engine::{AggregateEntry, EffectiveTypes, Leaderboard, ScoredCandidate, TeamBuilder};
pub use crate::error::{DatasetError, ScoreError};
pub use crate::report::OutputFormat;
pub use crate::scoring::Algorithm;
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub dataset_path: PathBuf,
    pub team_path: PathBuf,
    /// `None` sums the scores of every algorithm.
    pub algorithm: Option<Algorithm>,
    pub format: OutputFormat,
    pub output_path: Option<PathBuf>,
    pub random_seed: Option<u64>,
    pub prompt: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("pokemon.csv"),
            team_path: PathBuf::from("pokemon_team.txt"),
            algorithm: None,
            format: OutputFormat::Table,
            output_path: None,
            random_seed: None,
            prompt: true,
        }
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let pokedex = Pokedex::load(&opts.dataset_path).with_context(|| {
        format!("Failed to load dataset from {}", opts.dataset_path.display())
    })?;

    let team = match opts.random_seed {
        Some(seed) => {
            let team = roster::random_team(&pokedex, seed);
            eprintln!("Opposing team (seed {seed}): {}", team.join(", "));
            team
        }
        None => {
            roster::ensure_team_file(&opts.team_path, opts.prompt, std::io::stdin().lock())?;
            roster::read_team(&opts.team_path)?
        }
    };
    tracing::info!(team = ?team, algorithm = ?opts.algorithm, "building counter team");

    let builder = TeamBuilder::new(&pokedex);
    let report = match opts.algorithm {
        Some(algorithm) => report::leaderboard_report(&builder.run_single(&team, algorithm)),
        None => report::aggregate_report(&builder.run_aggregate(&team)),
    };
    let rendered = report::render(&report, opts.format)?;

    match &opts.output_path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            println!("Wrote {} rows to {}", report.rows.len(), path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
