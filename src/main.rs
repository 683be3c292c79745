use pokemon_counter_team::{run, Algorithm, CliOptions};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--dataset pokemon.csv] [--team pokemon_team.txt] \
[--algorithm 1-5|normal|capture|aggressive|tank|fast|all] [--format table|csv|json] [--output PATH] \
[--random-team SEED] [--no-prompt]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dataset" => {
                opts.dataset_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--dataset requires a path (e.g. --dataset pokemon.csv)")
                })?;
            }
            "--team" => {
                opts.team_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--team requires a path (e.g. --team pokemon_team.txt)")
                })?;
            }
            "--algorithm" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--algorithm requires 1-5, a name, or all"))?;
                opts.algorithm = match val.to_ascii_lowercase().as_str() {
                    "all" | "plus" => None,
                    other => Some(other.parse::<Algorithm>()?),
                };
            }
            "--format" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--format requires table, csv or json"))?;
                opts.format = val.parse()?;
            }
            "--output" => {
                opts.output_path = Some(args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output counters.csv)")
                })?);
            }
            "--random-team" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--random-team requires a seed"))?;
                opts.random_seed = Some(val.parse()?);
            }
            "--no-prompt" => opts.prompt = false,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args()?;
    run(opts)
}
