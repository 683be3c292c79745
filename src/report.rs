use crate::engine::{AggregateEntry, Leaderboard};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unknown format {other} (use table, csv or json)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
}

impl Cell {
    fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Int(n) => Value::from(*n),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Column projection of a leaderboard, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// name, type1, the algorithm's own columns, then score.
pub fn leaderboard_report(board: &Leaderboard<'_>) -> Report {
    let columns = board.algorithm.display_columns();
    let mut headers = vec!["name", "type1"];
    headers.extend(columns.iter().map(|c| c.header()));
    headers.push("score");

    let rows = board
        .entries
        .iter()
        .map(|entry| {
            let species = entry.species;
            let mut row = vec![
                Cell::Text(species.name.clone()),
                Cell::Text(species.primary_type.to_string()),
            ];
            row.extend(
                columns
                    .iter()
                    .map(|c| Cell::Int(i64::from(c.value(species)))),
            );
            row.push(Cell::Int(entry.score));
            row
        })
        .collect();
    Report { headers, rows }
}

pub fn aggregate_report(entries: &[AggregateEntry]) -> Report {
    Report {
        headers: vec!["name", "score"],
        rows: entries
            .iter()
            .map(|e| vec![Cell::Text(e.name.clone()), Cell::Int(e.score)])
            .collect(),
    }
}

pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Csv => render_csv(report),
        OutputFormat::Json => render_json(report),
    }
}

fn render_table(report: &Report) -> String {
    let index_width = report.rows.len().saturating_sub(1).to_string().len();
    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    let widths: Vec<usize> = report
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row[col].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (header, width) in report.headers.iter().zip(widths.iter().copied()) {
        out.push_str(&format!("  {header:<width$}"));
    }
    for (idx, row) in cells.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{idx:<index_width$}"));
        for (cell, width) in row.iter().zip(widths.iter().copied()) {
            out.push_str(&format!("  {cell:<width$}"));
        }
    }
    out.push('\n');
    out
}

fn render_csv(report: &Report) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row.iter().map(|c| c.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

fn render_json(report: &Report) -> anyhow::Result<String> {
    let rows: Vec<Value> = report
        .rows
        .iter()
        .map(|row| {
            let object: Map<String, Value> = report
                .headers
                .iter()
                .zip(row)
                .map(|(header, cell)| (header.to_string(), cell.to_json()))
                .collect();
            Value::Object(object)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
