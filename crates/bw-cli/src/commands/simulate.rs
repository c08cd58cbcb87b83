use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use tracing::debug;

use bw_board::{Distribution, SimConfig, Simulation, SquareShare};

use super::{OutputFormat, heading, print_json};

pub fn run(
    turns: u64,
    seed: Option<u64>,
    workers: usize,
    format: OutputFormat,
    ranked: bool,
) -> Result<(), String> {
    let config = SimConfig::default().with_turns(turns).with_workers(workers);
    let config = match seed {
        Some(seed) => config.with_seed(seed),
        None => config.with_random_seed(),
    };

    let sim = Simulation::new(config).map_err(|e| e.to_string())?;
    let dist = sim.run().map_err(|e| format!("simulation error: {e}"))?;
    debug!(?format, ranked, "rendering distribution");

    match format {
        OutputFormat::Json => print_json(&dist),
        OutputFormat::Plain => {
            for share in ordered(&dist, ranked) {
                println!("{} {} {}", share.index, share.label, share.percentage);
            }
            Ok(())
        }
        OutputFormat::Table => {
            print_table(&dist, ranked);
            Ok(())
        }
    }
}

fn ordered(dist: &Distribution, ranked: bool) -> Vec<&SquareShare> {
    if ranked {
        dist.ranked()
    } else {
        dist.squares.iter().collect()
    }
}

fn print_table(dist: &Distribution, ranked: bool) {
    println!(
        "  {} {}",
        "Landing distribution".bold(),
        format!(
            "({} turns, seed={}, workers={})",
            dist.turns, dist.seed, dist.workers
        )
        .dimmed()
    );
    println!(
        "  {} landings in {:.3}s",
        dist.total_landings(),
        dist.elapsed.as_secs_f64()
    );
    println!();
    println!("{}", heading("Squares"));
    println!();

    let mean = dist.percentage_sum() / dist.squares.len().max(1) as f64;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Square", "Kind", "Landings", "Per 100 turns"]);
    for share in ordered(dist, ranked) {
        table.add_row(vec![
            share.index.to_string(),
            share.label.clone(),
            share.kind.to_string(),
            share.visits.to_string(),
            format_percentage(share.percentage, mean),
        ]);
    }
    for col in [0, 3, 4] {
        if let Some(column) = table.column_mut(col) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");
    println!();
    println!(
        "  Percentages are per 100 turns and sum to {:.2}.",
        dist.percentage_sum()
    );
}

/// Colour a percentage relative to the board-wide mean.
fn format_percentage(value: f64, mean: f64) -> String {
    let text = format!("{value:.3}");
    if value >= mean * 1.25 {
        text.green().bold().to_string()
    } else if value <= mean * 0.75 {
        text.red().to_string()
    } else {
        text
    }
}
