// Copyright (C) 2025 PotOdds Developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example prognosis -- --hero "AS AH" --board "KD 7C 2S"
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::error;

use potodds_equity::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The hero hole cards, e.g. "AS AH".
    #[clap(long)]
    hero: String,
    /// The known board cards, e.g. "KD 7C 2S".
    #[clap(long, short, default_value = "")]
    board: String,
    /// The number of opponents at the table.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=9))]
    opponents: u8,
    /// The number of opponents that folded.
    #[clap(long, short, default_value_t = 0)]
    folded: u8,
    /// The simulation strategy (monteCarlo, heuristic, exactOdds).
    #[clap(long, short, default_value = "monteCarlo")]
    strategy: Strategy,
    /// The number of iterations, defaults to a budget for the street.
    #[clap(long, short)]
    iterations: Option<u32>,
}

async fn run(cli: Cli) -> Result<()> {
    let hero = parse_cards(&cli.hero)?;
    let board = parse_cards(&cli.board)?;
    if hero.len() != 2 {
        bail!("Expected 2 hero cards, got {}", hero.len());
    }

    if board.len() > 5 {
        bail!("Expected at most 5 board cards, got {}", board.len());
    }

    let state = HandState::with_cards(&hero, &board)
        .with_opponents(cli.opponents as usize, cli.folded as usize);
    let config = PrognosisConfig {
        strategy: cli.strategy,
        iterations: cli.iterations,
    };

    let prognosticator = Prognosticator::new();
    prognosticator.request(&state, &config).await?;

    println!("Street:           {}", state.street());
    println!("Strategy:         {}", config.strategy);
    println!("Opponents:        {}", state.active_opponents());
    if let Some(class) = state.hand_class() {
        println!("Hand class:       {class}");
    }

    if let Some(outs) = state.outs(0) {
        println!("Next card outs:   {}/{}", outs.available, outs.baseline);
    }

    let Some(prognosis) = prognosticator.latest() else {
        println!("\nNo data yet");
        return Ok(());
    };

    println!();
    for item in &prognosis.items {
        let label = format!("{}:", item.label());
        println!("{label:<17} {:5.1}%", item.rounded_percent());
    }

    println!("\nImprovement:      {:.1}%", prognosis.improvement_chance);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
    }
}
