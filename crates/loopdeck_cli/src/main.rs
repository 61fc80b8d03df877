//! Loopdeck CLI
//!
//! Drives the carousel engine headlessly for inspection and debugging.

mod config;
mod script;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::LoopdeckConfig;
use crate::simulate::Simulation;

#[derive(Parser)]
#[command(name = "loopdeck")]
#[command(author, version, about = "Loopdeck carousel engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to loopdeck.toml (defaults to ./loopdeck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted carousel session and print its state after each step
    Simulate {
        /// Number of blocks
        #[arg(short, long)]
        items: Option<usize>,

        /// Container width in px
        #[arg(short, long)]
        width: Option<f32>,

        /// Comma-separated steps: f, b, r:<width>, t:<x>:<dx>:<ms>
        #[arg(short, long, default_value = "")]
        script: String,
    },

    /// Inspect configuration
    Config {
        /// Print the built-in defaults instead of the resolved file
        #[arg(long)]
        print_default: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("loopdeck=debug,loopdeck_carousel=debug,loopdeck_animation=debug,loopdeck_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Simulate {
            items,
            width,
            script,
        } => cmd_simulate(cli.config, items, width, &script),
        Commands::Config { print_default } => cmd_config(cli.config, print_default),
    }
}

fn cmd_simulate(
    config_path: Option<PathBuf>,
    items: Option<usize>,
    width: Option<f32>,
    script: &str,
) -> Result<()> {
    let mut config = LoopdeckConfig::load_or_default(config_path.as_deref())?;
    if let Some(items) = items {
        config.simulation.items = items;
    }
    if let Some(width) = width {
        config.simulation.width = width;
    }

    let steps = script::parse_script(script).context("Invalid --script")?;
    tracing::info!(
        "simulating {} block(s) at {}px, {} step(s)",
        config.simulation.items,
        config.simulation.width,
        steps.len()
    );

    let mut sim = Simulation::new(&config.simulation, config.carousel)
        .context("Failed to mount carousel")?;

    println!("initial");
    println!("{}", sim.snapshot());
    for (i, step) in steps.into_iter().enumerate() {
        let outcome = sim.apply(step);
        println!("step {} @ {:.0}ms: {}", i + 1, sim.clock_ms(), outcome);
        println!("{}", sim.snapshot());
    }

    Ok(())
}

fn cmd_config(config_path: Option<PathBuf>, print_default: bool) -> Result<()> {
    let config = if print_default {
        LoopdeckConfig::default()
    } else {
        LoopdeckConfig::load_or_default(config_path.as_deref())?
    };
    print!("{}", config.to_toml()?);
    Ok(())
}
