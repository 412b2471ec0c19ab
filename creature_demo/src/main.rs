//! creature_demo - Prints runtime info and exercises the creature accessors
//!
//! Usage: `creature_demo [settings.toml] [--json]`

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use creature_core::config::load_toml;
use creature_core::{Creature, DemoSettings};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let settings = match &args.settings {
        Some(path) => load_toml::<DemoSettings>(path)
            .with_context(|| format!("loading demo settings from {}", path.display()))?,
        None => DemoSettings::default(),
    };
    tracing::debug!(?settings, "demo settings");

    let exe = std::env::current_exe().context("resolving current executable")?;
    println!("{}", exe.display());
    println!("{}", report::version_line());

    let mut creature = Creature::new();
    print!("{}", report::stat_lines(&creature));

    settings.apply(&mut creature);
    print!("{}", report::stat_lines(&creature));

    if args.json {
        let json = serde_json::to_string_pretty(&creature).context("serializing creature")?;
        println!("{json}");
    }

    tracing::info!(%creature, "demo finished");
    Ok(())
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
