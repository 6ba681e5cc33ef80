use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crown_config::Config;
use tracing_subscriber::EnvFilter;

pub mod assets;
pub mod run;


/// Attach dish images to the items of a menu JSON document
#[derive(Debug, Parser)]
#[command(name = "menu-images", version)]
struct Args {
    /// Menu document to rewrite [default: menu-new.json]
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,

    /// JSON config file with catalog and section overrides
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Resolve and print, but leave the file untouched
    #[arg(long)]
    dry_run: bool,

    /// Warn about catalog images missing from the public dir
    #[arg(long)]
    check_assets: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };

    let menu_path = args
        .menu
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.menu.path));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let options = run::RunOptions {
        menu_path,
        dry_run: args.dry_run,
        check_assets: args.check_assets,
    };
    run::run(&config, &options, &mut out).context("menu image update failed")?;

    out.flush()?;
    Ok(())
}
