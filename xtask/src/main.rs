//! Development tasks: options schema export and preset maintenance.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use boardcam::options::Options;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xtask")]
#[command(about = "Development tasks for boardcam")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the JSON schema of the UI-exposed options
    Schema {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Create or check option presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand, Debug)]
enum PresetAction {
    /// Write the default options as a new preset
    New {
        /// Preset name (file stem)
        name: String,
        /// Preset directory
        #[arg(long, default_value = "presets")]
        dir: PathBuf,
        /// Overwrite an existing preset
        #[arg(long)]
        force: bool,
    },
    /// Parse every preset and report failures
    Check {
        /// Preset directory
        #[arg(long, default_value = "presets")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Schema { out } => schema(out.as_deref()),
        Command::Preset { action } => match action {
            PresetAction::New { name, dir, force } => new_preset(&dir, &name, force),
            PresetAction::Check { dir } => check_presets(&dir),
        },
    }
}

fn schema(out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&Options::json_schema())
        .context("serializing options schema")?;
    match out {
        Some(path) => std::fs::write(path, json + "\n")
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn new_preset(dir: &Path, name: &str, force: bool) -> Result<()> {
    let path = dir.join(format!("{name}.toml"));
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Options::default()
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn check_presets(dir: &Path) -> Result<()> {
    let names = Options::list_presets(dir);
    if names.is_empty() {
        bail!("no presets found in {}", dir.display());
    }
    let mut failures = 0;
    for name in &names {
        match Options::load_preset(dir, name) {
            Ok(_) => println!("ok    {name}"),
            Err(e) => {
                println!("FAIL  {name}: {e}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} presets failed to parse", names.len());
    }
    Ok(())
}
