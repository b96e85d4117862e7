//! `iniconf` — command-line access to INI configuration files.
//!
//! A thin shell over `iniconf-core`: every subcommand loads a file into a
//! [`Store`], applies one operation, and (for mutations) writes the file
//! back in the canonical layout.  Because the writer's output is canonical,
//! any edit also normalises the file's formatting.
//!
//! # Usage
//!
//! ```text
//! iniconf get      <FILE> <SECTION> <KEY> [--default <VALUE>] [--type <TYPE>]
//! iniconf set      <FILE> <SECTION> <KEY> <VALUE>
//! iniconf unset    <FILE> <SECTION> [KEY]
//! iniconf sections <FILE>
//! iniconf keys     <FILE> <SECTION>
//! iniconf merge    <OUTPUT> <INPUTS>...
//! iniconf dump     <FILE> [--format ini|json]
//! ```
//!
//! Log verbosity is controlled by `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use iniconf_core::Store;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit INI configuration files from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "iniconf",
    about = "Inspect and edit INI configuration files",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the value stored under SECTION and KEY.
    Get {
        file: PathBuf,
        section: String,
        key: String,
        /// Value to print when the key is missing or fails the --type check.
        #[arg(long)]
        default: Option<String>,
        /// Interpret the value as this type before printing it.
        #[arg(long = "type", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },

    /// Set SECTION.KEY to VALUE, creating the file if necessary.
    Set {
        file: PathBuf,
        section: String,
        key: String,
        value: String,
    },

    /// Remove one key, or the whole section when KEY is omitted.
    Unset {
        file: PathBuf,
        section: String,
        key: Option<String>,
    },

    /// List all section names, one per line.
    Sections { file: PathBuf },

    /// List all key names under SECTION, one per line.
    Keys { file: PathBuf, section: String },

    /// Overlay INPUTS left to right into one store and write it to OUTPUT.
    Merge {
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Print the whole file in canonical INI or as JSON.
    Dump {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = DumpFormat::Ini)]
        format: DumpFormat,
    },
}

/// Typed interpretation applied by `get --type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    String,
    Int,
    Float,
    Bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Ini,
    Json,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Get {
            file,
            section,
            key,
            default,
            value_type,
        } => get(file, &section, &key, default, value_type),
        Command::Set {
            file,
            section,
            key,
            value,
        } => set(file, &section, &key, &value),
        Command::Unset { file, section, key } => unset(file, &section, key.as_deref()),
        Command::Sections { file } => {
            let store = load(&file)?;
            for name in store.sections() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Keys { file, section } => {
            let store = load(&file)?;
            for name in store.keys(&section) {
                println!("{name}");
            }
            Ok(())
        }
        Command::Merge { output, inputs } => merge(output, &inputs),
        Command::Dump { file, format } => dump(file, format),
    }
}

// ── Subcommand implementations ────────────────────────────────────────────────

fn load(file: &PathBuf) -> anyhow::Result<Store> {
    Store::from_path(file).with_context(|| format!("failed to load {}", file.display()))
}

fn get(
    file: PathBuf,
    section: &str,
    key: &str,
    default: Option<String>,
    value_type: ValueType,
) -> anyhow::Result<()> {
    let store = load(&file)?;

    // Typed getters fold "absent" and "not parseable as the requested type"
    // into one miss, which then falls back to --default when given.
    let value = match value_type {
        ValueType::String => store.get_as::<String>(section, key),
        ValueType::Int => store.get_as::<i64>(section, key).map(|v| v.to_string()),
        ValueType::Float => store.get_as::<f64>(section, key).map(|v| v.to_string()),
        ValueType::Bool => store.get_as::<bool>(section, key).map(|v| v.to_string()),
    };

    match value.or(default) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => bail!(
            "no {:?} value for {section}.{key} in {}",
            value_type,
            file.display()
        ),
    }
}

fn set(file: PathBuf, section: &str, key: &str, value: &str) -> anyhow::Result<()> {
    // Missing file means "start from an empty store" — `set` is how a config
    // file comes into existence in the first place.
    let mut store = if file.exists() {
        load(&file)?
    } else {
        info!("{} does not exist yet, creating it", file.display());
        Store::new()
    };

    store.set(section, key, value);
    store
        .write_path(&file)
        .with_context(|| format!("failed to write {}", file.display()))?;

    info!("set {section}.{key} in {}", file.display());
    Ok(())
}

fn unset(file: PathBuf, section: &str, key: Option<&str>) -> anyhow::Result<()> {
    let mut store = load(&file)?;

    let removed = match key {
        Some(key) => store.remove_value(section, key),
        None => store.remove_section(section),
    };
    if !removed {
        bail!(
            "nothing to remove: {section}{} not found in {}",
            key.map(|k| format!(".{k}")).unwrap_or_default(),
            file.display()
        );
    }

    store
        .write_back()
        .with_context(|| format!("failed to write {}", file.display()))?;

    info!("updated {}", file.display());
    Ok(())
}

fn merge(output: PathBuf, inputs: &[PathBuf]) -> anyhow::Result<()> {
    let mut store = Store::new();
    for input in inputs {
        store
            .merge_path(input)
            .with_context(|| format!("failed to merge {}", input.display()))?;
    }

    store
        .write_path(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!(
        "merged {} file(s) into {}",
        inputs.len(),
        output.display()
    );
    Ok(())
}

fn dump(file: PathBuf, format: DumpFormat) -> anyhow::Result<()> {
    let store = load(&file)?;

    match format {
        DumpFormat::Ini => print!("{store}"),
        DumpFormat::Json => {
            let json = serde_json::to_string_pretty(&store)
                .context("failed to render the store as JSON")?;
            println!("{json}");
        }
    }
    Ok(())
}
