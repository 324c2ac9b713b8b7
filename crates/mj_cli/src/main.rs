use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use mj_subst::{lint, process_files, substitute};
use mj_tables::MacroConfig;

#[derive(Parser)]
#[command(name = "mj", about = "macrojs — macro-substitution preprocessor for token source files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every configured source file and append the token enum.
    Build {
        /// Directory holding the .source.js files.
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Apply keyword and property substitution.
        #[arg(long)]
        replace: bool,
        /// JSON file overriding the built-in configuration.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Substitute a single file and print or write the result.
    Sub {
        /// Input file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate the substitution tables and report ordering hazards.
    Check {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Dump the effective configuration.
    Tables {
        /// Emit JSON instead of the debug form.
        #[arg(long)]
        json: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&Path>) -> Result<MacroConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(MacroConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            root,
            replace,
            config,
        } => {
            let mut config = load_config(config.as_deref())?;
            if replace {
                config.replace = true;
            }

            let written = process_files(&root, &config)?;
            for path in written {
                eprintln!("wrote {}", path.display());
            }
        }
        Commands::Sub {
            input,
            output,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let source = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let replaced = substitute(&source, &config.keywords, &config.properties);

            match &output {
                Some(path) => std::fs::write(path, &replaced)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{replaced}"),
            }
        }
        Commands::Check { config } => {
            let config = load_config(config.as_deref())?;

            let mut fatal = 0;
            for issue in lint(&config) {
                if issue.is_fatal() {
                    fatal += 1;
                    eprintln!("error: {issue}");
                } else {
                    eprintln!("warning: {issue}");
                }
            }
            if fatal > 0 {
                bail!("{fatal} table error(s)");
            }
            eprintln!(
                "OK: {} keywords, {} properties",
                config.keywords.len(),
                config.properties.len()
            );
        }
        Commands::Tables { json, config } => {
            let config = load_config(config.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{config:#?}");
            }
        }
    }

    Ok(())
}
