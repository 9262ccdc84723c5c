use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use egeria_core::config::DEFAULT_LOG_LEVEL;
use egeria_core::{
    Config, DomainEntity, DomainRelationship, EntityDetail, MapperContext, MappingCatalog,
    Relationship,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "egeria")]
#[command(about = "Map open metadata graph instances to typed beans and back", long_about = None)]
struct Cli {
    /// Configuration file to use instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a generic instance (JSON) into its typed bean
    Decode {
        /// Instance file, or - for stdin
        file: PathBuf,
        /// The file holds a relationship rather than an entity
        #[arg(long)]
        relationship: bool,
    },
    /// Encode a typed bean (JSON tagged with typeName) into a generic instance
    Encode {
        /// Bean file, or - for stdin
        file: PathBuf,
        /// The file holds a relationship bean rather than an entity bean
        #[arg(long)]
        relationship: bool,
    },
    /// List the bundled types and their properties
    Types,
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("failed to load config")?,
    };
    init_logging(&config);

    match cli.command {
        Commands::Decode { file, relationship } => {
            let catalog = catalog(&config)?;
            let input = read_input(&file)?;
            if relationship {
                let instance: Relationship = serde_json::from_str(&input)
                    .wrap_err("input is not a relationship instance")?;
                print_json(&catalog.decode_relationship(&instance)?)?;
            } else {
                let instance: EntityDetail =
                    serde_json::from_str(&input).wrap_err("input is not an entity instance")?;
                print_json(&catalog.decode_entity(&instance)?)?;
            }
        }
        Commands::Encode { file, relationship } => {
            let catalog = catalog(&config)?;
            let input = read_input(&file)?;
            if relationship {
                let bean: DomainRelationship = serde_json::from_str(&input)
                    .wrap_err("input is not a bundled relationship bean")?;
                print_json(&catalog.encode_relationship(&bean)?)?;
            } else {
                let bean: DomainEntity = serde_json::from_str(&input)
                    .wrap_err("input is not a bundled entity bean")?;
                print_json(&catalog.encode_entity(&bean)?)?;
            }
        }
        Commands::Types => {
            for summary in MappingCatalog::type_summaries() {
                println!("{} ({})", summary.type_name, summary.category);
                print_names("attributes", &summary.attributes);
                print_names("enums", &summary.enums);
                print_names("maps", &summary.maps);
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays valid JSON.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn catalog(config: &Config) -> Result<MappingCatalog> {
    let context = MapperContext::from_config(config).wrap_err("failed to load type definitions")?;
    debug!(config = ?context.config(), "mapper context ready");
    Ok(MappingCatalog::new(context))
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .wrap_err("failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(file).wrap_err_with(|| format!("failed to read {}", file.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_names(label: &str, names: &[&str]) {
    if !names.is_empty() {
        println!("  {label}: {}", names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["egeria", "decode", "table.json", "--config", "alt.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Commands::Decode { relationship: false, .. }));
    }
}
