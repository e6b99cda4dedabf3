use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unitconv::config::Config;
use unitconv::engine;
use unitconv::table::ConversionTable;

#[derive(Parser)]
#[command(name = "unitconv")]
#[command(about = "Convert values between units of length, temperature, area, volume, weight and time", long_about = None)]
struct Cli {
    /// Config file (default: ./unitconv.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Category key (e.g., "length", "temp")
        category: String,

        /// Source unit (e.g., "meter")
        from: String,

        /// Target unit (e.g., "kilometer")
        to: String,

        /// Value to convert; leading number is used, as in "12.5 m"
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List all categories
    Categories,

    /// List the units of a category in declaration order
    Units {
        /// Category key
        category: String,
    },

    /// Export the conversion table as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    let table = load_table(&config);

    match cli.command {
        Commands::Convert {
            category,
            from,
            to,
            value,
        } => convert_value(&table, &config, &category, &from, &to, &value),
        Commands::Categories => list_categories(&table),
        Commands::Units { category } => list_units(&table, &category),
        Commands::Export { output } => export_table(&table, output.as_deref()),
    }
}

fn load_table(config: &Config) -> ConversionTable {
    let (table, mut validation) = ConversionTable::from_config(config);
    validation.merge(config.validate(&table));

    // Print validation issues if any
    if validation.has_issues() {
        eprint!("{}", validation);
    }

    table
}

fn convert_value(
    table: &ConversionTable,
    config: &Config,
    category: &str,
    from: &str,
    to: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    match engine::convert_text_with(table, category, from, to, value, config.decimals()) {
        Ok(text) => println!("{}", text),
        // Not a number: blank output, not an error
        Err(e) if e.is_blank() => println!(),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn list_categories(table: &ConversionTable) -> Result<(), Box<dyn std::error::Error>> {
    for category in table.categories() {
        println!(
            "{:<12} {} (base: {})",
            category.key, category.title, category.base_unit
        );
    }
    Ok(())
}

fn list_units(table: &ConversionTable, key: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category = table
        .category(key)
        .ok_or_else(|| engine::ConversionError::UnknownCategory(key.to_string()))?;

    println!("{} ({} units):", category.title, category.units.len());
    for unit in category.unit_names() {
        println!("  - {}", unit);
    }
    Ok(())
}

fn export_table(
    table: &ConversionTable,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(table)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Table exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
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
    fn test_parse_negative_value() {
        let cli = Cli::parse_from(["unitconv", "convert", "temp", "celsius", "kelvin", "-40"]);
        match cli.command {
            Commands::Convert { category, value, .. } => {
                assert_eq!(category, "temp");
                assert_eq!(value, "-40");
            }
            _ => panic!("Expected Convert"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["unitconv", "units", "length", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
