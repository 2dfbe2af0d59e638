//! plotdeck — a terminal carousel for featured property listings

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};

mod catalog;
mod config;
mod models;
mod pager;
mod tui;

use catalog::{Catalog, FileCatalog, SeedCatalog};
use config::DeckConfig;
use models::Property;

#[derive(Parser)]
#[command(name = "plotdeck", version, about = "Browse featured property listings in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Viewer is signed in (unlocks Book/View actions)
    #[arg(long, global = true)]
    authenticated: bool,

    /// Catalog JSON file (defaults to the built-in seed catalog)
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Cards per carousel page
    #[arg(long, global = true, value_name = "N")]
    page_size: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive carousel (default)
    Browse,
    /// Print the catalog as a table
    List,
    /// Export the built-in seed catalog as JSON
    Seed {
        /// Output file
        #[arg(long, value_name = "PATH")]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(mut cli: Cli) -> Result<()> {
    let config = DeckConfig::load()?;

    match cli.command.take().unwrap_or(Commands::Browse) {
        Commands::Browse => browse(&cli, &config),
        Commands::List => list(&cli, &config),
        Commands::Seed { out } => seed(&out),
    }
}

/// Load the catalog picked by flag, config, or fallback to the seed data
fn load_properties(cli: &Cli, config: &DeckConfig) -> Result<Vec<Property>> {
    let path = cli.catalog.as_ref().or(config.catalog.as_ref());
    match path {
        Some(path) => {
            let catalog = FileCatalog::load(path)?;
            Ok(catalog.properties().to_vec())
        }
        None => Ok(SeedCatalog::new().properties().to_vec()),
    }
}

fn browse(cli: &Cli, config: &DeckConfig) -> Result<()> {
    let properties = load_properties(cli, config)?;
    let page_size = cli.page_size.unwrap_or(config.page_size);
    let theme_variant = tui::theme::ThemeVariant::from_config_theme(config.theme);

    let mut app = tui::App::new(properties, page_size, cli.authenticated, theme_variant);
    tui::run(&mut app)?;

    // Keep a theme cycled with `t` for the next session
    let final_theme = app.theme_variant.to_config_theme();
    if final_theme != config.theme {
        let mut updated = config.clone();
        updated.theme = final_theme;
        updated.save()?;
    }
    Ok(())
}

fn list(cli: &Cli, config: &DeckConfig) -> Result<()> {
    let properties = load_properties(cli, config)?;
    if properties.is_empty() {
        println!("{}", "No properties in catalog".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Name",
        "Location",
        "Price",
        "Specification",
        "Plots",
        "RERA",
    ]);
    for prop in &properties {
        table.add_row(vec![
            prop.name.clone(),
            prop.location(),
            prop.price_line(),
            prop.specification.clone(),
            prop.total_plots.to_string(),
            prop.rera_number.clone(),
        ]);
    }
    println!("{table}");
    println!("{} listings", properties.len().to_string().green().bold());
    Ok(())
}

fn seed(out: &PathBuf) -> Result<()> {
    let properties = catalog::seed_properties();
    let json = serde_json::to_string_pretty(&properties).context("failed to serialize seed catalog")?;
    std::fs::write(out, json)
        .with_context(|| format!("failed to write seed catalog to {}", out.display()))?;
    println!(
        "{} wrote {} listings to {}",
        "ok:".green().bold(),
        properties.len(),
        out.display()
    );
    Ok(())
}
