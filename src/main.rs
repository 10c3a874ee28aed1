use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use outfind::config::OutfindConfig;
use outfind::wardrobe::{self, closet};
use outfind::{Category, ClothingItem, OutfindError, WeatherObservation, classify, logging, select_outfit};

/// Outfind CLI
#[derive(Parser)]
#[command(name = "outfind")]
#[command(about = "Outfind - weather-aware outfit recommendations from your wardrobe", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config dir, then ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Wardrobe JSON file (overrides the configured path)
    #[arg(long, global = true)]
    wardrobe: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify current conditions into a weather bucket
    Weather(WeatherArgs),

    /// Normalize a vision classifier reply into a canonical classification
    Normalize {
        /// Raw reply text or JSON record
        reply: String,
    },

    /// Inspect or edit the wardrobe
    Closet {
        #[command(subcommand)]
        action: ClosetCommands,
    },

    /// Recommend an outfit for a location
    Recommend {
        /// Location identifier, part of the seed
        #[arg(long)]
        location: String,

        #[command(flatten)]
        weather: WeatherArgs,

        /// Reroll counter for this location
        #[arg(long, default_value_t = 0)]
        reroll: u32,
    },
}

#[derive(Subcommand)]
enum ClosetCommands {
    /// List items, optionally of one category
    List {
        #[arg(long)]
        category: Option<String>,
    },

    /// Add an item from a vision classifier reply
    Add {
        /// Image handle stored with the item
        #[arg(long)]
        image: String,

        /// Raw reply text or JSON record
        #[arg(long)]
        reply: String,

        /// Item id (defaults to the current Unix time in milliseconds)
        #[arg(long)]
        id: Option<String>,
    },

    /// Remove an item by id
    Remove { id: String },
}

#[derive(Args)]
struct WeatherArgs {
    /// Temperature in Celsius
    #[arg(long, allow_negative_numbers = true)]
    temp: f64,

    /// It is raining (or snowing)
    #[arg(long, conflicts_with = "code")]
    rain: bool,

    /// WMO weather code reported by the provider
    #[arg(long)]
    code: Option<u16>,
}

impl WeatherArgs {
    fn observation(&self, config: &OutfindConfig) -> Result<WeatherObservation> {
        if !self.temp.is_finite() {
            return Err(OutfindError::validation("temperature must be a finite number").into());
        }
        Ok(match self.code {
            Some(code) => WeatherObservation::from_weather_code(
                self.temp,
                code,
                config.weather.precipitation_code_min,
            ),
            None => WeatherObservation::new(self.temp, self.rain),
        })
    }
}

fn load_wardrobe(path: &Path) -> Result<Vec<ClothingItem>> {
    if !path.exists() {
        debug!("No wardrobe at {}, starting empty", path.display());
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .map_err(OutfindError::from)
        .with_context(|| format!("Failed to read wardrobe: {}", path.display()))?;
    let items: Vec<ClothingItem> = serde_json::from_str(&content)
        .map_err(OutfindError::from)
        .with_context(|| format!("Failed to parse wardrobe: {}", path.display()))?;
    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

fn save_wardrobe(path: &Path, items: &[ClothingItem]) -> Result<()> {
    let content = serde_json::to_string_pretty(items).map_err(OutfindError::from)?;
    fs::write(path, content)
        .map_err(OutfindError::from)
        .with_context(|| format!("Failed to write wardrobe: {}", path.display()))?;
    info!("Saved {} items to {}", items.len(), path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = OutfindConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging)?;

    let wardrobe_path = cli
        .wardrobe
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.wardrobe.path));

    match cli.command {
        Commands::Weather(args) => {
            let observation = args.observation(&config)?;
            let kind = classify(&observation);
            println!("{} ({})", kind.label(), observation.format_temperature());
        }
        Commands::Normalize { reply } => {
            let raw = wardrobe::parse_reply(&reply)?;
            let classification = wardrobe::normalize(&raw);
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        Commands::Closet { action } => run_closet(action, &wardrobe_path)?,
        Commands::Recommend {
            location,
            weather,
            reroll,
        } => {
            let observation = weather.observation(&config)?;
            let target = classify(&observation);
            let items = load_wardrobe(&wardrobe_path)?;
            let outfit = select_outfit(&items, target, &location, reroll);
            info!("Recommended {} outfit for {} (reroll {})", target, location, reroll);
            println!("{}", serde_json::to_string_pretty(&outfit)?);
            if let Some(hint) = outfit.missing_hint() {
                eprintln!("For a better outfit, {hint}.");
            }
        }
    }
    Ok(())
}

fn run_closet(action: ClosetCommands, wardrobe_path: &Path) -> Result<()> {
    let items = load_wardrobe(wardrobe_path)?;
    match action {
        ClosetCommands::List { category } => {
            let category = category.map(|c| c.parse::<Category>()).transpose()?;
            let counts = closet::category_counts(&items);
            let shown = closet::filter_by_category(&items, category);
            for item in &shown {
                let tags: Vec<&str> = item.weather_tags.iter().map(|t| t.as_str()).collect();
                let shoe = item.shoe_type.map(|s| format!(" [{s}]")).unwrap_or_default();
                println!(
                    "{}\t{}{}\t{}\t{}",
                    item.id,
                    item.category,
                    shoe,
                    tags.join(","),
                    item.badge_weather().label()
                );
            }
            println!(
                "Showing {} / {} (top {}, bottom {}, outer {}, shoes {})",
                shown.len(),
                counts.all,
                counts.top,
                counts.bottom,
                counts.outer,
                counts.shoes
            );
        }
        ClosetCommands::Add { image, reply, id } => {
            let raw = wardrobe::parse_reply(&reply)?;
            let id = id.unwrap_or_else(|| Utc::now().timestamp_millis().to_string());
            let item = ClothingItem::new(id, image, wardrobe::normalize(&raw));
            println!("{}", serde_json::to_string_pretty(&item)?);
            save_wardrobe(wardrobe_path, &closet::add_item(items, item))?;
        }
        ClosetCommands::Remove { id } => {
            let (updated, removed) = closet::remove_item(items, &id);
            if !removed {
                return Err(OutfindError::validation(format!("no item with id '{id}'")).into());
            }
            save_wardrobe(wardrobe_path, &updated)?;
            println!("Removed {id}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<OutfindError>() {
                Some(outfind_err) => eprintln!("{}", outfind_err.user_message()),
                None => eprintln!("Error: {err}"),
            }
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
