use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use yaweather_core::{Config, Place, WeatherRequest, provider::provider_from_config};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "yaweather", version, about = "Yandex.Weather informer CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default language.
    Configure,

    /// Show current weather and today's forecast.
    Show(ShowArgs),

    /// Manage saved places.
    #[command(subcommand)]
    Place(PlaceCommand),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Saved place name; use --lat/--lon instead for ad-hoc coordinates.
    #[arg(conflicts_with_all = ["lat", "lon"])]
    pub place: Option<String>,

    #[arg(long, allow_negative_numbers = true, requires = "lon")]
    pub lat: Option<f64>,

    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Locale tag, e.g. ru_RU or en_US. Defaults to the configured one.
    #[arg(long)]
    pub lang: Option<String>,

    /// API key; overrides the configured one.
    #[arg(long, env = "YANDEX_WEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Print the raw decoded response as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum PlaceCommand {
    /// Save (or replace) a named pair of coordinates.
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Forget a saved place.
    Remove { name: String },
    /// List saved places.
    List,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show(args) => show(args).await,
            Command::Place(cmd) => place(cmd),
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("Yandex.Weather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(api_key.trim().to_string());

    let lang = Text::new("Default language:")
        .with_default(config.lang())
        .prompt()
        .context("Failed to read language")?;
    config.lang = Some(lang.trim().to_string());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if let Some(key) = args.api_key {
        config.set_api_key(key);
    }

    let coords = match (args.place.as_deref(), args.lat, args.lon) {
        (Some(name), _, _) => config.place(name)?,
        (None, Some(lat), Some(lon)) => Place { lat, lon },
        _ => bail!("Specify a saved place or both --lat and --lon."),
    };

    let request = WeatherRequest {
        latitude: coords.lat,
        longitude: coords.lon,
        lang: args.lang.unwrap_or_else(|| config.lang().to_string()),
    };

    let provider = provider_from_config(&config)?;
    let weather = provider.get_weather(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&weather)?);
    } else {
        print!("{}", output::render(&weather));
    }

    Ok(())
}

fn place(cmd: PlaceCommand) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    match cmd {
        PlaceCommand::Add { name, lat, lon } => {
            let replaced = config.upsert_place(&name, Place { lat, lon });
            config.save()?;
            let verb = if replaced { "Updated" } else { "Saved" };
            println!("{verb} place '{name}' ({lat}, {lon})");
        }
        PlaceCommand::Remove { name } => {
            if config.remove_place(&name).is_none() {
                bail!("Unknown place '{name}'");
            }
            config.save()?;
            println!("Removed place '{name}'");
        }
        PlaceCommand::List => {
            if config.places.is_empty() {
                println!("No saved places.");
            }
            for (name, p) in &config.places {
                println!("{name}: {}, {}", p.lat, p.lon);
            }
        }
    }

    Ok(())
}
