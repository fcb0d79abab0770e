mod provider;
mod view;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lunchr_api::{LocationMode, RouletteClient};
use lunchr_app::{messages, ControllerSettings, ResultView, SearchController};
use lunchr_core::AppConfig;
use lunchr_geo::{DeviceLocation, LocationProvider, ReverseGeocoder};

use crate::provider::ArgsLocationProvider;
use crate::view::TerminalView;

#[derive(Debug, Parser)]
#[command(name = "lunchr")]
#[command(about = "Lunch roulette command line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Spin the roulette once and print the pick.
    Spin(SpinArgs),
    /// Print the genre master list.
    Genres,
    /// Print the area master list.
    Areas,
}

#[derive(Debug, Args)]
struct SpinArgs {
    /// Middle-area code; switches the search to area mode.
    #[arg(long)]
    area: Option<String>,

    /// Maximum walking time in minutes (current-location mode).
    #[arg(long, default_value_t = 10)]
    walking_time: u32,

    /// Budget code filter.
    #[arg(long)]
    budget: Option<String>,

    /// Genre code filter.
    #[arg(long)]
    genre: Option<String>,

    /// Device latitude; together with --lon enables the GPS flow.
    #[arg(long, requires = "lon")]
    lat: Option<f64>,

    /// Device longitude.
    #[arg(long, requires = "lat")]
    lon: Option<f64>,

    /// Reported accuracy of the supplied coordinates, in meters.
    #[arg(long, default_value_t = 50.0)]
    accuracy: f64,
}

impl SpinArgs {
    fn device_fix(&self) -> Option<DeviceLocation> {
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => Some(DeviceLocation {
                latitude,
                longitude,
                accuracy_m: self.accuracy,
            }),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = lunchr_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let outcome = match cli.command {
        Commands::Spin(args) => run_spin(&config, args).await,
        Commands::Genres => run_genres(&config).await,
        Commands::Areas => run_areas(&config).await,
    };

    if let Err(err) = outcome {
        tracing::error!(error = %err, "unexpected failure");
        eprintln!("{}", messages::UNEXPECTED_FAILURE);
        std::process::exit(1);
    }
    Ok(())
}

async fn run_spin(config: &AppConfig, args: SpinArgs) -> anyhow::Result<()> {
    let client = roulette_client(config)?;
    let geocoder = ReverseGeocoder::new(
        &config.nominatim_url,
        config.geocoder_timeout_secs,
        &config.user_agent,
    )?;
    let provider = ArgsLocationProvider::new(args.device_fix());
    let settings = ControllerSettings {
        error_dismiss: Duration::from_millis(config.error_dismiss_ms),
        location_capable: config.location_mode_enabled,
    };
    let mut controller =
        SearchController::new(client, Some(geocoder), provider, TerminalView, settings);

    controller.load_genres().await;
    controller.load_areas().await;

    apply_spin_args(&mut controller, &args, config.location_mode_enabled);
    if controller.mode() == LocationMode::Current && args.device_fix().is_some() {
        controller.acquire_location().await;
    }

    if controller.execute_search().await.is_err() {
        // The view already printed the mapped banner copy.
        std::process::exit(1);
    }
    Ok(())
}

/// Copies the command-line selections into the controller's mode and form.
///
/// `--area` enters area mode only when the feature is enabled; when the flag
/// is ignored the current-mode setup (walking time) still applies.
fn apply_spin_args<P, V>(
    controller: &mut SearchController<P, V>,
    args: &SpinArgs,
    location_mode_enabled: bool,
) where
    P: LocationProvider,
    V: ResultView,
{
    match &args.area {
        Some(area) if location_mode_enabled => {
            controller.switch_mode(LocationMode::Area);
            controller.form_mut().area_code.clone_from(area);
        }
        Some(_) => {
            tracing::warn!("--area ignored: location-mode feature disabled");
            controller.form_mut().walking_time_min = args.walking_time;
        }
        None => {
            controller.form_mut().walking_time_min = args.walking_time;
        }
    }
    if let Some(budget) = &args.budget {
        controller.form_mut().budget_code.clone_from(budget);
    }
    if let Some(genre) = &args.genre {
        controller.form_mut().genre_code.clone_from(genre);
    }
}

async fn run_genres(config: &AppConfig) -> anyhow::Result<()> {
    let client = roulette_client(config)?;
    for genre in client.fetch_genres().await? {
        println!("{}\t{}", genre.code, genre.name);
    }
    Ok(())
}

async fn run_areas(config: &AppConfig) -> anyhow::Result<()> {
    let client = roulette_client(config)?;
    for area in client.fetch_areas().await? {
        println!("{}\t{}", area.code, area.name);
    }
    Ok(())
}

fn roulette_client(config: &AppConfig) -> anyhow::Result<RouletteClient> {
    Ok(RouletteClient::new(
        &config.server_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}
