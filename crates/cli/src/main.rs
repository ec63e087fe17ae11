//! motorctl
//!
//! Usage:
//!   motorctl get
//!   motorctl set --rotation-speed 80
//!   motorctl start | stop
//!   motorctl save [--rotation-speed N] [--interval-time N]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, Level};

use motor_panel_cli::commands::{self, Overrides};
use motor_panel_cli::{Config, ReqwestTransport};
use motor_panel_protocol::{Command, PanelClient};

#[derive(Debug, Parser)]
#[command(name = "motorctl", version, about = "Control the motor panel device from the terminal")]
struct Cli {
    /// Device base URL (overrides the config file)
    #[arg(long, env = "MOTOR_PANEL_URL", global = true)]
    base_url: Option<String>,

    /// Config file (default: ~/.config/motor-panel/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Show the device's current settings
    Get,
    /// Push settings without saving them
    Set(SettingsArgs),
    /// Start the motor
    Start,
    /// Stop the motor
    Stop,
    /// Push settings and persist them on the device
    Save(SettingsArgs),
}

#[derive(Debug, Args)]
struct SettingsArgs {
    /// Rotation speed, percent of max speed
    #[arg(long)]
    rotation_speed: Option<i64>,
    /// Seconds between direction changes
    #[arg(long)]
    interval_time: Option<i64>,
}

impl From<SettingsArgs> for Overrides {
    fn from(args: SettingsArgs) -> Self {
        Self {
            rotation_speed: args.rotation_speed,
            interval_time: args.interval_time,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_base_url(cli.base_url);
    debug!(base_url = %config.base_url, "using device");

    let client = PanelClient::new(ReqwestTransport::new(), &config.base_url);

    match cli.action {
        Action::Get => {
            let settings = commands::fetch_settings(&client).await?;
            println!("{}", commands::format_settings(&settings));
        }
        Action::Set(args) => {
            let settings = commands::resolve_settings(&client, args.into()).await?;
            commands::run_command(&client, Command::Update(settings)).await?;
        }
        Action::Start => commands::run_command(&client, Command::Start).await?,
        Action::Stop => commands::run_command(&client, Command::Stop).await?,
        Action::Save(args) => {
            let settings = commands::resolve_settings(&client, args.into()).await?;
            commands::run_command(&client, Command::Save(settings)).await?;
        }
    }

    Ok(())
}
