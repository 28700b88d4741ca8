//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `netbar` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use netbar::app::{render_bar, shutdown_signal};
use netbar::bridge::{start_bridge_server, BridgeState};
use netbar::config::{
    DEFAULT_BRIDGE_PORT, DEFAULT_DOH_ENDPOINT, DEFAULT_MY_IP_PRIMARY, DEFAULT_MY_IP_SECONDARY,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MY_IP_CACHE_TTL,
};
use netbar::initialization::init_logger_with;
use netbar::lookup::extract_hostname;
use netbar::{
    BarPosition, BarSettings, Config, LogFormat, LogLevel, LookupResponse, MessageResponse, NetBar,
};

#[derive(Debug, Parser)]
#[command(
    name = "netbar",
    version,
    about = "Shows a page's IP, reverse DNS, nameservers and server, plus your public IP"
)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long, env = "NETBAR_DOH_ENDPOINT", default_value = DEFAULT_DOH_ENDPOINT, global = true)]
    doh_endpoint: String,

    /// Primary public IP provider (IP and country)
    #[arg(long, env = "NETBAR_MY_IP_PRIMARY", default_value = DEFAULT_MY_IP_PRIMARY, global = true)]
    my_ip_primary: String,

    /// Secondary public IP provider (IP only)
    #[arg(long, env = "NETBAR_MY_IP_SECONDARY", default_value = DEFAULT_MY_IP_SECONDARY, global = true)]
    my_ip_secondary: String,

    /// Seconds a public IP lookup is reused
    #[arg(long, env = "NETBAR_MY_IP_TTL", default_value_t = MY_IP_CACHE_TTL.as_secs(), global = true)]
    my_ip_ttl: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "NETBAR_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    user_agent: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve one page and print its bar line
    Lookup {
        /// Page URL, e.g. https://www.example.com/
        url: String,

        /// Print the message response as JSON instead of the bar line
        #[arg(long)]
        json: bool,

        /// Disable colors
        #[arg(long)]
        no_color: bool,

        /// Settings file; disabled sites are skipped
        #[arg(long, env = "NETBAR_SETTINGS")]
        settings: Option<PathBuf>,
    },

    /// Run the local HTTP bridge for browser-side consumers
    Serve {
        /// Port to listen on (loopback only)
        #[arg(long, env = "NETBAR_PORT", default_value_t = DEFAULT_BRIDGE_PORT)]
        port: u16,
    },

    /// Show or change bar settings
    Settings {
        /// Settings file
        #[arg(long, env = "NETBAR_SETTINGS", default_value = "netbar-settings.json")]
        file: PathBuf,

        /// Turn the bar on or off everywhere
        #[arg(long)]
        enabled: Option<bool>,

        /// Opacity percent (1-100)
        #[arg(long)]
        opacity: Option<u32>,

        /// Bar position
        #[arg(long, value_enum)]
        position: Option<PositionArg>,

        /// Hide the bar on this hostname, or show it again
        #[arg(long)]
        toggle_site: Option<String>,
    },
}

#[derive(Debug, Clone, ValueEnum)]
enum PositionArg {
    Top,
    Bottom,
}

impl From<PositionArg> for BarPosition {
    fn from(p: PositionArg) -> Self {
        match p {
            PositionArg::Top => BarPosition::Top,
            PositionArg::Bottom => BarPosition::Bottom,
        }
    }
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            doh_endpoint: self.doh_endpoint.clone(),
            my_ip_primary: self.my_ip_primary.clone(),
            my_ip_secondary: self.my_ip_secondary.clone(),
            my_ip_ttl: Duration::from_secs(self.my_ip_ttl),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        Command::Lookup {
            url,
            json,
            no_color,
            settings,
        } => run_lookup(&config, &url, json, no_color, settings).await,
        Command::Serve { port } => run_serve(&config, port).await,
        Command::Settings {
            file,
            enabled,
            opacity,
            position,
            toggle_site,
        } => run_settings(file, enabled, opacity, position, toggle_site),
    };

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("netbar error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Runs one lookup. Returns `false` if the lookup failed.
async fn run_lookup(
    config: &Config,
    url: &str,
    json: bool,
    no_color: bool,
    settings: Option<PathBuf>,
) -> Result<bool> {
    if let Some(path) = settings {
        let settings = BarSettings::load(&path)?;
        if let Ok(host) = extract_hostname(url) {
            if !settings.should_show(&host) {
                println!("NetBar is hidden on {host}");
                return Ok(true);
            }
        }
    }

    let netbar = NetBar::from_config(config).context("Failed to initialize lookup client")?;
    let response = netbar.handle_lookup(url, None, |_| None).await;
    let ok = matches!(response, LookupResponse::Success(_));

    if json {
        let message = MessageResponse::from(response);
        let out =
            serde_json::to_string_pretty(&message).context("Failed to serialize response")?;
        println!("{out}");
    } else {
        let colorize = !no_color && std::io::stdout().is_terminal();
        println!("{}", render_bar(&response, colorize));
    }

    Ok(ok)
}

async fn run_serve(config: &Config, port: u16) -> Result<bool> {
    let netbar = NetBar::from_config(config).context("Failed to initialize lookup client")?;
    log::info!("Resolving through {}", netbar.doh().endpoint());
    start_bridge_server(port, BridgeState::new(netbar), shutdown_signal()).await?;
    Ok(true)
}

fn run_settings(
    file: PathBuf,
    enabled: Option<bool>,
    opacity: Option<u32>,
    position: Option<PositionArg>,
    toggle_site: Option<String>,
) -> Result<bool> {
    let mut settings = BarSettings::load(&file)?;
    let changed =
        enabled.is_some() || opacity.is_some() || position.is_some() || toggle_site.is_some();

    if let Some(enabled) = enabled {
        settings.enabled = enabled;
    }
    if let Some(opacity) = opacity {
        settings.opacity = opacity;
    }
    if let Some(position) = position {
        settings.position = position.into();
    }
    if let Some(host) = toggle_site {
        let disabled = settings.toggle_site(&host);
        println!(
            "NetBar {} on {host}",
            if disabled { "hidden" } else { "shown" }
        );
    }

    let settings = settings.normalized();
    if changed {
        settings.save(&file)?;
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?
    );
    Ok(true)
}
