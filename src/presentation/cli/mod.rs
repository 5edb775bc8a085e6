pub mod render;

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::application::ServerConfig;
use crate::application::settings::{DEFAULT_SECRET_KEY, Settings};
use crate::application::state::AppStateConfig;
use crate::infrastructure::{ai, pexels};
use render::RenderCommand;

#[derive(Debug, Parser)]
#[command(author, version, about = "Build HTML email banners for events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// Render a banner from a JSON file (or stdin) to stdout
    Render(RenderCommand),
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "BANNERFORGE_BIND_ADDRESS", default_value = "127.0.0.1:5001")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "FLASK_SECRET_KEY", default_value = DEFAULT_SECRET_KEY, hide_env_values = true)]
    pub secret_key: String,

    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    #[arg(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub pexels_api_key: Option<String>,

    /// Cache lifetime for static assets in seconds; 0 disables caching
    #[arg(long, env = "BANNERFORGE_STATIC_MAX_AGE", default_value_t = 0)]
    pub static_max_age: u64,

    #[arg(long, env = "BANNERFORGE_ANTHROPIC_MODEL", default_value = ai::DEFAULT_MODEL)]
    pub anthropic_model: String,

    #[arg(long, env = "BANNERFORGE_ANTHROPIC_URL", default_value = ai::ANTHROPIC_URL)]
    pub anthropic_url: String,

    #[arg(long, env = "BANNERFORGE_PEXELS_URL", default_value = pexels::PEXELS_SEARCH_URL)]
    pub pexels_url: String,
}

impl From<ServeCommand> for ServerConfig {
    fn from(command: ServeCommand) -> Self {
        let settings = Settings::new(
            command.secret_key,
            command.anthropic_api_key,
            command.pexels_api_key,
            Duration::from_secs(command.static_max_age),
        );

        ServerConfig {
            bind_address: command.bind_address,
            state: AppStateConfig {
                settings,
                anthropic_url: command.anthropic_url,
                anthropic_model: command.anthropic_model,
                pexels_url: command.pexels_url,
            },
        }
    }
}
