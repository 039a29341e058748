// CLI module for img-alt-api
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// img-alt-api - Image alt text generator backed by OpenAI vision models
#[derive(Parser, Debug, Default)]
#[command(name = "img-alt-api", version, about, long_about = None)]
pub struct Args {
    /// Address to bind (overrides config file and environment)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config file and environment)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file (default: ~/.img-alt-api/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
