use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/expense_tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the expense service.
    pub base_url: String,
    /// Identifier of the logged-in user (authentication happens elsewhere;
    /// the dashboard only needs the id to scope its requests).
    pub user_id: String,
    /// Rows per table page.
    pub page_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4000".to_string(),
            user_id: String::new(),
            page_size: 5,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "expense_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:4000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the user id.
    #[arg(long)]
    user_id: Option<String>,
    /// Override rows per page.
    #[arg(long)]
    page_size: Option<u64>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("EXPENSE_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(user_id) = args.user_id {
        settings.user_id = user_id;
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = page_size;
    }

    Ok(settings)
}
