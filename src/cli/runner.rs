//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::href::{get_id_from_href, get_uuid_from_href, remove_version_from_href};
use crate::pagination::{get_pagination_params, limited_by_marker, limited_with_max};
use crate::types::QueryString;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Limit {
                count,
                query,
                max_limit,
            } => {
                let items: Vec<u64> = (0..*count).collect();
                let max_limit = max_limit.unwrap_or(config.max_limit);
                let page = limited_with_max(&items, &parse_query(query), max_limit)?;
                print_json(&page)
            }
            Commands::Marker {
                count,
                query,
                max_limit,
            } => {
                let items: Vec<u64> = (0..*count).collect();
                let max_limit = max_limit.unwrap_or(config.max_limit);
                let page = limited_by_marker(&items, &parse_query(query), max_limit)?;
                print_json(&page)
            }
            Commands::Params { query } => print_json(&get_pagination_params(&parse_query(query))?),
            Commands::StripVersion { href } => {
                println!("{}", remove_version_from_href(href)?);
                Ok(())
            }
            Commands::Id { href } => {
                println!("{}", get_id_from_href(href)?);
                Ok(())
            }
            Commands::Uuid { href } => {
                println!("{}", get_uuid_from_href(href)?);
                Ok(())
            }
            Commands::Serve { port } => {
                let mut config = config;
                if let Some(port) = port {
                    config.server.port = *port;
                }
                crate::cli::serve(config).await
            }
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_config(&self) -> Result<ApiConfig> {
        match &self.cli.config {
            Some(path) => ApiConfig::from_file(path),
            None => Ok(ApiConfig::default()),
        }
    }
}

/// Accept either a bare query string or a request path carrying one
fn parse_query(input: &str) -> QueryString {
    if input.contains('?') {
        QueryString::from_uri(input)
    } else {
        QueryString::parse(input)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
