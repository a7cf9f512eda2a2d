//! Server configuration: a TOML file with command line overrides

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use ctamap_core::RouteSourcesConfig;
use serde::Deserialize;

use crate::error::ServerError;

/// Serve the CTA route table as mode-filtered GeoJSON
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Rail lines GeoJSON, overrides `sources.rail_path`
    #[arg(long)]
    pub rail: Option<PathBuf>,
    /// Bus routes GeoJSON, overrides `sources.bus_path`
    #[arg(long)]
    pub bus: Option<PathBuf>,
    /// Listen address, overrides `bind`
    #[arg(long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    pub sources: RouteSourcesConfig,
}

impl ServerConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(text)?)
    }

    /// Resolves the effective configuration from the file (if any) and
    /// the command line flags, flags taking precedence.
    pub fn from_args(args: &Args) -> Result<Self, ServerError> {
        let mut config = match &args.config {
            Some(path) => Self::from_toml_file(path)?,
            None => {
                let (Some(rail), Some(bus)) = (&args.rail, &args.bus) else {
                    return Err(ServerError::MissingSources);
                };
                Self {
                    bind: default_bind(),
                    max_concurrent_requests: default_max_concurrent_requests(),
                    sources: RouteSourcesConfig::new(rail, bus),
                }
            }
        };

        if let Some(rail) = &args.rail {
            config.sources.rail_path.clone_from(rail);
        }
        if let Some(bus) = &args.bus {
            config.sources.bus_path.clone_from(bus);
        }
        if let Some(bind) = args.bind {
            config.bind = bind;
        }

        Ok(config)
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8050))
}

fn default_max_concurrent_requests() -> usize {
    64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = ServerConfig::from_toml_str(
            r#"
            bind = "0.0.0.0:9000"
            max_concurrent_requests = 8

            [sources]
            rail_path = "data/rail.geojson"
            bus_path = "data/bus.geojson"
            bus_route_field = "ROUTE"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.max_concurrent_requests, 8);
        assert_eq!(config.sources.rail_path, PathBuf::from("data/rail.geojson"));
        assert_eq!(config.sources.bus_route_field, "ROUTE");
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let config = ServerConfig::from_toml_str(
            r#"
            [sources]
            rail_path = "rail.geojson"
            bus_path = "bus.geojson"
            "#,
        )
        .unwrap();

        assert_eq!(config.bind, default_bind());
        assert_eq!(config.sources.bus_route_field, "route");
    }

    #[test]
    fn sources_table_is_required() {
        assert!(ServerConfig::from_toml_str("bind = \"127.0.0.1:1\"").is_err());
    }

    #[test]
    fn flags_alone_are_enough() {
        let args = Args::parse_from(["ctamap-server", "--rail", "r.geojson", "--bus", "b.geojson"]);
        let config = ServerConfig::from_args(&args).unwrap();
        assert_eq!(config.sources, RouteSourcesConfig::new("r.geojson", "b.geojson"));
    }

    #[test]
    fn missing_sources_are_reported() {
        let args = Args::parse_from(["ctamap-server", "--rail", "r.geojson"]);
        assert!(matches!(
            ServerConfig::from_args(&args),
            Err(ServerError::MissingSources)
        ));
    }
}
