use std::net::SocketAddr;

use clap::{crate_description, crate_name, crate_version, Args, Parser, Subcommand};

use crate::constants::{ASSET_NAME, COLLECTION_NAME, DEFAULT_LISTEN, RASTER_API_BASE, STAC_API_BASE};

#[derive(Debug, Parser)]
#[command(name = crate_name!(), version = crate_version!(), about = crate_description!())]
pub struct Opts {
    /// Address the HTTP endpoint listens on
    #[arg(long, global = true, env = "CO2_STATS_LISTEN", default_value = DEFAULT_LISTEN)]
    pub listen: SocketAddr,
    #[command(flatten)]
    pub upstream: UpstreamConfig,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP endpoint (default)
    Serve,
    /// Expose the lookup as an MCP tool over stdio
    Mcp,
}

/// Where the catalog and raster statistics live.
#[derive(Debug, Clone, Args)]
pub struct UpstreamConfig {
    /// STAC API base URL
    #[arg(long, global = true, env = "CO2_STATS_STAC_URL", default_value = STAC_API_BASE)]
    pub stac_url: String,
    /// Raster API base URL
    #[arg(long, global = true, env = "CO2_STATS_RASTER_URL", default_value = RASTER_API_BASE)]
    pub raster_url: String,
    /// STAC collection to sample
    #[arg(long, global = true, env = "CO2_STATS_COLLECTION", default_value = COLLECTION_NAME)]
    pub collection: String,
    /// Item asset holding the emission raster
    #[arg(long, global = true, env = "CO2_STATS_ASSET", default_value = ASSET_NAME)]
    pub asset: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            stac_url: STAC_API_BASE.to_string(),
            raster_url: RASTER_API_BASE.to_string(),
            collection: COLLECTION_NAME.to_string(),
            asset: ASSET_NAME.to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Same configuration pointed at a single host.
    #[cfg(test)]
    pub fn with_base(base: &str) -> Self {
        Self {
            stac_url: format!("{base}/stac"),
            raster_url: format!("{base}/raster"),
            ..Self::default()
        }
    }

    pub fn items_url(&self) -> String {
        format!(
            "{}/collections/{}/items",
            self.stac_url.trim_end_matches('/'),
            self.collection
        )
    }

    pub fn statistics_url(&self) -> String {
        format!("{}/cog/statistics", self.raster_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Opts::try_parse_from(["co2-stats"]).unwrap();
        assert!(opts.command.is_none());
        assert_eq!(opts.listen.port(), 5000);
        assert_eq!(
            opts.upstream.items_url(),
            "https://earth.gov/ghgcenter/api/stac/collections/odiac-ffco2-monthgrid-v2023/items"
        );
        assert_eq!(
            opts.upstream.statistics_url(),
            "https://earth.gov/ghgcenter/api/raster/cog/statistics"
        );
    }

    #[test]
    fn test_serve_flags() {
        let opts = Opts::try_parse_from([
            "co2-stats",
            "serve",
            "--listen",
            "0.0.0.0:8080",
            "--stac-url",
            "http://localhost:9000/stac/",
        ])
        .unwrap();

        assert!(matches!(opts.command, Some(Command::Serve)));
        assert_eq!(opts.listen.port(), 8080);
        assert_eq!(
            opts.upstream.items_url(),
            "http://localhost:9000/stac/collections/odiac-ffco2-monthgrid-v2023/items"
        );
    }

    #[test]
    fn test_bad_listen_address() {
        assert!(Opts::try_parse_from(["co2-stats", "serve", "--listen", "nowhere"]).is_err());
    }
}
