/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("co2-stats/", env!("CARGO_PKG_VERSION"));

/// GHG Center STAC API base URL
pub const STAC_API_BASE: &str = "https://earth.gov/ghgcenter/api/stac";

/// GHG Center raster API base URL
pub const RASTER_API_BASE: &str = "https://earth.gov/ghgcenter/api/raster";

/// ODIAC fossil fuel CO2 monthly grid
pub const COLLECTION_NAME: &str = "odiac-ffco2-monthgrid-v2023";

/// Asset holding the emission raster in each STAC item
pub const ASSET_NAME: &str = "co2-emissions";

/// Number of catalog items requested per lookup
pub const ITEM_LIMIT: u32 = 300;

/// Side of the sampled square, in degrees
pub const POLYGON_OFFSET: f64 = 0.20;

/// Raster band carrying the emission values
pub const BAND: &str = "b1";

/// Address the HTTP endpoint binds to unless configured
pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";
