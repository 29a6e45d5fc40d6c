use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("sheetmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub resolution: Option<Resolution>,
    pub rows: Option<Rows>,
    pub geocoding: Option<Geocoding>,
    pub session: Option<Session>,
    pub gateway: Option<Gateway>,
}

impl Config {
    pub fn try_default() -> anyhow::Result<Self> {
        let cfg = toml::from_str(DEFAULT_CONFIG_FILE)?;
        Ok(cfg)
    }

    /// Fill all missing sections with the given defaults.
    pub fn or(self, defaults: Self) -> Self {
        let Self {
            resolution,
            rows,
            geocoding,
            session,
            gateway,
        } = self;
        let gateway = match (gateway, defaults.gateway) {
            (Some(gateway), Some(defaults)) => Some(gateway.or(defaults)),
            (gateway, defaults) => gateway.or(defaults),
        };
        Self {
            resolution: resolution.or(defaults.resolution),
            rows: rows.or(defaults.rows),
            geocoding: geocoding.or(defaults.geocoding),
            session: session.or(defaults.session),
            gateway,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Resolution {
    pub max_attempts: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub pacing_delay: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Rows {
    pub source: RowSource,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowSource {
    GoogleSheets,
    TsvDir,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    GoogleMaps,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Session {
    pub dir: PathBuf,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub google_maps: Option<GoogleMaps>,
    pub google_sheets: Option<GoogleSheets>,
    pub tsv_dir: Option<TsvDir>,
}

impl Gateway {
    fn or(self, defaults: Self) -> Self {
        Self {
            google_maps: self.google_maps.or(defaults.google_maps),
            google_sheets: self.google_sheets.or(defaults.google_sheets),
            tsv_dir: self.tsv_dir.or(defaults.tsv_dir),
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    #[serde(default)]
    pub api_key: String,
    pub api_url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleSheets {
    #[serde(default)]
    pub api_key: String,
    pub api_base_url: Option<String>,
    pub range: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TsvDir {
    pub dir: PathBuf,
}
