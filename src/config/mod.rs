use anyhow::{anyhow, bail, Result};
use sheetmap_core::usecases::{RetryPolicy, DEFAULT_MAX_ATTEMPTS, DEFAULT_PACING_DELAY};
use sheetmap_gateways::{google_maps, google_sheets};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "sheetmap.toml";

const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_GOOGLE_SHEETS_API_KEY: &str = "GOOGLE_SHEETS_API_KEY";

#[derive(Debug)]
pub struct Config {
    pub resolution: RetryPolicy,
    pub rows: RowSource,
    pub geocoding: GeocodingGateway,
    pub session: Session,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let defaults = raw::Config::try_default()?;
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str::<raw::Config>(&cfg_string)?.or(defaults),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    defaults
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_api_keys(
            env::var(ENV_NAME_GOOGLE_MAPS_API_KEY).ok(),
            env::var(ENV_NAME_GOOGLE_SHEETS_API_KEY).ok(),
        );
        Ok(cfg)
    }

    fn override_api_keys(&mut self, maps_api_key: Option<String>, sheets_api_key: Option<String>) {
        if let Some(key) = maps_api_key {
            let GeocodingGateway::GoogleMaps { api_key, .. } = &mut self.geocoding;
            *api_key = key;
        }
        if let Some(key) = sheets_api_key {
            if let RowSource::GoogleSheets { api_key, .. } = &mut self.rows {
                *api_key = key;
            }
        }
    }
}

#[derive(Debug)]
pub enum RowSource {
    GoogleSheets {
        api_key: String,
        api_base_url: String,
        range: String,
    },
    /// For local testing purposes
    TsvDir {
        /// File system directory with the exported sheets.
        dir: PathBuf,
    },
}

#[derive(Debug)]
pub enum GeocodingGateway {
    GoogleMaps { api_key: String, api_url: String },
}

#[derive(Debug)]
pub struct Session {
    /// File system directory for the saved session values.
    pub dir: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            resolution,
            rows,
            geocoding,
            session,
            gateway,
        } = from;

        let raw::Resolution {
            max_attempts,
            pacing_delay,
        } = resolution.ok_or_else(|| anyhow!("Missing resolution configuration"))?;
        let max_attempts = max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
        if max_attempts == 0 {
            bail!("At least one geocoding attempt per address is required");
        }
        let resolution = RetryPolicy {
            max_attempts,
            pacing_delay: pacing_delay.unwrap_or(DEFAULT_PACING_DELAY),
        };

        let gateway = gateway.ok_or_else(|| anyhow!("Missing gateway configuration"))?;

        let raw::Rows { source } = rows.ok_or_else(|| anyhow!("Missing rows configuration"))?;
        let rows = match source {
            raw::RowSource::GoogleSheets => {
                let raw::GoogleSheets {
                    api_key,
                    api_base_url,
                    range,
                } = gateway
                    .google_sheets
                    .ok_or_else(|| anyhow!("Missing 'google-sheets' gateway configuration"))?;
                log::info!("Use Google Sheets as row source");
                RowSource::GoogleSheets {
                    api_key,
                    api_base_url: api_base_url
                        .unwrap_or_else(|| google_sheets::DEFAULT_API_BASE_URL.to_owned()),
                    range: range.unwrap_or_else(|| google_sheets::DEFAULT_RANGE.to_owned()),
                }
            }
            raw::RowSource::TsvDir => {
                let raw::TsvDir { dir } = gateway
                    .tsv_dir
                    .ok_or_else(|| anyhow!("Missing 'tsv-dir' gateway configuration"))?;
                log::info!("Use TSV files as row source ({})", dir.display());
                RowSource::TsvDir { dir }
            }
        };

        let raw::Geocoding { gateway: gw_name } =
            geocoding.ok_or_else(|| anyhow!("Missing geocoding configuration"))?;
        let geocoding = match gw_name {
            raw::GeocodingGateway::GoogleMaps => {
                let raw::GoogleMaps { api_key, api_url } = gateway
                    .google_maps
                    .ok_or_else(|| anyhow!("Missing 'google-maps' gateway configuration"))?;
                GeocodingGateway::GoogleMaps {
                    api_key,
                    api_url: api_url.unwrap_or_else(|| google_maps::DEFAULT_API_URL.to_owned()),
                }
            }
        };

        let raw::Session { dir } = session.ok_or_else(|| anyhow!("Missing session configuration"))?;
        let session = Session { dir };

        Ok(Self {
            resolution,
            rows,
            geocoding,
            session,
        })
    }
}
