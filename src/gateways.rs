use std::sync::Arc;

use anyhow::{Context, Result};
use sheetmap_application::prelude::{Gateways, Pipeline};
use sheetmap_core::gateways::rows::RowSourceGateway;
use sheetmap_gateways::{
    google_maps::GoogleMaps, google_sheets::GoogleSheets, notify::LogNotifier,
    pace::ThreadSleep, session::JsonFileSessionStore, tsv::TsvDirectory,
};

use crate::config::{Config, GeocodingGateway, RowSource};

/// Wire up the configured gateways.
pub fn init_pipeline(cfg: Config) -> Result<Pipeline> {
    let Config {
        resolution,
        rows,
        geocoding,
        session,
    } = cfg;

    let rows: Arc<dyn RowSourceGateway + Send + Sync> = match rows {
        RowSource::GoogleSheets {
            api_key,
            api_base_url,
            range,
        } => Arc::new(GoogleSheets::try_new(api_key, api_base_url, range)?),
        RowSource::TsvDir { dir } => Arc::new(TsvDirectory::new(dir)),
    };

    let geocoder = match geocoding {
        GeocodingGateway::GoogleMaps { api_key, api_url } => {
            log::info!("Use Google Maps geocoding gateway");
            Arc::new(GoogleMaps::try_new(api_key, api_url)?)
        }
    };

    let session = JsonFileSessionStore::try_new(&session.dir).with_context(|| {
        format!(
            "Unable to open the session directory {}",
            session.dir.display()
        )
    })?;
    log::debug!("Keep session values in {}", session.path().display());

    let gateways = Gateways {
        rows,
        geocoder,
        pacer: Arc::new(ThreadSleep),
        session: Arc::new(session),
        notify: Arc::new(LogNotifier::all()),
    };
    Ok(Pipeline::new(gateways, resolution))
}
