use sheetmap_entities::place::GeocodedPlace;

pub trait GeoCodingGateway {
    /// Look up the candidates for a free-text address, best match first.
    ///
    /// An empty result is not an error here, but callers
    /// may treat it as one.
    fn resolve_address(&self, address: &str) -> anyhow::Result<Vec<GeocodedPlace>>;
}
