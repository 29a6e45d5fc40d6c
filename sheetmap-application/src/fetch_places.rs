use super::*;

use usecases::RetryPolicy;

/// Run the whole pipeline for an already validated reference.
///
/// Nothing but the injected gateways is touched, i.e.
/// neither the controller state nor the session.
pub fn fetch_places(
    rows: &dyn RowSourceGateway,
    geocoder: &dyn GeoCodingGateway,
    pacer: &dyn Pacer,
    policy: &RetryPolicy,
    reference: &DatasetReference,
) -> Result<Vec<ResolvedPlace>> {
    let sheet_id = reference.sheet_id();
    let raw_rows = rows
        .fetch_rows(sheet_id)
        .map_err(PipelineError::RowRetrieval)?;
    debug!("Fetched {} rows of sheet {sheet_id}", raw_rows.len());
    let rows = usecases::decode_rows(raw_rows)?;
    let groups = usecases::group_by_address(rows);
    debug!("Resolving {} distinct addresses", groups.len());
    let resolved = usecases::resolve_address_groups(geocoder, pacer, policy, groups)?;
    Ok(usecases::merge_places(resolved))
}
